/*!
# `GOTO <line>`

## Purpose
Continues execution at the given line.

## Remarks
A `GOTO` typed in direct mode starts the program at that line
without clearing variables.

*/
