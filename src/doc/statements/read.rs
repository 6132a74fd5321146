/*!
# `READ <variable>[,<variable>...]`
Also see `DATA` and `RESTORE`

## Purpose
Assigns the next `DATA` constants to variables.

## Remarks
Reading a string into a numeric variable, or a number into a string
variable, is a `TYPE MISMATCH`. Reading past the last constant is
`OUT OF DATA`.

*/
