/*!
# `ON expression <GOTO|GOSUB> <line>[,<line>...]`

## Purpose
Branches to a line based on the value of expression.

## Remarks
The value 0 goes to the first line, 1 the second, etc.
Negative values and values past the end of the list do not branch.

## Example
```text
10 ON X GOSUB 100, 200, 300
```

*/
