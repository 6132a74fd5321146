/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
`FOR` loops are stack based. With a variable, loops of other
variables on top of the stack are discarded until the matching one
is found. Without a variable, the innermost loop continues.
Some confusion (or abuse) can happen if using `GOTO` to break a loop.

## Example
```text
FOR J=1 TO 2:FOR I=1 TO 2:PRINT I*J;:NEXT I:NEXT J
 1  2  2  4
```

*/
