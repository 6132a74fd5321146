/*!
# `DATA <constant>[,<constant>...]`
Also see `READ` and `RESTORE`

## Purpose
Holds constants for `READ` statements.

## Remarks
Constants are numbers, quoted strings, or a minus sign followed
by a number. Every `DATA` statement in the program is gathered, in
line order, when `RUN` starts. `DATA` statements are skipped when
execution reaches them.

## Example
```text
10 DATA 1, -2.5, "three"
20 READ A, B, C$
30 PRINT A; B; C$
RUN
 1 -2.5 three
```

*/
