/*!
# `IF <condition> THEN <line>|<statements>`

## Purpose
Runs statements, or jumps, when a condition is true.

## Remarks
The condition must be a relational or boolean expression such as
`A > 1 .AND. B$ = "Y"`. The statements after `THEN` run to the end of
the line. When the condition is false execution continues with the
next line.

## Example
```text
10 IF X = 0 THEN PRINT "ZERO" : GOTO 100
20 IF X < 0 THEN 200
```

*/
