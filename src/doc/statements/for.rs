/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
Also see `NEXT`

## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
The start value is assigned when the `FOR` executes. Every `NEXT`
evaluates the step, end and start again, so a loop over `1 TO N`
sees changes made to `N` inside the loop. The step defaults to 1.

The first iteration always executes even if starting past the end.
The loop ends when the variable passes the end value or moves
away from the start value. A step of 0 is an error when the
`NEXT` is reached.

## Example
```text
10 FOR I=3 TO 1 STEP -1
20 PRINT I;
30 NEXT I
RUN
 3  2  1
```

*/
