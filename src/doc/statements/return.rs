/*!
# `RETURN`
Also see `GOSUB`

## Purpose
Returns from a subroutine.

## Remarks
Loops left open inside the subroutine are discarded.

*/
