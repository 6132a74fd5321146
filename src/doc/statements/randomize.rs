/*!
# `RANDOMIZE [TIMER|<expression>]`

## Purpose
Reseeds the random number generator used by `RND`.

## Remarks
Without an argument the seed comes from the system's entropy.
`TIMER` seeds from the seconds since midnight. An expression gives
a repeatable sequence. Programs start with seed 0 unless the
`--seed` option is given.

*/
