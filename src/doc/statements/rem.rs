/*!
# `REM <comment>`
`'` is the same as `REM`.

## Purpose
Comments. The rest of the line is ignored.

*/
