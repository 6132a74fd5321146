/*!
# `[LET] <variable>=<expression>`

## Purpose
Assigns a value to a variable. The word `LET` is optional.

## Remarks
String variables end with `$` and take string expressions. Boolean
expressions cannot be assigned; `LET X = 1 < 2` is a syntax error.

*/
