/*!
# `END`

## Purpose
Stops the program. Unlike `STOP` there is nothing to continue.

*/
