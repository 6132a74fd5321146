/*!
# `RESTORE`

## Purpose
The next `READ` starts again with the first `DATA` constant.

*/
