/*!
# `STOP`

## Purpose
Halts the program with a message so it can be continued.

## Remarks
`CONT` or `RESUME` continues after the `STOP`. Variables can be
inspected with `DUMP` or direct mode `PRINT` in the meantime.

## Example
```text
10 PRINT 1 : STOP : PRINT 2
RUN
 1
STOP at line 10
CONT
 2
```

*/
