/*!
# `TRON ["file"]` and `TROFF`

## Purpose
Turns tracing of executed statements on and off.

## Remarks
Each traced statement is written with its line number, followed by
the current value of every variable it uses. When a file is given
the trace goes there instead of the output.

## Example
```text
10 TRON : X = 5 : PRINT X
RUN
**:   10:LET X = 5
        :X = Not yet defined.
**:   10:PRINT X
        :X = 5
 5
```

*/
