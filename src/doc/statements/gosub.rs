/*!
# `GOSUB <line>`
Also see `RETURN`

## Purpose
Calls a subroutine at the given line.

## Remarks
`RETURN` continues with the statement after the `GOSUB`.
Subroutines may call other subroutines.

## Example
```text
10 GOSUB 100
20 PRINT "BACK"
30 END
100 PRINT "SUB"
110 RETURN
RUN
SUB
BACK
```

*/
