/*!
# `PRINT [<expression>|;|,]...`
`?` is the same as `PRINT`.

## Purpose
Writes values to the output.

## Remarks
Numbers are followed by a space and non-negative numbers are preceded
by one. Boolean expressions print `TRUE` or `FALSE`. A comma writes a
tab. A `;` or `,` at the end suppresses the newline. `TAB$(n)` pads the
output to column n.

## Example
```text
PRINT "A"; 1; -2, 1 < 2
A 1 -2 	TRUE
```

*/
