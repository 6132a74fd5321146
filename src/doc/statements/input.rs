/*!
# `INPUT ["prompt";] <variable>[,<variable>...]`

## Purpose
Reads values typed by the user.

## Remarks
The prompt defaults to `?`. Values are separated by commas. Strings
may be quoted, and a quoted string may contain commas. When the typed
line runs out, `(more)` is added to the prompt and another line is
read. Numbers must start with a digit, a sign or a decimal point.

## Example
```text
10 INPUT "NAME"; N$
20 PRINT "HELLO "; N$
RUN
NAME Ada
HELLO Ada
```

*/
