/*!
# Errors

Errors print with their name, the line they happened in and a detail
message. Syntax errors also show the line with a marker under the
problem. Runtime errors show the statement that failed.

```text
10 PRINT (1
SYNTAX ERROR IN 10 (11..11); mismatched parenthesis in expression
10 PRINT (1
-----------^
```

A syntax error keeps the line out of the program. A runtime error
stops the program; the listing is untouched so it can be fixed and
run again.

| Code | Name                      | Cause                                     |
|------|---------------------------|-------------------------------------------|
| 1    | `NEXT WITHOUT FOR`        | No open loop for `NEXT`                    |
| 2    | `SYNTAX ERROR`            | The line could not be parsed               |
| 3    | `RETURN WITHOUT GOSUB`    | `RETURN` with no subroutine open           |
| 4    | `OUT OF DATA`             | `READ` or `INPUT` ran out of values        |
| 5    | `ILLEGAL FUNCTION CALL`   | Bad argument, or a `STEP` of 0             |
| 6    | `OVERFLOW`                | A result too large for a number            |
| 7    | `OUT OF MEMORY`           | Stack or array too large                   |
| 8    | `UNDEFINED LINE`          | `GOTO` or `GOSUB` to a missing line        |
| 9    | `INDEX OUT OF RANGE`      | Array index or index count is wrong        |
| 11   | `DIVIDE BY ZERO`          | Division by zero                           |
| 13   | `TYPE MISMATCH`           | A string where a number belongs, or back   |
| 15   | `STRING TOO LONG`         | A string longer than 32767 characters      |
| 16   | `EXPRESSION TOO COMPLEX`  | Expression nested too deeply               |
| 17   | `CAN'T CONTINUE`          | `CONT` when the program was not stopped    |
| 23   | `LINE BUFFER OVERFLOW`    | Line longer than 1024 characters           |
| 24   | `UNDEFINED VARIABLE`      | Variable used before it was assigned       |
| 25   | `ARRAY MUST BE DECLARED`  | Array used before `DIM`                    |
| 53   | `FILE NOT FOUND`          | No such file                               |
| 57   | `DISK I/O ERROR`          | Reading or writing failed                  |
| 62   | `BAD INPUT`               | Typed value does not fit `INPUT`           |
*/
