/*!
# Expressions and Types

There are two types of data, numbers and strings. Numbers are 64-bit
floating point. Variable names are letters followed by optional
letters or digits. A name ending in `$` holds a string. Names are not
case sensitive.

```text
LET PI = 3.14
NAME$ = "ADA"
```

A value must be assigned before a variable is used. Using a number
variable too early is `UNDEFINED VARIABLE`, and so is a string
variable that has not been initialized.

## Operators

From lowest to highest precedence:

| Operators                    | Meaning                              |
|------------------------------|--------------------------------------|
| `.AND.` `.OR.` `.XOR.`       | Boolean connectives                  |
| `=` `<>` `<` `<=` `>` `>=`   | Comparison, `><` is the same as `<>` |
| `+`                          | String concatenation                 |
| `&` `\|` `^`                 | Bitwise and, or, exclusive or        |
| `+` `-`                      | Addition and subtraction             |
| `*` `/`                      | Multiplication and division          |
| `**`                         | Exponent, grouped to the right       |
| `-` `!` `.NOT.`              | Negation, bitwise not, boolean not   |

Bitwise operators work on the integer part of their operands.
`2 ** 3 ** 2` is 512.

## Boolean expressions

Comparisons and the dotted connectives make boolean expressions. They
are checked when the line is entered: a boolean cannot be added to a
number, assigned with `LET`, or used as a `FOR` limit. `IF` requires one.

```text
IF A > 1 .AND. .NOT. (B$ = "N") THEN PRINT "OK"
```

Strings compare character by character. Comparing a string to a
number is a syntax error.
*/
