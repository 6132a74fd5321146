/*!
# `DIM <variable>(<dimension>[,<dimension>...])[,...]`

## Purpose
Declares an array of up to four dimensions.

## Remarks
Arrays must be declared before use. Indexes start at 1 and run up
to the declared dimension. Every element starts as zero, or the
empty string for string arrays. Declaring an array again replaces
it. A name is either an array or a scalar, never both.

## Example
```text
10 DIM A(3), B$(2, 2)
20 A(3) = 7
30 PRINT A(3)
RUN
 7
```

*/
