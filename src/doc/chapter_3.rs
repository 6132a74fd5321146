/*!
# Functions
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.123)
     0.123
    ```
    */
}

pub mod ATN {
    /*!
    ## `ATN(X)` Returns the arctangent of X.
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns the character with code X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X in radians.
    */
}

pub mod FRE {
    /*!
    ## `FRE` Returns a fixed amount of free memory.
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest integer not greater than X.
    ```text
    PRINT INT(-2.5)
    -3
    ```
    */
}

pub mod LEFT {
    /*!
    ## `LEFT$(X$, N)` Returns the first N characters of X$.
    */
}

pub mod LEN {
    /*!
    ## `LEN(X$)` Returns the number of characters in X$.
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X.
    X must be greater than zero.
    */
}

pub mod MAX {
    /*!
    ## `MAX(X, Y)` Returns the larger of X and Y.
    */
}

pub mod MID {
    /*!
    ## `MID$(X$, S[, N])` Returns N characters of X$ starting at S.
    N defaults to 1. Starting positions below 1 start at 1.
    ```text
    PRINT MID$("HELLO", 2, 3)
    ELL
    ```
    */
}

pub mod MIN {
    /*!
    ## `MIN(X, Y)` Returns the smaller of X and Y.
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT$(X$, N)` Returns the last N characters of X$.
    */
}

pub mod RND {
    /*!
    ## `RND[(X)]` Returns a random number from 0 up to X.
    X defaults to 1. Also see `RANDOMIZE`.
    */
}

pub mod SGN {
    /*!
    ## `SGN(X)` Returns -1, 0 or 1 for the sign of X.
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X in radians.
    */
}

pub mod SPC {
    /*!
    ## `SPC$(N)` Returns N spaces.
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X.
    X must not be negative.
    */
}

pub mod STR {
    /*!
    ## `STR$(X)` Returns X as a string.
    */
}

pub mod TAB {
    /*!
    ## `TAB$(N)` Returns the spaces needed to reach output column N.
    ```text
    PRINT "AB"; TAB$(5); "C"
    AB   C
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X in radians.
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the number written in X$.
    ```text
    PRINT VAL(" 12.5 ")
     12.5
    ```
    */
}
