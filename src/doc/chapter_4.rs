/*!
# Commands

Commands act on the whole program and cannot be used in a line.
`Ready.` is printed after each one.
*/

pub mod NEW {
    /*!
    ## `NEW` Erases the program and all variables.
    */
}

pub mod RUN {
    /*!
    ## `RUN` Runs the program from its first line.
    Variables, open loops, subroutines and `READ` position are reset.
    */
}

pub mod LIST {
    /*!
    ## `LIST [start[, end]]` Prints program lines.
    */
}

pub mod DEL {
    /*!
    ## `DEL start[, end]` Deletes program lines.
    Typing a line number alone deletes a single line.
    */
}

pub mod SAVE {
    /*!
    ## `SAVE "file"` Writes the program listing to a file.
    */
}

pub mod LOAD {
    /*!
    ## `LOAD "file"` Replaces the program with one read from a file.
    Loading stops at the first line with a syntax error and the
    current program is kept.
    */
}

pub mod DUMP {
    /*!
    ## `DUMP ["file"]` Prints every variable and its value.
    ```text
    A$ = "TEXT"
    B(3) = 1, 0, 0
    X = 5
    ```
    */
}

pub mod CAT {
    /*!
    ## `CAT` Lists the `.bas` files in the current directory.
    */
}

pub mod CONT {
    /*!
    ## `CONT` Continues after `STOP` or CTRL-C.
    */
}

pub mod RESUME {
    /*!
    ## `RESUME` Continues after `STOP`.
    */
}

pub mod BYE {
    /*!
    ## `BYE` Leaves BASIC.
    */
}
