mod common;
use basic::term::Shell;
use common::*;

#[test]
fn test_for_loop_counts_up() {
    let s = exec("10 FOR I = 1 TO 3\n20 PRINT I\n30 NEXT I\nRUN");
    assert_eq!(s, " 1 \n 2 \n 3 \nReady.\n");
}

#[test]
fn test_for_loop_counts_down() {
    let s = exec("10 FOR I = 3 TO 1 STEP -1\n20 PRINT I;\n30 NEXT\n40 PRINT\nRUN");
    assert_eq!(s, " 3  2  1 \nReady.\n");
}

#[test]
fn test_for_loop_always_runs_once() {
    assert_eq!(exec("FOR I = 3 TO 0 : PRINT I : NEXT I"), " 3 \n");
}

#[test]
fn test_for_loop_step_of_zero() {
    let s = exec("10 FOR I = 1 TO 3 STEP 0\n20 PRINT I\n30 NEXT I\nRUN");
    assert_eq!(
        s,
        " 1 \nILLEGAL FUNCTION CALL IN 30; step value of 0 in FOR loop.\nNEXT I\nReady.\n"
    );
}

#[test]
fn test_for_loop_limits_follow_variables() {
    let s = exec("10 N = 3\n20 FOR I = 1 TO N\n30 N = 1\n40 PRINT I;\n50 NEXT I\n60 PRINT\nRUN");
    assert_eq!(s, " 1 \nReady.\n");
    let s = exec("S = 1 : FOR I = 1 TO 10 STEP S : PRINT I; : S = S * 2 : NEXT : PRINT");
    assert_eq!(s, " 1  3  7 \n");
}

#[test]
fn test_next_without_variable_continues_innermost() {
    let s = exec(
        "10 FOR I = 1 TO 2\n20 FOR J = 1 TO 2\n30 PRINT I * 10 + J;\n\
         40 NEXT\n50 NEXT\n60 PRINT\nRUN",
    );
    assert_eq!(s, " 11  12  21  22 \nReady.\n");
}

#[test]
fn test_next_with_variable_discards_inner_loops() {
    let s = exec("10 FOR I = 1 TO 2\n20 FOR J = 1 TO 5\n30 PRINT I; J;\n40 NEXT I\n50 PRINT\nRUN");
    assert_eq!(s, " 1  1  2  1 \nReady.\n");
}

#[test]
fn test_next_without_for() {
    assert_eq!(exec("NEXT"), "NEXT WITHOUT FOR; NEXT without FOR\nNEXT\n");
    assert_eq!(
        exec("10 GOSUB 20\n20 NEXT\nRUN"),
        "NEXT WITHOUT FOR IN 20; NEXT without FOR\nNEXT\nReady.\n"
    );
}

#[test]
fn test_nested_gosub() {
    let s = exec(
        "10 GOSUB 100\n20 PRINT \"END\"\n30 END\n\
         100 PRINT \"A\";\n110 GOSUB 200\n120 PRINT \"C\";\n130 RETURN\n\
         200 PRINT \"B\";\n210 RETURN\nRUN",
    );
    assert_eq!(s, "ABCEND\nReady.\n");
}

#[test]
fn test_return_without_gosub() {
    assert_eq!(
        exec("RETURN"),
        "RETURN WITHOUT GOSUB; RETURN without GOSUB\nRETURN\n"
    );
}

#[test]
fn test_return_discards_open_loops() {
    let s = exec(
        "10 GOSUB 100\n20 PRINT \"BACK\"\n30 END\n\
         100 FOR I = 1 TO 10\n110 RETURN\nRUN",
    );
    assert_eq!(s, "BACK\nReady.\n");
}

#[test]
fn test_goto_missing_line() {
    assert_eq!(
        exec("10 GOTO 50\nRUN"),
        "UNDEFINED LINE IN 10; GOTO non-existent line 50.\nGOTO 50\nReady.\n"
    );
}

#[test]
fn test_if_then_statements() {
    let s = exec(
        "10 X = 1\n\
         20 IF X = 1 THEN PRINT \"ONE\" : PRINT \"MORE\"\n\
         30 IF X = 2 THEN PRINT \"TWO\" : PRINT \"NOPE\"\n\
         40 PRINT \"DONE\"\nRUN",
    );
    assert_eq!(s, "ONE\nMORE\nDONE\nReady.\n");
}

#[test]
fn test_if_then_line() {
    let s = exec("10 IF 1 < 2 THEN 30\n20 PRINT \"SKIPPED\"\n30 PRINT \"HERE\"\nRUN");
    assert_eq!(s, "HERE\nReady.\n");
}

#[test]
fn test_on_goto_is_zero_based() {
    let mut shell = Shell::default();
    let program = "10 X = 1\n20 ON X GOTO 100, 200\n30 PRINT \"NONE\" : END\n\
                   100 PRINT \"FIRST\" : END\n200 PRINT \"SECOND\" : END\nRUN";
    assert_eq!(exec_shell(&mut shell, program, ""), "SECOND\nReady.\n");
    assert_eq!(
        exec_shell(&mut shell, "10 X = 0\nRUN", ""),
        "FIRST\nReady.\n"
    );
    assert_eq!(
        exec_shell(&mut shell, "10 X = 2\nRUN", ""),
        "NONE\nReady.\n"
    );
    assert_eq!(
        exec_shell(&mut shell, "10 X = -1\nRUN", ""),
        "NONE\nReady.\n"
    );
}

#[test]
fn test_on_gosub_returns() {
    let s = exec("10 ON 0 GOSUB 100\n20 PRINT \"BACK\"\n30 END\n100 PRINT \"SUB\"\n110 RETURN\nRUN");
    assert_eq!(s, "SUB\nBACK\nReady.\n");
}

#[test]
fn test_stop_and_cont() {
    let s = exec("10 PRINT 1\n20 STOP\n30 PRINT 2\nRUN\nCONT");
    assert_eq!(s, " 1 \nSTOP at line 20\nReady.\n 2 \nReady.\n");
}

#[test]
fn test_stop_and_resume() {
    let s = exec("10 STOP : PRINT \"AFTER\"\nRUN\nRESUME\nRESUME");
    assert_eq!(
        s,
        "STOP at line 10\nReady.\nAFTER\nReady.\n\
         CAN'T CONTINUE; This program was not previously stopped.\nReady.\n"
    );
}

#[test]
fn test_cont_keeps_variables() {
    let s = exec("10 X = 5\n20 STOP\n30 PRINT X\nRUN\nX = X + 1\nCONT");
    assert_eq!(s, "STOP at line 20\nReady.\n 6 \nReady.\n");
}

#[test]
fn test_data_read_restore() {
    let s = exec(
        "10 DATA 1, 2, \"a\"\n20 READ X, Y, Z$\n30 RESTORE\n40 READ X\n\
         50 PRINT X; Y; Z$\nRUN",
    );
    assert_eq!(s, " 1  2 a\nReady.\n");
}

#[test]
fn test_data_in_any_line_order() {
    let s = exec("10 READ A, B\n20 PRINT A; B\n30 DATA 5\n5 DATA -4\nRUN");
    assert_eq!(s, "-4  5 \nReady.\n");
}

#[test]
fn test_read_out_of_data() {
    let s = exec("10 DATA 1, 2, 3\n20 READ A, B, C, D\nRUN");
    assert_eq!(
        s,
        "OUT OF DATA IN 20; READ statement is out of data.\nREAD A, B, C, D\nReady.\n"
    );
}

#[test]
fn test_read_type_mismatch() {
    let s = exec("10 DATA \"x\"\n20 READ A\nRUN");
    assert_eq!(
        s,
        "TYPE MISMATCH IN 20; DATA item does not match the type of A.\nREAD A\nReady.\n"
    );
}

#[test]
fn test_direct_goto_enters_program() {
    assert_eq!(exec("10 PRINT \"IN\"\nGOTO 10"), "IN\n");
}

#[test]
fn test_run_clears_variables() {
    let s = exec("X = 5\n10 PRINT X\nRUN");
    assert_eq!(
        s,
        "UNDEFINED VARIABLE IN 10; Undefined variable 'X'\nPRINT X\nReady.\n"
    );
}

#[test]
fn test_uninitialized_string() {
    assert_eq!(
        exec("PRINT A$"),
        "UNDEFINED VARIABLE; Variable A$ has not been initialized.\nPRINT A$\n"
    );
}

#[test]
fn test_tron_troff() {
    let s = exec("10 TRON : X = 5 : PRINT X\n20 TROFF : PRINT X\nRUN");
    assert_eq!(
        s,
        "**:   10:LET X = 5\n        :X = Not yet defined.\n\
         **:   10:PRINT X\n        :X = 5\n 5 \n\
         **:   20:TROFF\n 5 \nReady.\n"
    );
}

#[test]
fn test_tron_shows_loop_variable() {
    let s = exec("10 TRON : FOR I = 1 TO 1 : NEXT I\nRUN");
    assert_eq!(
        s,
        "**:   10:FOR I = 1 TO 1\n        :I = Not yet defined.\n\
         **:   10:NEXT I\n        :I = 1\nReady.\n"
    );
}

#[test]
fn test_stack_overflow() {
    assert_eq!(
        exec("10 GOSUB 10\nRUN"),
        "OUT OF MEMORY IN 10; Stack overflow\nGOSUB 10\nReady.\n"
    );
}

#[test]
fn test_end_halts() {
    assert_eq!(exec("10 PRINT 1 : END : PRINT 2\nRUN"), " 1 \nReady.\n");
}

#[test]
fn test_rem() {
    assert_eq!(exec("10 REM PRINT 1 : PRINT 2\n20 ' note\nRUN"), "Ready.\n");
}

#[test]
fn test_randomize_is_repeatable() {
    let a = exec("RANDOMIZE 42 : PRINT RND(100); RND(100)");
    let b = exec("RANDOMIZE 42 : PRINT RND(100); RND(100)");
    let c = exec("RANDOMIZE 43 : PRINT RND(100); RND(100)");
    assert_eq!(a, b);
    assert_ne!(a, c);
}
