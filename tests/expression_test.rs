mod common;
use common::*;

#[test]
fn test_print_numbers() {
    assert_eq!(exec("PRINT 1; -2; 0.5"), " 1 -2  0.5 \n");
    assert_eq!(exec("PRINT -0"), " 0 \n");
}

#[test]
fn test_print_separators() {
    assert_eq!(exec("PRINT \"A\"; 1, \"B\""), "A 1 \tB\n");
    assert_eq!(exec("PRINT \"A\";\nPRINT \"B\""), "AB\n");
    assert_eq!(exec("PRINT \"A\",\nPRINT \"B\""), "A\tB\n");
    assert_eq!(exec("PRINT"), "\n");
}

#[test]
fn test_print_booleans() {
    assert_eq!(exec("PRINT 1 < 2; 2 < 1"), "TRUEFALSE\n");
    assert_eq!(exec("PRINT 1 < 2 .AND. 3 > 2"), "TRUE\n");
    assert_eq!(exec("PRINT .NOT. (1 = 2)"), "TRUE\n");
}

#[test]
fn test_precedence() {
    assert_eq!(exec("PRINT 2 + 3 * 4"), " 14 \n");
    assert_eq!(exec("PRINT 2 ** 3 ** 2"), " 512 \n");
    assert_eq!(exec("PRINT 10 - 4 - 3"), " 3 \n");
    assert_eq!(exec("PRINT (2 + 3) * 4"), " 20 \n");
    assert_eq!(exec("PRINT -2 ** 2"), " 4 \n");
}

#[test]
fn test_string_expressions() {
    assert_eq!(exec("A$ = \"AB\" : PRINT A$ + \"CD\""), "ABCD\n");
    assert_eq!(exec("PRINT \"ABC\" < \"ABD\""), "TRUE\n");
    assert_eq!(exec("PRINT \"b\" = \"B\""), "FALSE\n");
}

#[test]
fn test_functions_in_program() {
    let s = exec(
        "10 A$ = \"HELLO WORLD\"\n\
         20 PRINT LEFT$(A$, 5); MID$(A$, 7, 3); RIGHT$(A$, 2)\n\
         30 PRINT LEN(A$); INT(-2.5); STR$(3.25)\n\
         40 PRINT CHR$(65); \"AB\"; TAB$(6); \"C\"; SPC$(2); \"D\"\nRUN",
    );
    assert_eq!(s, "HELLOWORLD\n 11 -3 3.25\nAAB   C  D\nReady.\n");
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(
        exec("LET X = 1 / 0"),
        "DIVIDE BY ZERO; divide by zero\nLET X = 1 / 0\n"
    );
    assert_eq!(
        exec("10 PRINT 5 / (2 - 2)\nRUN"),
        "DIVIDE BY ZERO IN 10; divide by zero\nPRINT 5 / (2 - 2)\nReady.\n"
    );
}

#[test]
fn test_illegal_function_call() {
    assert_eq!(
        exec("PRINT SQR(-1)"),
        "ILLEGAL FUNCTION CALL; SQR of a negative number.\nPRINT SQR(-1)\n"
    );
}

#[test]
fn test_boolean_assignment_is_syntax_error() {
    let s = exec("10 LET X = (1 < 2)\nLIST");
    assert!(s.starts_with("SYNTAX ERROR IN 10"), "{}", s);
    assert!(s.contains("Boolean expression not allowed in LET."), "{}", s);
    assert!(s.ends_with("^\nReady.\n"), "{}", s);
}

#[test]
fn test_mixed_types_are_syntax_errors() {
    assert!(exec("PRINT \"A\" + 1").starts_with("SYNTAX ERROR"));
    assert!(exec("A$ = 1").starts_with("SYNTAX ERROR"));
    assert!(exec("X = \"A\"").starts_with("SYNTAX ERROR"));
}

#[test]
fn test_numbers_out_of_range() {
    let s = exec("10 X = 1E400\nLIST");
    assert!(s.starts_with("SYNTAX ERROR IN 10"), "{}", s);
    assert!(s.contains("Illegal numeric constant."), "{}", s);
    assert!(s.ends_with("^\nReady.\n"), "{}", s);
    assert!(exec("DIM A(3) : PRINT A(SIN(1E400))").starts_with("SYNTAX ERROR"));
    assert!(exec("PRINT 1E308 * 10").starts_with("OVERFLOW\n"));
}

#[test]
fn test_string_length_limit() {
    let s = exec("10 A$ = \"X\"\n20 A$ = A$ + A$\n30 GOTO 20\nRUN");
    assert_eq!(
        s,
        "STRING TOO LONG IN 20; Strings are limited to 32767 characters.\n\
         LET A$ = A$ + A$\nReady.\n"
    );
    let s = exec("PRINT LEN(SPC$(1E18))");
    assert!(
        s.starts_with("STRING TOO LONG; Strings are limited to 32767 characters.\n"),
        "{}",
        s
    );
}
