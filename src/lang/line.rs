use super::ast::Statement;
use super::lex::Lexer;
use super::parse::{line_number_from, parse};
use super::token::{Literal, Token};
use super::{Error, LineNumber, MAX_LINE_LEN};

/// ## A parsed source line
///
/// The statements of a line are kept flat, colon chains and the
/// then-clause of an IF alike.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    statements: Vec<Statement>,
}

impl Line {
    pub fn new(number: LineNumber, statements: Vec<Statement>) -> Line {
        Line { number, statements }
    }

    /// A leading number makes a program line, otherwise it is direct.
    /// A number with nothing after it parses to an empty line.
    pub fn parse(s: &str) -> Result<Line, Error> {
        if s.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let mut lexer = Lexer::new(s);
        let mut number = None;
        match lexer.next_token() {
            Token::Literal(Literal::Number(n)) => match line_number_from(n) {
                Some(n) => number = Some(n),
                None => {
                    return Err(error!(SyntaxError, ..&lexer.column(); "Invalid line number."))
                }
            },
            Token::EndOfLine => return Ok(Line::new(None, vec![])),
            _ => lexer.unget_token(),
        }
        if number.is_some() && lexer.next_token() == Token::EndOfLine {
            return Ok(Line::new(number, vec![]));
        }
        lexer.unget_token();
        match parse(&mut lexer) {
            Ok(statements) => Ok(Line::new(number, statements)),
            Err(e) => Err(e.in_line_number(number)),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(number) = self.number {
            write!(f, "{} ", number)?;
        }
        let mut separator = "";
        for statement in &self.statements {
            write!(f, "{}{}", separator, statement)?;
            separator = match statement {
                Statement::If(_, None) => " ",
                _ => " : ",
            };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let source = [
            r#"10 DATA 1, -2.5, "a""b""#,
            "20 DIM A(3), B$(2, 2)",
            "30 FOR I = 1 TO 10 STEP -(2 + 1)",
            r#"40 IF A$ = "x" .OR. .NOT. (B < C) THEN PRINT "yes"; : GOTO 10"#,
            r#"50 INPUT "Name"; N$, A(2)"#,
            "60 LET X = -Y ** 2 + (3 & 5) - !Z",
            "70 NEXT I : NEXT",
            "80 ON X GOSUB 100, 200 : ON Y GOTO 300",
            "90 PRINT TAB$(5); MID$(S$, 2, 3), RND; LEN(A$ + B$)",
            "100 RANDOMIZE TIMER : RANDOMIZE : RANDOMIZE 42",
            "110 READ X, Y$ : RESTORE : RETURN : STOP : END",
            r#"120 TRON "trace.txt" : TROFF : TRON"#,
            "130 IF X >= 1 THEN 10",
            "140 GOSUB 10 : REM all done here",
        ];
        for s in source.iter() {
            let line = Line::parse(s).unwrap();
            assert_eq!(line.to_string(), *s);
            assert_eq!(Line::parse(&line.to_string()).unwrap(), line);
        }
    }

    #[test]
    fn test_number_only() {
        let line = Line::parse("100").unwrap();
        assert_eq!(line.number(), Some(100));
        assert!(line.is_empty());
        assert!(Line::parse("  ").unwrap().is_empty());
    }

    #[test]
    fn test_error_has_line_and_column() {
        let e = Line::parse("10 PRINT (1").unwrap_err();
        assert_eq!(e.line_number(), Some(10));
        assert!(e.is_syntax());
    }
}
