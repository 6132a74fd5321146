use super::{token::*, Column};

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ## Cursor over one line of source
///
/// Tokens are produced on demand. `unget_token` rewinds exactly one token
/// and `mark`/`reset_to_mark` return to a saved position.

#[derive(Debug, Clone)]
pub struct Lexer {
    buffer: Vec<char>,
    current: usize,
    previous: usize,
    mark: usize,
}

impl Lexer {
    pub fn new(s: &str) -> Lexer {
        Lexer {
            buffer: s.trim_end_matches(|c: char| c == '\n' || c == '\r').chars().collect(),
            current: 0,
            previous: 0,
            mark: 0,
        }
    }

    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.peek() {
            if !is_basic_whitespace(c) {
                break;
            }
            self.current += 1;
        }
        self.previous = self.current;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Token::EndOfLine,
        };
        if ch == '.' {
            if let Some(token) = self.dotted() {
                return token;
            }
        }
        if is_basic_digit(ch) || (ch == '.' && self.peek_at(1).map_or(false, is_basic_digit)) {
            return self.number();
        }
        if ch == '"' {
            return self.string();
        }
        if is_basic_alphabetic(ch) {
            return self.alphabetic();
        }
        self.minutia(ch)
    }

    pub fn unget_token(&mut self) {
        self.current = self.previous;
    }

    pub fn mark(&mut self) {
        self.mark = self.current;
    }

    pub fn reset_to_mark(&mut self) {
        self.current = self.mark;
        self.previous = self.mark;
    }

    /// Span of the most recently returned token.
    pub fn column(&self) -> Column {
        self.previous..self.current
    }

    /// Takes the raw remainder of the line. Used by REM.
    pub fn rest(&mut self) -> String {
        self.previous = self.current;
        let s: String = self.buffer[self.current..].iter().collect();
        self.current = self.buffer.len();
        s
    }

    pub fn source(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn show_error(&self) -> String {
        show_error(&self.source(), &self.column())
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.buffer.get(self.current + offset).copied()
    }

    fn dotted(&mut self) -> Option<Token> {
        for len in &[4, 5] {
            let end = self.current + len;
            if end > self.buffer.len() {
                continue;
            }
            let s: String = self.buffer[self.current..end].iter().collect();
            if let Some(op) = Operator::from_dotted(&s) {
                self.current = end;
                return Some(Token::Operator(op));
            }
        }
        None
    }

    fn number(&mut self) -> Token {
        let start = self.current;
        while self.peek().map_or(false, is_basic_digit) {
            self.current += 1;
        }
        if self.peek() == Some('.') {
            self.current += 1;
            while self.peek().map_or(false, is_basic_digit) {
                self.current += 1;
            }
        }
        if let Some('e') | Some('E') = self.peek() {
            let digit_at = match self.peek_at(1) {
                Some('+') | Some('-') => 2,
                _ => 1,
            };
            if self.peek_at(digit_at).map_or(false, is_basic_digit) {
                self.current += digit_at;
                while self.peek().map_or(false, is_basic_digit) {
                    self.current += 1;
                }
            }
        }
        let s: String = self.buffer[start..self.current].iter().collect();
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Token::Literal(Literal::Number(n)),
            _ => Token::Error("Illegal numeric constant.".to_string()),
        }
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.current += 1;
        loop {
            match self.peek() {
                None => return Token::Error("Missing end quote.".to_string()),
                Some('"') => {
                    self.current += 1;
                    if self.peek() == Some('"') {
                        self.current += 1;
                        s.push('"');
                        continue;
                    }
                    return Token::Literal(Literal::String(s));
                }
                Some(ch) => {
                    self.current += 1;
                    s.push(ch);
                }
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(ch) = self.peek() {
            if !is_basic_alphabetic(ch) && !is_basic_digit(ch) {
                break;
            }
            s.push(ch.to_ascii_uppercase());
            self.current += 1;
        }
        if self.peek() == Some('$') {
            s.push('$');
            self.current += 1;
        }
        if let Some(token) = Token::from_string(&s) {
            return token;
        }
        if self.peek() == Some('(') {
            Token::Array(Ident::new(&s))
        } else {
            Token::Ident(Ident::new(&s))
        }
    }

    fn minutia(&mut self, ch: char) -> Token {
        self.current += 1;
        let next = self.peek();
        let op = match ch {
            '(' | ')' | ':' | ';' | ',' | '?' | '\'' | '.' => return Token::Symbol(ch),
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '*' if next == Some('*') => {
                self.current += 1;
                Operator::Power
            }
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            '^' => Operator::Xor,
            '&' => Operator::And,
            '|' => Operator::Or,
            '!' => Operator::Not,
            '=' => Operator::Equal,
            '<' => match next {
                Some('=') => {
                    self.current += 1;
                    Operator::LessEqual
                }
                Some('>') => {
                    self.current += 1;
                    Operator::NotEqual
                }
                _ => Operator::Less,
            },
            '>' => match next {
                Some('=') => {
                    self.current += 1;
                    Operator::GreaterEqual
                }
                Some('<') => {
                    self.current += 1;
                    Operator::NotEqual
                }
                _ => Operator::Greater,
            },
            _ => return Token::Error("Unrecognized input.".to_string()),
        };
        Token::Operator(op)
    }
}

/// The source line with a caret under the start of `column`.
pub fn show_error(source: &str, column: &Column) -> String {
    format!("{}\n{}^", source, "-".repeat(column.start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(s: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(s);
        let mut v = vec![];
        loop {
            let t = lexer.next_token();
            if t == Token::EndOfLine {
                return v;
            }
            v.push(t);
        }
    }

    #[test]
    fn test_eol_is_idempotent() {
        let mut lexer = Lexer::new("x\r\n");
        assert_eq!(lexer.next_token(), Token::Ident(Ident::new("X")));
        assert_eq!(lexer.next_token(), Token::EndOfLine);
        lexer.unget_token();
        assert_eq!(lexer.next_token(), Token::EndOfLine);
        assert_eq!(lexer.next_token(), Token::EndOfLine);
    }

    #[test]
    fn test_unget_and_mark() {
        let mut lexer = Lexer::new("a + b");
        lexer.next_token();
        lexer.mark();
        assert_eq!(lexer.next_token(), Token::Operator(Operator::Plus));
        lexer.unget_token();
        assert_eq!(lexer.next_token(), Token::Operator(Operator::Plus));
        lexer.next_token();
        lexer.reset_to_mark();
        assert_eq!(lexer.next_token(), Token::Operator(Operator::Plus));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            lex("123.45e-6 .5 7E"),
            vec![
                Token::Literal(Literal::Number(123.45e-6)),
                Token::Literal(Literal::Number(0.5)),
                Token::Literal(Literal::Number(7.0)),
                Token::Ident(Ident::new("E")),
            ]
        );
        assert_eq!(
            lex("-1"),
            vec![
                Token::Operator(Operator::Minus),
                Token::Literal(Literal::Number(1.0))
            ]
        );
    }

    #[test]
    fn test_number_out_of_range() {
        assert_eq!(
            lex("1E400"),
            vec![Token::Error("Illegal numeric constant.".to_string())]
        );
        assert_eq!(
            lex("1E308"),
            vec![Token::Literal(Literal::Number(1e308))]
        );
    }

    #[test]
    fn test_operators() {
        use Operator::*;
        let ops: Vec<Token> = vec![
            LessEqual, GreaterEqual, NotEqual, NotEqual, Power, Multiply, Xor, BoolAnd, BoolNot,
            BoolOr,
        ]
        .into_iter()
        .map(Token::Operator)
        .collect();
        assert_eq!(lex("<= >= <> >< ** * ^ .and. .NOT. .Or."), ops);
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            lex(r#""say ""hi""""#),
            vec![Token::Literal(Literal::String("say \"hi\"".to_string()))]
        );
        assert_eq!(
            lex(r#""open"#),
            vec![Token::Error("Missing end quote.".to_string())]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            lex("print a$ b(1) left$(x"),
            vec![
                Token::Word(Word::Print),
                Token::Ident(Ident::new("A$")),
                Token::Array(Ident::new("B")),
                Token::Symbol('('),
                Token::Literal(Literal::Number(1.0)),
                Token::Symbol(')'),
                Token::Function(Function::Left),
                Token::Symbol('('),
                Token::Ident(Ident::new("X")),
            ]
        );
        assert_eq!(lex("b (1)")[0], Token::Ident(Ident::new("B")));
        assert_eq!(lex("list")[0], Token::Command(Command::List));
    }

    #[test]
    fn test_unrecognized() {
        let mut lexer = Lexer::new("x = #");
        lexer.next_token();
        lexer.next_token();
        assert_eq!(
            lexer.next_token(),
            Token::Error("Unrecognized input.".to_string())
        );
        assert_eq!(lexer.show_error(), "x = #\n----^");
    }
}
