use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Values typed in response to INPUT
///
/// Values are separated by commas. Strings may be quoted, in which
/// case a doubled quote is a literal quote.

#[derive(Debug)]
pub struct InputBuffer {
    chars: Vec<char>,
    pos: usize,
}

impl InputBuffer {
    pub fn new(s: &str) -> InputBuffer {
        InputBuffer {
            chars: s.trim_end_matches(|c: char| c == '\n' || c == '\r').chars().collect(),
            pos: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.get(self.pos) {
            if !c.is_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    pub fn is_empty(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.chars.len()
    }

    /// Consumes the comma between two values.
    pub fn separator(&mut self) -> Result<()> {
        self.skip_whitespace();
        match self.chars.get(self.pos) {
            Some(',') => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(error!(BadInput; "Comma expected.")),
        }
    }

    pub fn value(&mut self, string: bool) -> Result<Val> {
        if string {
            Ok(Val::String(self.string()))
        } else {
            Ok(Val::Number(self.number()?))
        }
    }

    fn number(&mut self) -> Result<f64> {
        self.skip_whitespace();
        match self.chars.get(self.pos) {
            Some(c) if c.is_ascii_digit() || "+-.".contains(*c) => {}
            _ => return Err(error!(BadInput; "Number expected.")),
        }
        let start = self.pos;
        while let Some(c) = self.chars.get(self.pos) {
            if *c == ',' {
                break;
            }
            self.pos += 1;
        }
        let s: String = self.chars[start..self.pos].iter().collect();
        match s.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(error!(BadInput; "Number expected.")),
        }
    }

    fn string(&mut self) -> String {
        self.skip_whitespace();
        let mut s = String::new();
        if self.chars.get(self.pos) == Some(&'"') {
            self.pos += 1;
            while let Some(c) = self.chars.get(self.pos) {
                self.pos += 1;
                if *c == '"' {
                    if self.chars.get(self.pos) == Some(&'"') {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                s.push(*c);
            }
            return s;
        }
        while let Some(c) = self.chars.get(self.pos) {
            if *c == ',' {
                break;
            }
            s.push(*c);
            self.pos += 1;
        }
        s.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_strings() {
        let mut buf = InputBuffer::new(" 12, -3.5e1 ,  hello world  ,\"a, \"\"b\"\"\"\n");
        assert_eq!(buf.value(false).unwrap(), Val::Number(12.0));
        buf.separator().unwrap();
        assert_eq!(buf.value(false).unwrap(), Val::Number(-35.0));
        buf.separator().unwrap();
        assert_eq!(
            buf.value(true).unwrap(),
            Val::String("hello world".to_string())
        );
        buf.separator().unwrap();
        assert_eq!(
            buf.value(true).unwrap(),
            Val::String("a, \"b\"".to_string())
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn test_bad_input() {
        let mut buf = InputBuffer::new("abc");
        let e = buf.value(false).unwrap_err();
        assert_eq!(e.to_string(), "BAD INPUT; Number expected.");
        let mut buf = InputBuffer::new("1 2");
        assert_eq!(buf.value(false).unwrap_err().to_string(), "BAD INPUT; Number expected.");
        let mut buf = InputBuffer::new("\"x\" y");
        buf.value(true).unwrap();
        assert_eq!(buf.separator().unwrap_err().to_string(), "BAD INPUT; Comma expected.");
    }
}
