/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of line-numbered BASIC.
Nothing in here touches the state of a running program.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod parse;
mod token;

pub mod ast;

pub use ast::Statement;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use lex::{show_error, Lexer};
pub use line::Line;
pub use parse::{parse, parse_expression};
pub use token::{Command, Function, Literal, Operator, Token, Word};

/// `None` is a direct (immediate mode) line.
pub type LineNumber = Option<u32>;
pub type Column = std::ops::Range<usize>;

pub const MAX_LINE_LEN: usize = 1024;

/// Numbers print without a fractional part when they are integral.
pub fn number_to_string(n: f64) -> String {
    if n == 0.0 {
        // Folds -0 into 0
        return "0".to_string();
    }
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(3.0), "3");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(0.25), "0.25");
        assert_eq!(number_to_string(-12.5), "-12.5");
    }
}
