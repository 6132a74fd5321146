use crate::error;
use crate::lang::{number_to_string, Error, Literal};

/// Longest string a program may build.
pub const MAX_STRING_LEN: usize = 32767;

pub(super) fn string_too_long() -> Error {
    error!(StringTooLong; format!("Strings are limited to {} characters.", MAX_STRING_LEN))
}

/// A scalar value or array element.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
}

impl Val {
    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }

    /// Strings come back quoted, the way DUMP and TRON show them.
    pub fn quoted(&self) -> String {
        match self {
            Val::Number(n) => number_to_string(*n),
            Val::String(s) => format!("\"{}\"", s),
        }
    }
}

impl From<Literal> for Val {
    fn from(literal: Literal) -> Val {
        match literal {
            Literal::Number(n) => Val::Number(n),
            Literal::String(s) => Val::String(s),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", number_to_string(*n)),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
