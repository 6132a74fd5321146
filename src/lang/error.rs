use super::{Column, LineNumber};

/// Syntax and runtime errors share this type. The code decides which kind it is.
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
    statement: Option<String>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
            statement: None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn message_str(&self) -> &str {
        &self.message
    }

    /// Unparsed text of the statement that was executing.
    pub fn statement(&self) -> Option<&str> {
        self.statement.as_deref()
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn is_syntax(&self) -> bool {
        self.code.is_syntax()
    }

    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = line;
        }
        self
    }

    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn in_statement(mut self, text: String) -> Error {
        if self.statement.is_none() {
            self.statement = Some(text);
        }
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        self.message = message.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    IndexOutOfRange = 9,
    DivideByZero = 11,
    StringTooLong = 15,
    TypeMismatch = 13,
    ExpressionTooComplex = 16,
    CantContinue = 17,
    LineBufferOverflow = 23,
    UndefinedVariable = 24,
    ArrayNotDeclared = 25,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
    BadInput = 62,
}

impl ErrorCode {
    pub fn is_syntax(self) -> bool {
        use ErrorCode::*;
        matches!(self, SyntaxError | ExpressionTooComplex | LineBufferOverflow)
    }

    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "OUT OF DATA",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLine => "UNDEFINED LINE",
            IndexOutOfRange => "INDEX OUT OF RANGE",
            DivideByZero => "DIVIDE BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            StringTooLong => "STRING TOO LONG",
            ExpressionTooComplex => "EXPRESSION TOO COMPLEX",
            CantContinue => "CAN'T CONTINUE",
            LineBufferOverflow => "LINE BUFFER OVERFLOW",
            UndefinedVariable => "UNDEFINED VARIABLE",
            ArrayNotDeclared => "ARRAY MUST BE DECLARED",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
            BadInput => "BAD INPUT",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        match error.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; error.to_string()),
            _ => error!(DiskIoError; error.to_string()),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = self.code.as_str();
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else if self.line_number.is_some() {
            write!(f, "{} IN{}", code_str, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error;

    #[test]
    fn test_display() {
        let e = error!(DivideByZero, Some(20); "divide by zero");
        assert_eq!(e.to_string(), "DIVIDE BY ZERO IN 20; divide by zero");
        let e = error!(SyntaxError, ..&(3..5); "Missing TO");
        assert_eq!(e.to_string(), "SYNTAX ERROR (3..5); Missing TO");
        assert!(e.is_syntax());
        assert!(!error!(OutOfData).is_syntax());
    }

    #[test]
    fn test_first_context_wins() {
        let e = error!(UndefinedLine)
            .in_line_number(Some(10))
            .in_line_number(Some(20));
        assert_eq!(e.line_number(), Some(10));
    }
}
