pub struct Error {
    code: ErrorCode,
    line: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn in_line(self, line: usize) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Syntax = 1,
    UnbalancedParentheses = 2,
    NoExpressionPresent = 3,
    DivisionByZero = 4,
    EqualSignExpected = 5,
    NotAVariable = 6,
    DuplicateLabel = 7,
    UndefinedLabel = 8,
    ThenExpected = 9,
    ToExpected = 10,
    NextWithoutFor = 11,
    ReturnWithoutGosub = 12,
    MissingClosingQuote = 13,
    SourceNotFound = 14,
    SourceReadError = 15,
    InputReadError = 16,
    OutOfMemory = 17,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            Syntax => "SYNTAX ERROR",
            UnbalancedParentheses => "UNBALANCED PARENTHESES",
            NoExpressionPresent => "NO EXPRESSION PRESENT",
            DivisionByZero => "DIVISION BY ZERO",
            EqualSignExpected => "EQUAL SIGN EXPECTED",
            NotAVariable => "NOT A VARIABLE",
            DuplicateLabel => "DUPLICATE LABEL",
            UndefinedLabel => "UNDEFINED LABEL",
            ThenExpected => "THEN EXPECTED",
            ToExpected => "TO EXPECTED",
            NextWithoutFor => "NEXT WITHOUT FOR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            MissingClosingQuote => "MISSING CLOSING QUOTE",
            SourceNotFound => "FILE NOT FOUND",
            SourceReadError => "FILE I/O ERROR",
            InputReadError => "INPUT I/O ERROR",
            OutOfMemory => "OUT OF MEMORY",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" IN LINE {}", line));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}
