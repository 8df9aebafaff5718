#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Delimiter(Delimiter),
    Variable(String),
    Number(String),
    Keyword(Keyword),
    QuotedString(String),
    EndOfLine,
    EndOfProgram,
}

impl Token {
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfLine | Token::EndOfProgram)
    }

    pub fn is_delimiter(&self, delimiter: Delimiter) -> bool {
        matches!(self, Token::Delimiter(d) if *d == delimiter)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Delimiter(s) => write!(f, "{}", s),
            Variable(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            Keyword(s) => write!(f, "{}", s),
            QuotedString(s) => write!(f, "\"{}\"", s),
            EndOfLine => writeln!(f),
            EndOfProgram => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Print,
    Input,
    If,
    Then,
    For,
    Next,
    To,
    Goto,
    Gosub,
    Return,
    End,
    Repeat,
    Until,
}

impl Keyword {
    /// Case-insensitive keyword lookup.
    pub fn from_string(s: &str) -> Option<Keyword> {
        use Keyword::*;
        let keyword = match s.to_ascii_uppercase().as_str() {
            "PRINT" => Print,
            "INPUT" => Input,
            "IF" => If,
            "THEN" => Then,
            "FOR" => For,
            "NEXT" => Next,
            "TO" => To,
            "GOTO" => Goto,
            "GOSUB" => Gosub,
            "RETURN" => Return,
            "END" => End,
            "REPEAT" => Repeat,
            "UNTIL" => Until,
            _ => return None,
        };
        Some(keyword)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Keyword::*;
        match self {
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            For => write!(f, "FOR"),
            Next => write!(f, "NEXT"),
            To => write!(f, "TO"),
            Goto => write!(f, "GOTO"),
            Gosub => write!(f, "GOSUB"),
            Return => write!(f, "RETURN"),
            End => write!(f, "END"),
            Repeat => write!(f, "REPEAT"),
            Until => write!(f, "UNTIL"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Plus,
    Minus,
    Divide,
    Multiply,
    Modulus,
    Caret,
    Equal,
    LParen,
    RParen,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    NotEqual,
}

impl Delimiter {
    pub fn from_char(ch: char) -> Option<Delimiter> {
        use Delimiter::*;
        let delimiter = match ch {
            ',' => Comma,
            ';' => Semicolon,
            '+' => Plus,
            '-' => Minus,
            '/' => Divide,
            '*' => Multiply,
            '%' => Modulus,
            '^' => Caret,
            '=' => Equal,
            '(' => LParen,
            ')' => RParen,
            '<' => Less,
            '>' => Greater,
            _ => return None,
        };
        Some(delimiter)
    }

    pub fn is_relational(&self) -> bool {
        use Delimiter::*;
        matches!(
            self,
            Equal | Less | LessEqual | Greater | GreaterEqual | NotEqual
        )
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Delimiter::*;
        match self {
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Divide => write!(f, "/"),
            Multiply => write!(f, "*"),
            Modulus => write!(f, "%"),
            Caret => write!(f, "^"),
            Equal => write!(f, "="),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            NotEqual => write!(f, "<>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(Keyword::from_string("gosub"), Some(Keyword::Gosub));
        assert_eq!(Keyword::from_string("Repeat"), Some(Keyword::Repeat));
        assert_eq!(Keyword::from_string("PICKLES"), None);
    }

    #[test]
    fn test_relational() {
        assert!(Delimiter::NotEqual.is_relational());
        assert!(!Delimiter::Caret.is_relational());
    }
}
