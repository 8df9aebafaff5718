use super::{token::*, Error};

type Result<T> = std::result::Result<T, Error>;

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_line_end(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_basic_delimiter(c: char) -> bool {
    is_basic_whitespace(c) || is_basic_line_end(c) || Delimiter::from_char(c).is_some()
}

/// ## On-demand tokenizer over a fixed program buffer
///
/// The lexer owns the program counter. Each call to `next_token`
/// remembers how many characters it consumed so that exactly one
/// `push_back` can rewind over it.

#[derive(Debug)]
pub struct Lexer {
    prog: Vec<char>,
    pc: usize,
    last: usize,
}

impl Lexer {
    pub fn new(s: &str) -> Lexer {
        Lexer {
            prog: s.chars().collect(),
            pc: 0,
            last: 0,
        }
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Offset of the first character of the most recent token.
    pub fn token_start(&self) -> usize {
        self.pc - self.last
    }

    pub fn jump(&mut self, pc: usize) {
        debug_assert!(pc <= self.prog.len());
        self.pc = pc;
        self.last = 0;
    }

    /// Source line (counted from 1) holding the given offset.
    pub fn line_of(&self, pc: usize) -> usize {
        let end = pc.min(self.prog.len());
        let breaks = self.prog[..end]
            .iter()
            .enumerate()
            .filter(|(index, ch)| match ch {
                '\n' => true,
                '\r' => self.prog.get(index + 1) != Some(&'\n'),
                _ => false,
            })
            .count();
        breaks + 1
    }

    pub fn push_back(&mut self) {
        self.pc -= self.last;
        self.last = 0;
    }

    /// Moves the program counter to the start of the next line.
    pub fn skip_line(&mut self) {
        while let Some(&ch) = self.prog.get(self.pc) {
            self.pc += 1;
            if ch == '\r' && self.prog.get(self.pc) == Some(&'\n') {
                self.pc += 1;
            }
            if is_basic_line_end(ch) {
                break;
            }
        }
        self.last = 0;
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.last = 0;
        while let Some(&ch) = self.prog.get(self.pc) {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.pc += 1;
        }
        let start = self.pc;
        let ch = match self.prog.get(self.pc) {
            Some(&ch) => ch,
            None => return Ok(Token::EndOfProgram),
        };
        let token = if is_basic_line_end(ch) {
            self.line_end(ch)
        } else if ch == '<' || ch == '>' {
            self.relational(ch)
        } else if let Some(delimiter) = Delimiter::from_char(ch) {
            self.pc += 1;
            Token::Delimiter(delimiter)
        } else if ch.is_ascii_alphabetic() {
            self.word()
        } else if ch.is_ascii_digit() {
            Token::Number(self.until_delimiter())
        } else if ch == '"' {
            self.string()?
        } else {
            return Ok(Token::EndOfProgram);
        };
        self.last = self.pc - start;
        Ok(token)
    }

    fn peek_next(&self) -> Option<char> {
        self.prog.get(self.pc + 1).copied()
    }

    fn line_end(&mut self, ch: char) -> Token {
        self.pc += 1;
        if ch == '\r' && self.prog.get(self.pc) == Some(&'\n') {
            self.pc += 1;
        }
        Token::EndOfLine
    }

    fn relational(&mut self, ch: char) -> Token {
        let delimiter = match (ch, self.peek_next()) {
            ('<', Some('>')) => Delimiter::NotEqual,
            ('<', Some('=')) => Delimiter::LessEqual,
            ('>', Some('=')) => Delimiter::GreaterEqual,
            ('<', _) => Delimiter::Less,
            _ => Delimiter::Greater,
        };
        self.pc += match delimiter {
            Delimiter::Less | Delimiter::Greater => 1,
            _ => 2,
        };
        Token::Delimiter(delimiter)
    }

    fn until_delimiter(&mut self) -> String {
        let mut s = String::new();
        while let Some(&ch) = self.prog.get(self.pc) {
            if is_basic_delimiter(ch) {
                break;
            }
            s.push(ch);
            self.pc += 1;
        }
        s
    }

    fn word(&mut self) -> Token {
        let s = self.until_delimiter();
        match Keyword::from_string(&s) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Variable(s),
        }
    }

    fn string(&mut self) -> Result<Token> {
        let mut s = String::new();
        let mut pc = self.pc + 1;
        loop {
            match self.prog.get(pc) {
                Some(&'"') => break,
                Some(&ch) if !is_basic_line_end(ch) => s.push(ch),
                _ => return Err(error!(MissingClosingQuote)),
            }
            pc += 1;
        }
        self.pc = pc + 1;
        Ok(Token::QuotedString(s))
    }
}
