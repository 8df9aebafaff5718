use super::Address;
use crate::error;
use crate::lang::{token::Token, Error, Lexer};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Maps the text of each line label to the program counter just past it.
/// Labels compare as text, so `010` and `10` are different labels.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Labels {
    symbols: BTreeMap<String, Address>,
}

impl Labels {
    /// Scans every line of the program for a leading number.
    /// Leaves the program counter at zero.
    pub fn build(lex: &mut Lexer) -> Result<Labels> {
        let mut labels = Labels::default();
        lex.jump(0);
        loop {
            let token = match lex.next_token() {
                Ok(token) => token,
                Err(error) => return Err(error.in_line(lex.line_of(lex.pc()))),
            };
            match token {
                Token::EndOfProgram => break,
                Token::EndOfLine => continue,
                Token::Number(label) => {
                    if labels.symbols.contains_key(&label) {
                        let line = lex.line_of(lex.pc());
                        return Err(error!(DuplicateLabel, line; &label));
                    }
                    labels.symbols.insert(label, lex.pc());
                }
                _ => {}
            }
            lex.skip_line();
        }
        lex.jump(0);
        Ok(labels)
    }

    pub fn get(&self, label: &str) -> Option<Address> {
        self.symbols.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
