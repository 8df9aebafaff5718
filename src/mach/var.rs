use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Twenty-six numeric slots, one per letter. Only the first character
/// of a name selects the slot, so `APPLE` and `A` are the same variable.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Var {
    vals: [f64; 26],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vals = [0.0; 26];
    }

    pub fn index(var_name: &str) -> Result<usize> {
        match var_name.chars().next() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                Ok((ch.to_ascii_uppercase() as u8 - b'A') as usize)
            }
            _ => Err(error!(NotAVariable)),
        }
    }

    pub fn fetch(&self, index: usize) -> f64 {
        self.vals[index]
    }

    pub fn store(&mut self, index: usize, value: f64) {
        self.vals[index] = value;
    }
}
