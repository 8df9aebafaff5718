use crate::error;
use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    /// Popping an empty stack fails with `underflow`.
    pub fn new(overflow_message: &'static str, underflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow_message,
            underflow,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(Error::new(self.underflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_code() {
        let mut s: Stack<usize> = Stack::new("TOO MANY GOSUBS", ErrorCode::ReturnWithoutGosub);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::ReturnWithoutGosub);
        s.push(7).unwrap();
        assert_eq!(s.last(), Some(&7));
        assert_eq!(s.pop().unwrap(), 7);
        assert!(s.is_empty());
    }

    #[test]
    fn test_overflow() {
        let mut s: Stack<u8> = Stack::new("TOO MANY LOOPS", ErrorCode::NextWithoutFor);
        for _ in 0..u16::max_value() {
            s.push(0).unwrap();
        }
        let err = s.push(0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfMemory);
        assert_eq!(err.to_string(), "OUT OF MEMORY; TOO MANY LOOPS");
    }
}
