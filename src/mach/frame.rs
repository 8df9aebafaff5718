use super::Address;

/// Saved state of an active `FOR` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct NextFrame {
    pub var: usize,
    pub target: f64,
    pub addr: Address,
}

/// Saved state of an active `REPEAT` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct UntilFrame {
    pub addr: Address,
}
