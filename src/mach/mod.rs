/*!
## Rust Machine Module

This Rust module executes BASIC programs straight from the source text.

*/

pub type Address = usize;

mod expr;
mod frame;
mod label;
mod runtime;
mod stack;
mod var;

#[cfg(test)]
mod tests;

pub use expr::evaluate;
pub use expr::raise;
pub use frame::NextFrame;
pub use frame::UntilFrame;
pub use label::Labels;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
