//! # Small BASIC
//!
//! A small interpreter for line-labelled BASIC programs.
//!
//! Run a program by handing its file name to the executable.
//! ```text
//! $ sbasic hello.bas
//! HELLO WORLD
//! ```
//!
//! The interpreter can also be driven from Rust. `Runtime::execute`
//! returns an `Event` for every piece of output and every request
//! for input.
//! ```
//! use sbasic::mach::{Event, Runtime};
//!
//! let mut runtime = Runtime::new("10 A=5\n20 IF A=5 THEN PRINT \"FIVE\"\n30 END\n");
//! match runtime.execute(100) {
//!     Event::Print(s) => assert_eq!(s, "FIVE\n"),
//!     _ => unreachable!(),
//! }
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

#[path = "doc/errors.rs"]
#[allow(non_snake_case)]
pub mod ___Errors;

pub mod lang;
pub mod mach;
pub mod term;
