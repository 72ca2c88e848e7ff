//! Building blocks for the constant-addend demonstrations.
//!
//! Everything here revolves around one operation: [`transform`] rewrites a
//! slice in place by applying a [`UnaryOp`] to each element. The ways of
//! producing such an operation are what the demonstrations contrast:
//!
//! - a stateful value ([`Adder`]),
//! - a closure that captures the addend by value,
//! - a binary operator with its right operand fixed ([`bind_second`]).
//!
//! # Example
//!
//! ```
//! use addend_common::{bind_second, format_sequence, transform, Adder};
//! use std::ops::Add;
//!
//! let mut v = vec![1, 2, 3];
//! transform(&mut v, Adder::new(10));
//! transform(&mut v, bind_second(<i32 as Add>::add, -10));
//! assert_eq!(format_sequence(&v), "1 2 3 \n");
//! ```

mod error;
mod op;
mod print;
mod transform;

pub use error::{DemoError, Result};
pub use op::{add_fn, bind_second, Adder, UnaryOp};
pub use print::{format_sequence, write_sequence};
pub use transform::transform;
