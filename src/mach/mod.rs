/*!
## Rust Machine Module

This Rust module holds the state of a BASIC program and walks its
statements and expressions to run it.

*/

mod eval;
mod function;
mod input;
mod listing;
mod operation;
mod program;
mod runtime;
mod stack;
mod statement;
mod trace;
mod val;
mod var;

pub use input::InputBuffer;
pub use listing::Listing;
pub use operation::Operation;
pub use program::{Address, Frame, Program};
pub use stack::Stack;
pub use trace::Trace;
pub use val::Val;
pub use var::Var;
