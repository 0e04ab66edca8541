//! Runtime execution: values, formatting, and the interpreter loop

pub mod format;
mod interpreter;
mod value;

pub use interpreter::{Interpreter, DEFAULT_QUEUE_LIMIT};
pub use value::Value;
