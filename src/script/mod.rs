//! Script stack values
//!
//! `num` contains the scriptnum codec, `value` the immutable stack item and
//! `stack` the container the interpreter pushes to and pops from.
//!
//! Opcode execution itself lives outside this crate.

use std::error;
use std::fmt;

pub mod num;
pub mod value;
pub mod stack;

#[derive(Debug, PartialEq, Eq)]
pub enum ScriptError {
    StackUnderflow,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScriptError::StackUnderflow => f.write_str("Pop from empty stack"),
        }
    }
}

impl error::Error for ScriptError {}
