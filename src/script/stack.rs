//! The script stack
//!
//! Holds the `StackValue`s the interpreter pushes and pops.
//! No limits are applied; the stack-size limit is the interpreter's business.

use num_bigint::BigInt;

use super::ScriptError;
use super::value::StackValue;

#[derive(Debug, Default)]
pub struct Stack(Vec<StackValue>);


impl Stack {

    pub fn new() -> Stack {
        Stack(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the top item without popping it
    pub fn peek(&self) -> Option<&StackValue> {
        self.0.last()
    }

    /// Pops the top item from the stack
    ///
    /// Returns a StackUnderflow if no items are available
    pub fn pop(&mut self) -> Result<StackValue, ScriptError> {
        let value = self.0.pop()
            .ok_or(ScriptError::StackUnderflow)?;

        trace!("pop {:?}, depth {}", value, self.0.len());
        Ok(value)
    }

    /// Pushes the given item on the stack
    pub fn push(&mut self, value: StackValue) {
        trace!("push {:?}, depth {}", value, self.0.len() + 1);
        self.0.push(value);
    }

    /// Pops a value of the stack and interprets it as a scriptnum
    ///
    /// Any length is accepted; non-minimal encodings decode to their value
    pub fn pop_num(&mut self) -> Result<BigInt, ScriptError> {
        Ok(self.pop()?.to_bigint())
    }

    /// Stores a scriptnum on the stack in its minimal encoding
    pub fn push_num(&mut self, n: &BigInt) {
        self.push(StackValue::from(n))
    }

    /// Pops a value of the stack and interprets it as a boolean
    pub fn pop_bool(&mut self) -> Result<bool, ScriptError> {
        Ok(self.pop()?.is_true())
    }

    /// Pushes [0x01] for true and [0x00] for false
    pub fn push_bool(&mut self, b: bool) {
        self.push(StackValue::from(b))
    }
}
