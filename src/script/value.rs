//! The item held in a stack slot
//!
//! A `StackValue` is an immutable byte-array. It can be read as a scriptnum
//! (see `script::num`) or as a boolean.
//!
//! Two relations are defined and they are not the same:
//!
//! * `==` (and `Hash`) compare the bytes. `[0x01]` and `[0x01,0x00]` differ.
//! * `cmp_numeric` compares the decoded numbers. `[0x01]` and `[0x01,0x00]`
//!   are both 1 and compare as `Equal`.
//!
//! Because `Ord` must agree with `Eq`, `StackValue` does not implement
//! `PartialOrd`/`Ord`; use `sort_by(StackValue::cmp_numeric)` instead.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use script::num;
use util;


#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct StackValue(Box<[u8]>);

impl StackValue {

    /// Wraps the given bytes as-is
    pub fn new(bytes: Box<[u8]>) -> StackValue {
        StackValue(bytes)
    }

    /// The raw bytes, in stored (little-endian) order
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Box<[u8]> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interprets the bytes as a scriptnum
    pub fn to_bigint(&self) -> BigInt {
        num::decode(&self.0)
    }

    /// Interprets the bytes as a scriptnum if it fits an i64
    pub fn to_i64(&self) -> Option<i64> {
        num::decode_i64(&self.0)
    }

    /// Returns true if the bytes are the minimal encoding of their number
    pub fn is_minimal(&self) -> bool {
        num::is_minimal(&self.0)
    }

    /// Interprets the bytes as a boolean
    ///
    /// Any non-zero byte makes the value true, except for a 0x80 in the
    /// last position: that is the sign bit of a negative zero.
    /// An interior 0x80 does count as true.
    pub fn is_true(&self) -> bool {
        let last = self.0.len().wrapping_sub(1);
        self.0.iter().enumerate().any(|(i, &byte)|
            byte != 0 && !(byte == 0x80 && i == last)
        )
    }

    /// Three-way comparison of the decoded numbers
    ///
    /// This is coarser than `==`: different encodings of the same number
    /// compare as `Equal` while being unequal as values.
    pub fn cmp_numeric(&self, other: &StackValue) -> Ordering {
        if self.0 == other.0 {
            return Ordering::Equal;
        }
        self.to_bigint().cmp(&other.to_bigint())
    }

    /// Returns true if both decode to the same number
    pub fn numeric_eq(&self, other: &StackValue) -> bool {
        self.cmp_numeric(other) == Ordering::Equal
    }
}


impl From<Box<[u8]>> for StackValue {
    fn from(bytes: Box<[u8]>) -> StackValue {
        StackValue(bytes)
    }
}

impl From<Vec<u8>> for StackValue {
    fn from(bytes: Vec<u8>) -> StackValue {
        StackValue(bytes.into_boxed_slice())
    }
}

impl<'a> From<&'a [u8]> for StackValue {
    fn from(bytes: &'a [u8]) -> StackValue {
        StackValue(bytes.to_vec().into_boxed_slice())
    }
}

impl<'a> From<&'a BigInt> for StackValue {
    fn from(n: &'a BigInt) -> StackValue {
        StackValue::from(num::encode(n))
    }
}

impl From<BigInt> for StackValue {
    fn from(n: BigInt) -> StackValue {
        StackValue::from(&n)
    }
}

impl From<i64> for StackValue {
    fn from(n: i64) -> StackValue {
        StackValue::from(BigInt::from(n))
    }
}

impl From<bool> for StackValue {
    fn from(b: bool) -> StackValue {
        StackValue(Box::new([b as u8]))
    }
}

impl AsRef<[u8]> for StackValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Renders as a hex-string, in stored order
impl fmt::Display for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&util::to_hex(&self.0))
    }
}

impl fmt::Debug for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StackValue({})", util::to_hex(&self.0))
    }
}

impl FromStr for StackValue {
    type Err = util::HexError;

    fn from_str(s: &str) -> Result<StackValue, util::HexError> {
        Ok(StackValue::from(util::from_hex(s)?))
    }
}
