//! General utility functions

use std::error;
use std::fmt;


#[derive(Debug, PartialEq, Eq)]
pub enum HexError {
    InvalidChar(char),
    OddLength,
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            HexError::InvalidChar(c) => write!(f, "Invalid hex char {:?}", c),
            HexError::OddLength => f.write_str("Odd number of hex digits"),
        }
    }
}

impl error::Error for HexError {}


pub fn to_hex(buf: &[u8]) -> String {
    buf.iter()
        .map(|n| format!("{:02x}", n))
        .collect::<Vec<_>>()
        .concat()
}

/// Parses a hex-string in byte order
///
/// Whitespace is skipped and a leading 0x is allowed
pub fn from_hex(str: &str) -> Result<Vec<u8>, HexError> {
    let str = str.trim();
    let str = if str.starts_with("0x") || str.starts_with("0X") { &str[2..] } else { str };

    // This may be an overestimate if there is any whitespace
    let mut b = Vec::with_capacity(str.len() / 2);
    let mut modulus = 0;
    let mut buf = 0u8;

    for c in str.chars() {
        buf <<= 4;

        match c {
            'A'..='F' => buf |= c as u8 - b'A' + 10,
            'a'..='f' => buf |= c as u8 - b'a' + 10,
            '0'..='9' => buf |= c as u8 - b'0',
            ' ' | '\r' | '\n' | '\t' => {
                buf >>= 4;
                continue
            }
            _ => return Err(HexError::InvalidChar(c)),
        }

        modulus += 1;
        if modulus == 2 {
            modulus = 0;
            b.push(buf);
        }
    }

    if modulus != 0 {
        return Err(HexError::OddLength);
    }
    Ok(b)
}
