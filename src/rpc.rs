//! RPC error signalling
//!
//! A `RequestError` ends the processing of the current request. It is not
//! retried; code and message are passed to the caller verbatim, as the
//! `error` object of the JSON-RPC response.

use std::error;
use std::fmt;


pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    code: i32,
    message: String,
}

impl RequestError {

    pub fn new<T: Into<String>>(code: i32, message: T) -> RequestError {
        RequestError {
            code: code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl error::Error for RequestError {}
