//!
//! Script stack values
//!
//! The stack of the script interpreter holds byte-arrays. These are read as
//! scriptnums (little-endian sign-and-magnitude integers of any size) or as
//! booleans. The exact rules are consensus critical.
//!
//! ```
//! use bitcrust_script::StackValue;
//!
//! let v = StackValue::from(-259i64);
//! assert_eq!(v.bytes(), &[0x03, 0x81]);
//! assert!(v.is_true());
//! ```


extern crate num_bigint;
extern crate num_traits;

#[macro_use]
extern crate log;

#[macro_use]
extern crate clap;

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate toml;

pub mod script;
pub mod rpc;
pub mod util;
pub mod config;


pub use script::ScriptError;
pub use script::stack::Stack;
pub use script::value::StackValue;
pub use rpc::RequestError;
