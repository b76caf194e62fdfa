#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parsing for the single-span processor index descriptors that the Linux kernel exposes
//! under `/sys/devices/system/cpu`, such as the `possible` and `present` files.
//!
//! Example descriptor string: `0-15`
//!
//! # Format
//!
//! The value is either:
//!
//! * a single processor index (e.g. `0`, the form single-processor systems expose)
//! * an inclusive range of processor indexes (e.g. `0-15`)
//!
//! Whitespace or extra characters are not allowed anywhere in the string. Callers are
//! expected to trim the trailing newline that sysfs file contents carry before parsing.
//!
//! The indexes in the span are of size `u32`.
//!
//! # Example
//!
//! ```
//! let possible = cpuspan::parse("0-15").unwrap();
//! assert_eq!(possible, 0..=15);
//!
//! let single = cpuspan::parse("0").unwrap();
//! assert_eq!(single, 0..=0);
//! ```

mod error;
mod parse;

pub use error::*;
pub use parse::*;

pub(crate) type Item = u32;
