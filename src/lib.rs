#![no_std]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

//! Character-indexed UTF-8 string buffer with compressed Unicode case
//! conversion, sized for embedded interpreter runtimes.
//!
//! [`CharBuf`] owns raw bytes and addresses them by character: negative
//! indices count from the end, multi-byte sequences count as one. The
//! strict codec lives in [`utf8`]; case conversion runs against
//! XOR-compressed tables built offline by [`builder`] (see the
//! `mkcasetable` binary) and compiled in behind the `unicode-case`
//! feature.

extern crate alloc;

pub mod buf;
pub mod builder;
pub mod case;
mod tr;
pub mod utf8;

pub use buf::{CharBuf, IndexError};
#[cfg(feature = "unicode-case")]
pub use case::{downcase_codepoint, upcase_codepoint};
pub use utf8::Utf8Error;
