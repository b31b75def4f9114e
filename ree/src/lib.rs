//! `ree` is a Rust library for run-end encoded arrays.
//!
//! A run-end encoded array represents a logical sequence of values as runs of identical consecutive values.
//! It is stored as two buffers of equal length:
//!  - the run ends: positive, strictly increasing, exclusive logical end offsets of each run, and
//!  - the values: one optionally null value per run.
//!
//! The logical sequence `[1, 1, 1, 1, 2, 2, 3, 3, 3, 3]` has run ends `[4, 6, 10]` and values `[1, 2, 3]`.
//!
//! ## Getting Started
//! - Encode a [`ValueBuffer`](data_type::ValueBuffer) with [`ReeArray::encode`] and decode it with [`ReeArray::decode`].
//! - Take a logical window of an array with [`ReeArray::slice`], or a single value with [`ReeArray::value_at`].
//! - Ingest run ends and values read from a container with [`RawReeParts`] or [`ReeArray::from_parts`].
//!   Such arrays are untrusted and are validated before use, see [`validate`].
//! - Access run-end encoded and plain columns uniformly through the [`Column`] trait.
//!
//! ```rust
//! # use ree::{ReeArray, RunEndWidth};
//! # use ree::data_type::ValueBuffer;
//! let logical = ValueBuffer::from_options([Some(1.0f64), Some(1.0), None, None, Some(2.0)]);
//! let array = ReeArray::encode(&logical, RunEndWidth::Int32)?;
//! assert_eq!(array.run_ends().as_slice(), &[2, 4, 5]);
//! assert_eq!(array.values().to_string(), "[1.0, null, 2.0]");
//!
//! let sliced = array.slice(1, 3)?;
//! assert_eq!(sliced.run_ends().as_slice(), &[1, 3]);
//! assert_eq!(sliced.decode()?.to_string(), "[1.0, null, null]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration
//! Global defaults such as the run end width used by [`ReeArray::encode_default`] are set through the [`config`] module.
//!
//! ## Logging
//! `ree` logs through the [`log`](https://docs.rs/log/latest/log/) crate.
//! A logger such as [`env_logger`](https://docs.rs/env_logger/latest/env_logger/) can be used to capture the logs.
//! An untrusted array that fails validation when it is decoded, sliced, or accessed is logged as a warning.
//!
//! ## Licence
//! `ree` is licensed under either of
//!  - the Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::wildcard_enum_match_arm)]

pub mod config;
pub mod error;
pub mod validate;

mod column;
mod metadata;
mod options;
mod raw;
mod ree_array;
mod run_end_buffer;

pub use ree_data_type as data_type;

pub use column::Column;
pub use error::{InvalidBytesLengthError, InvalidRunEndsError, ReeError, UnsupportedRunEndWidthError};
pub use metadata::ReeMetadata;
pub use options::ReeOptions;
pub use raw::RawReeParts;
pub use ree_array::ReeArray;
pub use run_end_buffer::{RunEndBuffer, RunEndWidth};
