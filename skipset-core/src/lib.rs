//! Core types shared by the skip set crates
//!
//! This crate contains the fundamental types used by `skipset`: the
//! sentinel-safe key representation and the crate's error type. It has no
//! algorithmic logic of its own.
//!
//! - Common error types with [`Error`] and [`Result`]
//! - The [`Bound`] key wrapper, which widens a user `i64` so the two
//!   skip list sentinel values are unrepresentable
//!
//! # Example
//!
//! ```
//! use skipset_core::Bound;
//!
//! let a = Bound::Finite(5);
//! let b = Bound::Finite(8);
//! assert!(a < b);
//! assert!(Bound::NegInf < a);
//! assert!(b < Bound::PosInf);
//! ```

pub mod error;
pub mod key;

pub use error::{Error, Result};
pub use key::Bound;
