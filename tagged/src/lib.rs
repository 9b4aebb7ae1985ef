//! A two-variant tagged union, [`Either`], and an option type built on it,
//! [`Maybe`].
//!
//! Both store their value in a [`Variant`], so their size does not depend
//! on what they hold. Any `Clone + 'static` type can be stored.

mod contract;

pub mod adapter;
pub mod either;
pub mod error;
pub mod maybe;
pub mod nullable;

pub use self::adapter::*;
pub use self::either::*;
pub use self::error::*;
pub use self::maybe::*;
pub use self::nullable::*;

pub use variant::Variant;
