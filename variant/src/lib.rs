//! A single, fixed-size storage slot able to hold one value of any
//! `Clone + 'static` type, tagged with its dynamic type.

pub mod variant;

pub use self::variant::*;
