//! Factories which build a [`Maybe`] without naming its type.
//!
//! ```
//! use tagged::{just, nothing, Maybe};
//!
//! fn parse_digit(c: char) -> Maybe<u32> {
//!   match c.to_digit(10) {
//!     Some(d) => just(d).into(),
//!     None => nothing().into(),
//!   }
//! }
//!
//! assert_eq!(parse_digit('7').value(), 7);
//! assert!(parse_digit('x').is_nothing());
//! ```

use crate::{Maybe, Nullable};
use log::trace;
use std::any;

/// Converts into a `Maybe<T>` with no value, for any `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NothingType;

impl<T: Clone + 'static> From<NothingType> for Maybe<T> {
  fn from(_: NothingType) -> Self {
    Maybe::new()
  }
}

/// Converts into a `Maybe<T>` holding the wrapped value, for any `T` the
/// value converts to.
#[derive(Debug)]
#[must_use]
pub struct JustType<U>(U);

impl<T, U> From<JustType<U>> for Maybe<T>
where
  T: Clone + From<U> + 'static,
{
  fn from(JustType(value): JustType<U>) -> Self {
    Maybe::from_value(T::from(value))
  }
}

/// Converts into a `Maybe<P>` which has no value if the pointer is null.
#[derive(Debug)]
#[must_use]
pub struct JustPtrType<P>(P);

impl<P> From<JustPtrType<P>> for Maybe<P>
where
  P: Nullable + Clone + 'static,
{
  fn from(JustPtrType(ptr): JustPtrType<P>) -> Self {
    if ptr.is_null() {
      trace!("just_ptr({}) got a null pointer", any::type_name::<P>());
      Maybe::new()
    } else {
      Maybe::from_value(ptr)
    }
  }
}

/// Returns a value which converts into any `Maybe<T>`, representing an
/// operation which produced nothing.
pub fn nothing() -> NothingType {
  NothingType
}

/// Returns a value which converts into a `Maybe<T>` holding `value`, for
/// any `T: From<U>`.
///
/// Every value is kept, including zero, `false` and null pointers; use
/// [`just_ptr`] for pointers.
pub fn just<U>(value: U) -> JustType<U> {
  JustType(value)
}

/// Returns a value which converts into a `Maybe<P>` holding `ptr`.
///
/// A null pointer becomes a `Maybe` with no value, so a `Maybe` of a
/// pointer never holds null.
pub fn just_ptr<P: Nullable>(ptr: P) -> JustPtrType<P> {
  JustPtrType(ptr)
}
