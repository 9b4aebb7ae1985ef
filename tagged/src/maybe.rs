use crate::{contract, AccessError, Either};
use std::any;
use std::fmt::{self, Debug, Formatter};

/// The result of an operation which either produced a `T` or nothing.
///
/// Built on `Either<bool, T>`: no value is the first alternative holding
/// `false`, a value is the second alternative. Presence is tested by side,
/// not by type, so `Maybe<bool>` is unambiguous.
///
/// A `Maybe` never changes state once built. Create one with
/// [`just`](crate::just) or [`nothing`](crate::nothing).
pub struct Maybe<T> {
  value: Either<bool, T>,
}

impl<T: Clone + 'static> Maybe<T> {
  /// A `Maybe` with no value.
  pub fn new() -> Self {
    Self {
      value: Either::from_1st(false),
    }
  }

  // use `just()` instead
  pub(crate) fn from_value(value: T) -> Self {
    Self {
      value: Either::from_2nd(value),
    }
  }

  pub fn has_value(&self) -> bool {
    self.value.is_2nd()
  }

  pub fn is_nothing(&self) -> bool {
    !self.has_value()
  }

  pub fn get(&self) -> Option<&T> {
    self.value.second()
  }

  pub fn try_value(&self) -> Result<T, AccessError> {
    self.get().cloned().ok_or(AccessError::NoValue {
      expected: any::type_name::<T>(),
    })
  }

  /// Returns a copy of the value.
  ///
  /// Reading a `Maybe` without a value is a contract violation.
  #[track_caller]
  pub fn value(&self) -> T {
    match self.try_value() {
      Ok(value) => value,
      Err(err) => contract::violation(err),
    }
  }

  /// # Safety
  ///
  /// `self.has_value()` must be true.
  pub unsafe fn value_unchecked(&self) -> T {
    debug_assert!(
      self.has_value(),
      "Maybe<{}> has no value",
      any::type_name::<T>()
    );
    self.value.get_unchecked()
  }

  pub fn value_or(&self, default: T) -> T {
    self.get().cloned().unwrap_or(default)
  }

  pub fn to_option(&self) -> Option<T> {
    self.get().cloned()
  }
}

impl<T: Clone + 'static> Default for Maybe<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for Maybe<T> {
  fn clone(&self) -> Self {
    Self {
      value: self.value.clone(),
    }
  }
}

impl<T: Clone + Debug + 'static> Debug for Maybe<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.get() {
      Some(value) => f.debug_tuple("Just").field(value).finish(),
      None => f.write_str("Nothing"),
    }
  }
}

impl<T: Clone + PartialEq + 'static> PartialEq for Maybe<T> {
  fn eq(&self, other: &Self) -> bool {
    self.get() == other.get()
  }
}

impl<T: Clone + Eq + 'static> Eq for Maybe<T> {}

/// `Some` of a null pointer still has a value.
impl<T: Clone + 'static> From<Option<T>> for Maybe<T> {
  fn from(value: Option<T>) -> Self {
    value.map_or_else(Self::new, Self::from_value)
  }
}

impl<T: Clone + 'static> From<Maybe<T>> for Option<T> {
  fn from(value: Maybe<T>) -> Self {
    value.to_option()
  }
}
