use crate::{contract, AccessError};
use std::any;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use variant::Variant;

/// Which of the two alternatives an [`Either`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
  First,
  Second,
}

/// Holds exactly one value, either an `A` or a `B`.
///
/// The value is kept in a [`Variant`] next to an explicit [`Side`], so an
/// `Either` is always three words wide and positional queries stay exact
/// even when `A` and `B` are the same type.
///
/// There is no empty state and no way to switch sides after construction.
pub struct Either<A, B> {
  side: Side,
  cell: Variant,
  _types: PhantomData<fn() -> (A, B)>,
}

// SAFETY: the cell only ever holds an `A` or a `B`.
unsafe impl<A: Send, B: Send> Send for Either<A, B> {}
unsafe impl<A: Sync, B: Sync> Sync for Either<A, B> {}

/// Marks the first alternative in [`OneOf`].
pub enum InFirst {}

/// Marks the second alternative in [`OneOf`].
pub enum InSecond {}

/// Values of `Self` can be stored in an `Either<A, B>`; `S` records on
/// which side.
///
/// `S` is inferred, so `Either::new` picks the side from the type of its
/// argument and refuses to compile when `A` and `B` are the same.
pub trait OneOf<A, B, S>: Sized {
  fn into_either(self) -> Either<A, B>;
}

impl<A, B> OneOf<A, B, InFirst> for A
where
  A: Clone + 'static,
  B: Clone + 'static,
{
  fn into_either(self) -> Either<A, B> {
    Either::from_1st(self)
  }
}

impl<A, B> OneOf<A, B, InSecond> for B
where
  A: Clone + 'static,
  B: Clone + 'static,
{
  fn into_either(self) -> Either<A, B> {
    Either::from_2nd(self)
  }
}

impl<A, B> Either<A, B>
where
  A: Clone + 'static,
  B: Clone + 'static,
{
  pub fn from_1st(value: A) -> Self {
    Self {
      side: Side::First,
      cell: Variant::new(value),
      _types: PhantomData,
    }
  }

  pub fn from_2nd(value: B) -> Self {
    Self {
      side: Side::Second,
      cell: Variant::new(value),
      _types: PhantomData,
    }
  }

  pub fn new<X, S>(value: X) -> Self
  where
    X: OneOf<A, B, S>,
  {
    value.into_either()
  }

  pub fn side(&self) -> Side {
    self.side
  }

  /// Whether the held value is an `X`.
  pub fn is<X: 'static>(&self) -> bool {
    self.cell.is::<X>()
  }

  pub fn is_1st(&self) -> bool {
    self.side == Side::First
  }

  pub fn is_2nd(&self) -> bool {
    self.side == Side::Second
  }

  pub fn first(&self) -> Option<&A> {
    match self.side {
      Side::First => self.cell.get(),
      Side::Second => None,
    }
  }

  pub fn second(&self) -> Option<&B> {
    match self.side {
      Side::First => None,
      Side::Second => self.cell.get(),
    }
  }

  pub fn try_as<X: Clone + 'static>(&self) -> Result<X, AccessError> {
    self
      .cell
      .value::<X>()
      .ok_or_else(|| self.wrong_variant::<X>())
  }

  pub fn try_1st(&self) -> Result<A, AccessError> {
    self.first().cloned().ok_or_else(|| self.wrong_variant::<A>())
  }

  pub fn try_2nd(&self) -> Result<B, AccessError> {
    self.second().cloned().ok_or_else(|| self.wrong_variant::<B>())
  }

  /// Returns a copy of the held value.
  ///
  /// Callers are expected to check [`is`](Self::is) first; reading the
  /// wrong alternative is a contract violation, which panics unless the
  /// process is configured to abort.
  #[track_caller]
  pub fn get<X: Clone + 'static>(&self) -> X {
    match self.try_as() {
      Ok(value) => value,
      Err(err) => contract::violation(err),
    }
  }

  #[track_caller]
  pub fn get_1st(&self) -> A {
    match self.try_1st() {
      Ok(value) => value,
      Err(err) => contract::violation(err),
    }
  }

  #[track_caller]
  pub fn get_2nd(&self) -> B {
    match self.try_2nd() {
      Ok(value) => value,
      Err(err) => contract::violation(err),
    }
  }

  /// # Safety
  ///
  /// `self.is::<X>()` must be true.
  pub unsafe fn get_unchecked<X: Clone + 'static>(&self) -> X {
    self.cell.value_unchecked()
  }

  fn wrong_variant<X>(&self) -> AccessError {
    AccessError::WrongVariant {
      expected: any::type_name::<X>(),
      found: self.cell.type_name(),
    }
  }
}

impl<A, B> Clone for Either<A, B> {
  fn clone(&self) -> Self {
    Self {
      side: self.side,
      cell: self.cell.clone(),
      _types: PhantomData,
    }
  }
}

impl<A, B> Debug for Either<A, B>
where
  A: Clone + Debug + 'static,
  B: Clone + Debug + 'static,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match (self.first(), self.second()) {
      (Some(a), _) => f.debug_tuple("First").field(a).finish(),
      (_, Some(b)) => f.debug_tuple("Second").field(b).finish(),
      _ => f.debug_tuple("Either").field(&self.cell).finish(),
    }
  }
}

impl<A, B> PartialEq for Either<A, B>
where
  A: Clone + PartialEq + 'static,
  B: Clone + PartialEq + 'static,
{
  fn eq(&self, other: &Self) -> bool {
    match self.side {
      Side::First => self.first() == other.first(),
      Side::Second => self.second() == other.second(),
    }
  }
}

impl<A, B> Eq for Either<A, B>
where
  A: Clone + Eq + 'static,
  B: Clone + Eq + 'static,
{
}

#[cfg(test)]
mod tests {
  use super::*;
  use insta::assert_snapshot;
  use pretty_assertions::assert_eq;
  use quickcheck_macros::quickcheck;
  use std::mem::size_of;

  #[test]
  fn holds_first() {
    let either: Either<i32, bool> = Either::new(42);

    assert!(either.is::<i32>());
    assert!(either.is_1st());
    assert!(!either.is::<bool>());
    assert!(!either.is_2nd());
    assert_eq!(either.side(), Side::First);
    assert_eq!(either.get::<i32>(), 42);
    assert_eq!(either.get_1st(), 42);
    assert_eq!(either.first(), Some(&42));
    assert_eq!(either.second(), None);
  }

  #[test]
  fn holds_second() {
    let either: Either<i32, bool> = Either::new(true);

    assert!(either.is::<bool>());
    assert!(either.is_2nd());
    assert!(!either.is::<i32>());
    assert!(!either.is_1st());
    assert_eq!(either.get::<bool>(), true);
    assert_eq!(either.get_2nd(), true);
    assert_eq!(
      either.try_1st(),
      Err(AccessError::WrongVariant {
        expected: "i32",
        found: "bool",
      })
    );
  }

  #[test]
  #[should_panic(expected = "contract violation")]
  fn wrong_side() {
    let either: Either<i32, bool> = Either::from_2nd(true);
    either.get_1st();
  }

  #[test]
  #[should_panic(expected = "expected i32, but the variant holds bool")]
  fn wrong_type() {
    let either: Either<i32, bool> = Either::from_2nd(true);
    either.get::<i32>();
  }

  #[test]
  fn foreign_type() {
    let either: Either<i32, bool> = Either::from_1st(1);
    assert!(!either.is::<String>());
    assert!(either.try_as::<String>().is_err());
  }

  #[test]
  fn same_types_are_positional() {
    let first: Either<u8, u8> = Either::from_1st(1);
    let second: Either<u8, u8> = Either::from_2nd(2);

    assert!(first.is_1st() && !first.is_2nd());
    assert!(second.is_2nd() && !second.is_1st());
    assert_eq!(first.try_1st(), Ok(1));
    assert!(first.try_2nd().is_err());
    assert_eq!(second.get_2nd(), 2);
    assert!(first != Either::from_2nd(1));
  }

  #[test]
  fn unchecked() {
    let either: Either<String, f64> = Either::new(2.5);
    assert_eq!(unsafe { either.get_unchecked::<f64>() }, 2.5);
  }

  #[test]
  fn clone_and_eq() {
    let either: Either<Vec<i32>, char> = Either::new(vec![1, 2]);
    let copy = either.clone();
    drop(either);
    assert_eq!(copy, Either::from_1st(vec![1, 2]));
    assert!(copy != Either::from_2nd('x'));
  }

  #[test]
  fn nested() {
    let inner: Either<u8, char> = Either::new('a');
    let outer: Either<i32, Either<u8, char>> = Either::new(inner.clone());
    assert_eq!(outer.get_2nd(), inner);
  }

  #[test]
  fn std_payloads() {
    let either: Either<std::path::PathBuf, std::time::Duration> =
      Either::new(std::time::Duration::from_secs(3));
    assert!(either.is_2nd());
    assert_eq!(either.get_2nd().as_secs(), 3);
  }

  #[test]
  fn debug() {
    let first: Either<i32, &'static str> = Either::new(42);
    let second: Either<i32, &'static str> = Either::new("hi");
    assert_snapshot!(format!("{:?}", first), @"First(42)");
    assert_snapshot!(format!("{:?}", second), @r###"Second("hi")"###);
  }

  #[test]
  fn size() {
    assert_eq!(size_of::<Either<u8, bool>>(), 3 * size_of::<usize>());
    assert_eq!(
      size_of::<Either<u8, bool>>(),
      size_of::<Either<[f64; 42], String>>()
    );
  }

  #[test]
  fn send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Either<i32, String>>();
  }

  #[quickcheck]
  fn first_round_trip(x: i64) -> bool {
    let either: Either<i64, String> = Either::new(x);
    either.is::<i64>() && either.get::<i64>() == x
  }

  #[quickcheck]
  fn second_round_trip(x: String) -> bool {
    let either: Either<i64, String> = Either::new(x.clone());
    either.is::<String>() && either.get_2nd() == x
  }
}
