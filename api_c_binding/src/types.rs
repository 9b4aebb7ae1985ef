use tagged_maybe::{self as tagged, Side};

#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum Either<E, T> {
  Left(E),
  Right(T),
}

#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum Maybe<T> {
  Just(T),
  Nothing,
}

impl<E, T> From<tagged::Either<E, T>> for Either<E, T>
where
  E: Clone + 'static,
  T: Clone + 'static,
{
  fn from(either: tagged::Either<E, T>) -> Self {
    match either.side() {
      Side::First => Either::Left(either.get_1st()),
      Side::Second => Either::Right(either.get_2nd()),
    }
  }
}

impl<T: Clone + 'static> From<tagged::Maybe<T>> for Maybe<T> {
  fn from(maybe: tagged::Maybe<T>) -> Self {
    match maybe.to_option() {
      Some(value) => Maybe::Just(value),
      None => Maybe::Nothing,
    }
  }
}
