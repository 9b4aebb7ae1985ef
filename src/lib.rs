//! Type-safe tagged unions with a fixed storage footprint.
//!
//! - [`Either<A, B>`](Either) holds one value, an `A` or a `B`.
//! - [`Maybe<T>`](Maybe) holds a `T` or nothing; build it with [`just`],
//!   [`just_ptr`] and [`nothing`].
//! - [`Variant`] is the type-erased cell both are stored in. It accepts any
//!   `Clone + 'static` type.

pub use tagged::*;

/// The size of every `Either` and `Maybe`.
pub const STORAGE_SIZE: usize = std::mem::size_of::<Maybe<()>>();

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::borrow::Cow;
  use std::collections::HashMap;
  use std::mem::size_of;
  use std::net::{IpAddr, Ipv4Addr};
  use std::path::PathBuf;
  use std::ptr;
  use std::time::Duration;

  #[derive(Clone)]
  struct BigStruct {
    _array: [f64; 42],
  }

  fn find(haystack: &[i32], needle: i32) -> Maybe<usize> {
    match haystack.iter().position(|&x| x == needle) {
      Some(i) => just(i).into(),
      None => nothing().into(),
    }
  }

  fn first_positive(xs: &[i32]) -> Maybe<*const i32> {
    just_ptr(xs.iter().find(|&&x| x > 0).map_or(ptr::null(), |x| x as *const _))
      .into()
  }

  #[test]
  fn storage_size() {
    let sizes = [
      size_of::<Maybe<i32>>(),
      size_of::<Maybe<f64>>(),
      size_of::<Maybe<*const i32>>(),
      size_of::<Maybe<String>>(),
      size_of::<Maybe<BigStruct>>(),
      size_of::<Either<u8, BigStruct>>(),
    ];
    assert_eq!(sizes, [STORAGE_SIZE; 6]);
    assert_eq!(STORAGE_SIZE, 3 * size_of::<usize>());
  }

  #[test]
  fn inferred_at_return() {
    assert_eq!(find(&[3, 1, 4], 4).value(), 2);
    assert!(find(&[3, 1, 4], 5).is_nothing());

    let xs = [-1, 0, 5];
    assert_eq!(first_positive(&xs).value(), &xs[2] as *const i32);
    assert!(first_positive(&[-1, 0]).is_nothing());
  }

  #[test]
  fn std_payloads() {
    let path: Maybe<PathBuf> = just("/etc/tagged.yaml").into();
    let timeout: Maybe<Duration> = just(Duration::from_secs(1)).into();
    let table: Maybe<HashMap<String, u32>> =
      just(HashMap::from([("a".to_owned(), 1)])).into();
    let addr: Maybe<IpAddr> = just(Ipv4Addr::LOCALHOST).into();
    let name: Maybe<Cow<'static, str>> = just("tagged").into();
    let none: Maybe<Duration> = nothing().into();

    assert_eq!(path.value(), PathBuf::from("/etc/tagged.yaml"));
    assert_eq!(timeout.value(), Duration::from_secs(1));
    assert_eq!(table.value()["a"], 1);
    assert_eq!(addr.value(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(name.value(), "tagged");
    assert!(none.is_nothing());
  }
}
