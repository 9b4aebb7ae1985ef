use std::ptr::NonNull;

/// Pointer-like types with a null value.
///
/// [`just_ptr`](crate::just_ptr) turns a null into a `Maybe` with no value,
/// so "no value" and "null" never need to be told apart downstream.
pub trait Nullable {
  fn is_null(&self) -> bool;
}

impl<T: ?Sized> Nullable for *const T {
  fn is_null(&self) -> bool {
    <*const T>::is_null(*self)
  }
}

impl<T: ?Sized> Nullable for *mut T {
  fn is_null(&self) -> bool {
    <*mut T>::is_null(*self)
  }
}

impl<T: ?Sized> Nullable for Option<NonNull<T>> {
  fn is_null(&self) -> bool {
    self.is_none()
  }
}
