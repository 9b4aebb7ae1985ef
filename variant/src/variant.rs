use std::any::{self, Any, TypeId};
use std::fmt::{self, Debug, Formatter};

/// Object-safe view of a stored value.
trait Erased: Any {
  fn clone_erased(&self) -> Box<dyn Erased>;
  fn as_any(&self) -> &dyn Any;
  fn type_name(&self) -> &'static str;
}

impl<T: Clone + 'static> Erased for T {
  fn clone_erased(&self) -> Box<dyn Erased> {
    Box::new(self.clone())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }

  fn type_name(&self) -> &'static str {
    any::type_name::<T>()
  }
}

/// Holds exactly one value of any `Clone + 'static` type.
///
/// Values are copied in and out. The value lives on the heap, so a
/// `Variant` is always two words wide whatever it stores.
pub struct Variant(Box<dyn Erased>);

impl Variant {
  pub fn new<T: Clone + 'static>(value: T) -> Self {
    Self(Box::new(value))
  }

  pub fn type_id(&self) -> TypeId {
    self.0.as_any().type_id()
  }

  pub fn type_name(&self) -> &'static str {
    self.0.type_name()
  }

  pub fn is<T: 'static>(&self) -> bool {
    self.0.as_any().is::<T>()
  }

  pub fn get<T: 'static>(&self) -> Option<&T> {
    self.0.as_any().downcast_ref()
  }

  /// Returns a copy of the stored value if it is a `T`.
  pub fn value<T: Clone + 'static>(&self) -> Option<T> {
    self.get::<T>().cloned()
  }

  /// Returns a copy of the stored value without checking its type.
  ///
  /// # Safety
  ///
  /// The variant must hold a `T`.
  pub unsafe fn value_unchecked<T: Clone + 'static>(&self) -> T {
    debug_assert!(
      self.is::<T>(),
      "variant holds {}, not {}",
      self.type_name(),
      any::type_name::<T>()
    );
    let ptr = &*self.0 as *const dyn Erased as *const T;
    (*ptr).clone()
  }
}

impl Clone for Variant {
  fn clone(&self) -> Self {
    Self(self.0.clone_erased())
  }
}

impl Debug for Variant {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Variant<{}>", self.type_name())
  }
}
