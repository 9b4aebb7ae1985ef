pub mod config;
pub mod string;
pub mod types;

pub use self::config::*;
pub use self::string::*;
pub use self::types::*;

#[repr(C)]
pub struct Unit(pub i32);

impl Unit {
  fn new() -> Self {
    Self(0)
  }
}

/// Size in bytes of any `Either` or `Maybe` on the Rust side.
#[no_mangle]
pub extern "C" fn maybe_storage_size() -> usize {
  tagged_maybe::STORAGE_SIZE
}
