use std::os::raw::c_char;

#[repr(C)]
pub struct Utf8String {
  pub data: *const c_char,
  pub len: usize,
}

#[repr(C)]
pub struct Utf8Str {
  pub data: *const c_char,
  pub len: usize,
}

impl Utf8String {
  pub(crate) fn new(str: String) -> Self {
    let len = str.len();
    let ptr = Box::into_raw(str.into_boxed_str()) as *mut u8;
    Self {
      data: ptr as *const c_char,
      len,
    }
  }
}

impl Utf8Str {
  pub(crate) fn new(str: &'static str) -> Self {
    Self {
      data: str.as_ptr() as *const _,
      len: str.len(),
    }
  }

  /// # Safety
  ///
  /// `data` must point to `len` bytes of UTF-8 which outlive `'a`.
  pub unsafe fn as_str<'a>(&self) -> &'a str {
    std::str::from_utf8_unchecked(std::slice::from_raw_parts(
      self.data as *const _,
      self.len,
    ))
  }
}

#[no_mangle]
pub extern "C" fn destroy_string(str: Utf8String) {
  drop(unsafe {
    Box::from_raw(std::ptr::slice_from_raw_parts_mut(
      str.data as *mut u8,
      str.len,
    ))
  });
}
