use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Reading a value which is not there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
  WrongVariant {
    expected: &'static str,
    found: &'static str,
  },
  NoValue {
    expected: &'static str,
  },
}

impl Display for AccessError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::WrongVariant { expected, found } => {
        write!(f, "expected {}, but the variant holds {}", expected, found)
      }
      Self::NoValue { expected } => {
        write!(f, "expected {}, but there is no value", expected)
      }
    }
  }
}

impl Error for AccessError {}
