use std::fmt;
use std::ops::Deref;

/// A `v4`-only caller-supplied byte string that is authenticated but never
/// transmitted as part of the token.
#[derive(Default, Debug, Copy, Clone)]
pub struct ImplicitAssertion<'a>(&'a [u8]);

impl<'a> Deref for ImplicitAssertion<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl AsRef<[u8]> for ImplicitAssertion<'_> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a [u8]> for ImplicitAssertion<'a> {
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes)
  }
}

impl<'a> From<&'a str> for ImplicitAssertion<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl fmt::Display for ImplicitAssertion<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.0))
  }
}

impl PartialEq for ImplicitAssertion<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}
impl Eq for ImplicitAssertion<'_> {}
