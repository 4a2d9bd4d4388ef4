use crate::traits::Base64Encodable;
use std::fmt;
use std::ops::Deref;

/// Caller-supplied bytes authenticated (not encrypted) and transmitted as
/// the trailing base64url segment of a token.
#[derive(Default, Debug, Clone, Copy)]
pub struct Footer<'a>(&'a [u8]);

impl Base64Encodable for Footer<'_> {}

impl<'a> Deref for Footer<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl AsRef<[u8]> for Footer<'_> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a [u8]> for Footer<'a> {
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes)
  }
}

impl<'a> From<&'a str> for Footer<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl fmt::Display for Footer<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.0))
  }
}

impl PartialEq for Footer<'_> {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}
impl Eq for Footer<'_> {}

impl Footer<'_> {
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn default_footer_is_empty() {
    let footer = Footer::default();
    assert!(footer.is_empty());
  }

  #[test]
  fn footer_from_str_round_trips() {
    let footer: Footer = "wubbulubbadubdub".into();
    assert_eq!(footer.as_ref(), b"wubbulubbadubdub");
    assert!(!footer.is_empty());
  }
}
