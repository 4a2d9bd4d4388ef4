use crate::traits::Base64Encodable;
use std::ops::Deref;

/// The opaque message bytes carried inside a token. This crate never
/// inspects, parses, or validates the payload — callers own its shape.
#[derive(Default, Debug, Clone, Copy)]
pub struct Payload<'a>(&'a [u8]);

impl Base64Encodable for Payload<'_> {}

impl<'a> Deref for Payload<'a> {
  type Target = [u8];

  fn deref(&self) -> &'a Self::Target {
    self.0
  }
}

impl AsRef<[u8]> for Payload<'_> {
  fn as_ref(&self) -> &[u8] {
    self.0
  }
}

impl<'a> From<&'a [u8]> for Payload<'a> {
  fn from(bytes: &'a [u8]) -> Self {
    Self(bytes)
  }
}

impl<'a> From<&'a str> for Payload<'a> {
  fn from(s: &'a str) -> Self {
    Self(s.as_bytes())
  }
}

impl<R> PartialEq<R> for Payload<'_>
where
  R: AsRef<[u8]>,
{
  fn eq(&self, other: &R) -> bool {
    self.as_ref() == other.as_ref()
  }
}
