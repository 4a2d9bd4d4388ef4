use crate::base64url;
use crate::error::PasetoError;
use std::fmt::Display;
use subtle::ConstantTimeEq;

/// Used by marker structs to determine at compile time which PASETO version is in play.
pub trait VersionTrait: Display + Default + AsRef<str> {}
/// Used by marker structs to determine at compile time which PASETO purpose is in play.
pub trait PurposeTrait: Display + Default + AsRef<str> {}
/// Versions that support an implicit assertion in addition to a footer. Only `V4` in this crate.
pub trait ImplicitAssertionCapable: VersionTrait {}

/// Enables a type to encode/decode to/from unpadded base64url and compare
/// its encoded form against a raw token segment in constant time.
pub(crate) trait Base64Encodable: AsRef<[u8]> {
  fn encode(&self) -> String {
    base64url::encode(self.as_ref())
  }

  fn decode(&self) -> Result<Vec<u8>, PasetoError> {
    base64url::decode(self.as_ref())
  }

  /// Compares this value's base64url encoding against the raw bytes of a
  /// token segment in constant time. A length mismatch is reported
  /// immediately — timing here leaks only the length, never the content.
  fn constant_time_equals(&self, other: &[u8]) -> bool {
    let encoded = self.encode();
    let lhs = encoded.as_bytes();
    if lhs.len() != other.len() {
      return false;
    }
    lhs.ct_eq(other).into()
  }
}
