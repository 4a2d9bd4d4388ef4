use super::Key;
use crate::base64url;
use crate::version::V4;
use crate::PasetoError;
use std::convert::{AsRef, From};
use std::fmt::Display;
use std::marker::PhantomData;

/// A symmetric key used for `{version}.local` encryption and decryption.
///
/// Keys are created from a 32-byte [Key].
pub struct SymmetricKey<Version> {
  version: PhantomData<Version>,
  key: Key<32>,
}

impl<Version> From<Key<32>> for SymmetricKey<Version> {
  fn from(key: Key<32>) -> Self {
    Self { version: PhantomData, key }
  }
}

impl<Version> AsRef<[u8]> for SymmetricKey<Version> {
  fn as_ref(&self) -> &[u8] {
    self.key.as_ref()
  }
}

impl SymmetricKey<V4> {
  /// Serializes this key in the PASERK-adjacent `k4.local.<base64url>` wire format.
  pub fn serialize(&self) -> String {
    format!("k4.local.{}", base64url::encode(self.key.as_ref()))
  }

  /// Parses a key previously produced by [`Self::serialize`].
  pub fn try_from_serialized(value: impl AsRef<str> + Display) -> Result<Self, PasetoError> {
    let encoded = value.as_ref().strip_prefix("k4.local.").ok_or(PasetoError::InvalidKey)?;
    let raw = base64url::decode(encoded.as_bytes()).map_err(|_| PasetoError::InvalidKey)?;
    if raw.len() != 32 {
      return Err(PasetoError::InvalidKey);
    }
    Ok(Self::from(Key::<32>::from(raw.as_slice())))
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn round_trips_through_serialized_form() {
    let key = SymmetricKey::<V4>::from(Key::<32>::from(*b"this-is-a-32-byte-symmetric-key!"));
    let serialized = key.serialize();
    assert!(serialized.starts_with("k4.local."));

    let parsed = SymmetricKey::<V4>::try_from_serialized(&serialized).expect("round-trip should parse");
    assert_eq!(parsed.as_ref(), key.as_ref());
  }

  #[test]
  fn rejects_wrong_purpose_prefix() {
    let public = format!("k4.public.{}", base64url::encode(&[0u8; 32]));
    assert_eq!(SymmetricKey::<V4>::try_from_serialized(&public), Err(PasetoError::InvalidKey));

    let secret = format!("k4.secret.{}", base64url::encode(&[0u8; 64]));
    assert_eq!(SymmetricKey::<V4>::try_from_serialized(&secret), Err(PasetoError::InvalidKey));
  }

  #[test]
  fn rejects_wrong_length_payload() {
    let too_short = format!("k4.local.{}", base64url::encode(&[0u8; 16]));
    assert_eq!(SymmetricKey::<V4>::try_from_serialized(&too_short), Err(PasetoError::InvalidKey));

    let too_long = format!("k4.local.{}", base64url::encode(&[0u8; 64]));
    assert_eq!(SymmetricKey::<V4>::try_from_serialized(&too_long), Err(PasetoError::InvalidKey));
  }

  #[test]
  fn rejects_garbage_input() {
    assert_eq!(SymmetricKey::<V4>::try_from_serialized("not-a-paseto-key"), Err(PasetoError::InvalidKey));
  }
}
