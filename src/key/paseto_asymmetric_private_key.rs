use super::Key;
use crate::base64url;
use crate::version::V4;
use crate::PasetoError;
use std::convert::{AsRef, From};
use std::fmt::Display;
use std::marker::PhantomData;

/// The secret half of a `{version}.public` Ed25519 key pair.
///
/// Keys are created from a 64-byte [Key] holding the concatenation of the
/// seed and its derived public key, matching the `ed25519-dalek` keypair
/// encoding.
pub struct SecretKey<'a, Version> {
  version: PhantomData<Version>,
  key: &'a [u8],
}

impl<Version> AsRef<[u8]> for SecretKey<'_, Version> {
  fn as_ref(&self) -> &[u8] {
    self.key
  }
}

impl<'a, Version> From<&'a Key<64>> for SecretKey<'a, Version> {
  fn from(key: &'a Key<64>) -> Self {
    Self {
      version: PhantomData,
      key: key.as_ref(),
    }
  }
}

impl<'a> SecretKey<'a, V4> {
  /// Serializes this key in the PASERK-adjacent `k4.secret.<base64url>` wire format.
  pub fn serialize(&self) -> String {
    format!("k4.secret.{}", base64url::encode(self.key))
  }

  /// Parses a key previously produced by [`Self::serialize`] into an owned 64-byte [Key].
  pub fn try_from_serialized(value: impl AsRef<str> + Display) -> Result<Key<64>, PasetoError> {
    let encoded = value.as_ref().strip_prefix("k4.secret.").ok_or(PasetoError::InvalidKey)?;
    let raw = base64url::decode(encoded.as_bytes()).map_err(|_| PasetoError::InvalidKey)?;
    if raw.len() != 64 {
      return Err(PasetoError::InvalidKey);
    }
    Ok(Key::<64>::from(raw.as_slice()))
  }
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn round_trips_through_serialized_form() {
    let raw = Key::<64>::from(*b"this-is-a-64-byte-secret-key-seed-plus-its-derived-public-half!!");
    let key = SecretKey::<V4>::from(&raw);
    let serialized = key.serialize();
    assert!(serialized.starts_with("k4.secret."));

    let parsed = SecretKey::<V4>::try_from_serialized(&serialized).expect("round-trip should parse");
    assert_eq!(parsed.as_ref(), raw.as_ref());
  }

  #[test]
  fn rejects_wrong_purpose_prefix() {
    let local = format!("k4.local.{}", base64url::encode(&[0u8; 32]));
    assert_eq!(SecretKey::<V4>::try_from_serialized(&local), Err(PasetoError::InvalidKey));

    let public = format!("k4.public.{}", base64url::encode(&[0u8; 32]));
    assert_eq!(SecretKey::<V4>::try_from_serialized(&public), Err(PasetoError::InvalidKey));
  }

  #[test]
  fn rejects_wrong_length_payload() {
    let too_short = format!("k4.secret.{}", base64url::encode(&[0u8; 32]));
    assert_eq!(SecretKey::<V4>::try_from_serialized(&too_short), Err(PasetoError::InvalidKey));
  }
}
