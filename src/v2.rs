//! Plain-function surface over `v2.local` and `v2.public` tokens.
//!
//! This is the entry point most callers want; [`crate::Paseto`] underneath
//! is an implementation detail shared with [`crate::v4`].
#![cfg(any(feature = "v2_local", feature = "v2_public"))]

use crate::version::V2;
use crate::{Footer, Paseto, PasetoError, Payload};

#[cfg(feature = "v2_local")]
use crate::{Key, Local, Nonce, SymmetricKey};

#[cfg(feature = "v2_public")]
use crate::{Public, PublicKey, SecretKey};

/// Encrypts `payload` into a `v2.local` token under `key`.
///
/// Draws a fresh 24-byte nonce seed from the system CSPRNG on every call, so
/// the same payload never produces the same token twice.
#[cfg(feature = "v2_local")]
pub fn encrypt<'a>(
  payload: &'a [u8],
  key: &SymmetricKey<V2>,
  footer: impl Into<Option<Footer<'a>>>,
) -> Result<String, PasetoError> {
  let seed = Key::<24>::try_new_random()?;
  let nonce = Nonce::<V2>::from(&seed);
  encrypt_with_nonce(payload, key, &nonce, footer)
}

/// Encrypts `payload` into a `v2.local` token under the caller-supplied `nonce`.
///
/// This exists for reproducing published test vectors, which fix the nonce to
/// check the token byte-for-byte; it is not a recommended production path
/// since a reused nonce and key pair breaks `v2.local`'s security argument.
#[cfg(feature = "v2_local")]
pub fn encrypt_with_nonce<'a>(
  payload: &'a [u8],
  key: &SymmetricKey<V2>,
  nonce: &Nonce<V2>,
  footer: impl Into<Option<Footer<'a>>>,
) -> Result<String, PasetoError> {
  log::debug!("encrypting v2.local token");
  let mut builder = Paseto::<V2, Local>::builder();
  builder.set_payload(Payload::from(payload));
  if let Some(footer) = footer.into() {
    builder.set_footer(footer);
  }
  let result = builder.try_encrypt(key, nonce);
  if let Err(ref err) = result {
    log::warn!("v2.local encrypt failed: {err:?}");
  }
  result
}

/// Decrypts a `v2.local` token, verifying the AEAD tag and the asserted footer.
#[cfg(feature = "v2_local")]
pub fn decrypt<'a>(
  token: &'a str,
  key: &SymmetricKey<V2>,
  footer: impl Into<Option<Footer<'a>>> + Copy,
) -> Result<Vec<u8>, PasetoError> {
  log::debug!("decrypting v2.local token");
  let result = Paseto::<V2, Local>::try_decrypt(token, key, footer);
  if let Err(ref err) = result {
    log::warn!("v2.local decrypt failed: {err:?}");
  }
  result
}

/// Signs `payload` into a `v2.public` token with `secret_key`.
#[cfg(feature = "v2_public")]
pub fn sign<'a>(
  payload: &'a [u8],
  secret_key: &SecretKey<V2>,
  footer: impl Into<Option<Footer<'a>>>,
) -> Result<String, PasetoError> {
  log::debug!("signing v2.public token");
  let mut builder = Paseto::<V2, Public>::builder();
  builder.set_payload(Payload::from(payload));
  if let Some(footer) = footer.into() {
    builder.set_footer(footer);
  }
  let result = builder.try_sign(secret_key);
  if let Err(ref err) = result {
    log::warn!("v2.public sign failed: {err:?}");
  }
  result
}

/// Verifies a `v2.public` token with `public_key`, returning the signed payload.
#[cfg(feature = "v2_public")]
pub fn verify<'a>(
  token: &'a str,
  public_key: &PublicKey<V2>,
  footer: impl Into<Option<Footer<'a>>> + Copy,
) -> Result<Vec<u8>, PasetoError> {
  log::debug!("verifying v2.public token");
  let result = Paseto::<V2, Public>::try_verify(token, public_key, footer);
  if let Err(ref err) = result {
    log::warn!("v2.public verify failed: {err:?}");
  }
  result
}
