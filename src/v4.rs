//! Plain-function surface over `v4.local` and `v4.public` tokens.
//!
//! This is the entry point most callers want; [`crate::Paseto`] underneath
//! is an implementation detail shared with [`crate::v2`].
#![cfg(any(feature = "v4_local", feature = "v4_public"))]

use crate::version::V4;
use crate::{Footer, ImplicitAssertion, Key, Paseto, PasetoError, Payload};

#[cfg(feature = "v4_local")]
use crate::{Local, Nonce, SymmetricKey};

#[cfg(feature = "v4_public")]
use crate::{Public, PublicKey, SecretKey};
#[cfg(feature = "v4_public")]
use ed25519_dalek::SigningKey;

/// Encrypts `payload` into a `v4.local` token under `key`.
///
/// Draws a fresh 32-byte nonce from the system CSPRNG on every call.
#[cfg(feature = "v4_local")]
pub fn encrypt<'a>(
  payload: &'a [u8],
  key: &SymmetricKey<V4>,
  footer: impl Into<Option<Footer<'a>>>,
  implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
) -> Result<String, PasetoError> {
  let seed = Key::<32>::try_new_random()?;
  let nonce = Nonce::<V4>::from(&seed);
  encrypt_with_nonce(payload, key, &nonce, footer, implicit_assertion)
}

/// Encrypts `payload` into a `v4.local` token under the caller-supplied `nonce`.
///
/// This exists for reproducing published test vectors, which fix the nonce to
/// check the token byte-for-byte; it is not a recommended production path
/// since a reused nonce and key pair breaks `v4.local`'s security argument.
#[cfg(feature = "v4_local")]
pub fn encrypt_with_nonce<'a>(
  payload: &'a [u8],
  key: &SymmetricKey<V4>,
  nonce: &Nonce<V4>,
  footer: impl Into<Option<Footer<'a>>>,
  implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
) -> Result<String, PasetoError> {
  log::debug!("encrypting v4.local token");
  let mut builder = Paseto::<V4, Local>::builder();
  builder.set_payload(Payload::from(payload));
  if let Some(footer) = footer.into() {
    builder.set_footer(footer);
  }
  if let Some(assertion) = implicit_assertion.into() {
    builder.set_implicit_assertion(assertion);
  }
  let result = builder.try_encrypt(key, nonce);
  if let Err(ref err) = result {
    log::warn!("v4.local encrypt failed: {err:?}");
  }
  result
}

/// Decrypts a `v4.local` token, verifying the BLAKE2b tag, footer and
/// implicit assertion.
#[cfg(feature = "v4_local")]
pub fn decrypt<'a>(
  token: &'a str,
  key: &SymmetricKey<V4>,
  footer: impl Into<Option<Footer<'a>>> + Copy,
  implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>> + Copy,
) -> Result<Vec<u8>, PasetoError> {
  log::debug!("decrypting v4.local token");
  let result = Paseto::<V4, Local>::try_decrypt(token, key, footer, implicit_assertion);
  if let Err(ref err) = result {
    log::warn!("v4.local decrypt failed: {err:?}");
  }
  result
}

/// Signs `payload` into a `v4.public` token with `secret_key`.
#[cfg(feature = "v4_public")]
pub fn sign<'a>(
  payload: &'a [u8],
  secret_key: &SecretKey<V4>,
  footer: impl Into<Option<Footer<'a>>>,
  implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>>,
) -> Result<String, PasetoError> {
  log::debug!("signing v4.public token");
  let mut builder = Paseto::<V4, Public>::builder();
  builder.set_payload(Payload::from(payload));
  if let Some(footer) = footer.into() {
    builder.set_footer(footer);
  }
  if let Some(assertion) = implicit_assertion.into() {
    builder.set_implicit_assertion(assertion);
  }
  let result = builder.try_sign(secret_key);
  if let Err(ref err) = result {
    log::warn!("v4.public sign failed: {err:?}");
  }
  result
}

/// Verifies a `v4.public` token with `public_key`, returning the signed payload.
#[cfg(feature = "v4_public")]
pub fn verify<'a>(
  token: &'a str,
  public_key: &PublicKey<V4>,
  footer: impl Into<Option<Footer<'a>>> + Copy,
  implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>> + Copy,
) -> Result<Vec<u8>, PasetoError> {
  log::debug!("verifying v4.public token");
  let result = Paseto::<V4, Public>::try_verify(token, public_key, footer, implicit_assertion);
  if let Err(ref err) = result {
    log::warn!("v4.public verify failed: {err:?}");
  }
  result
}

/// Generates a fresh random `v4.local` symmetric key from the system CSPRNG.
#[cfg(feature = "v4_local")]
pub fn create_symmetric_key() -> Result<SymmetricKey<V4>, PasetoError> {
  Ok(SymmetricKey::from(Key::<32>::try_new_random()?))
}

/// Generates a fresh random `v4.public` Ed25519 key pair, returned as raw key
/// material `(public, secret)`.
///
/// Wrap the results with `PublicKey::from(&public)` and `SecretKey::from(&secret)`
/// before signing or verifying.
#[cfg(feature = "v4_public")]
pub fn create_asymmetric_key() -> Result<(Key<32>, Key<64>), PasetoError> {
  let seed = Key::<32>::try_new_random()?;
  let seed_bytes: [u8; 32] = seed.as_ref().try_into().map_err(|_| PasetoError::InvalidKey)?;
  let signing_key = SigningKey::from_bytes(&seed_bytes);
  let public = Key::<32>::from(*signing_key.verifying_key().as_bytes());
  let secret = Key::<64>::from(signing_key.to_keypair_bytes());
  Ok((public, secret))
}
