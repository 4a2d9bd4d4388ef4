use thiserror::Error;

/// The closed set of ways a PASETO operation can fail.
///
/// No variant carries plaintext, key material, or a decrypted-but-unverified
/// value — a caller can discriminate *why* an operation failed but never
/// recover anything from the failed attempt itself.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PasetoError {
  /// The token does not start with the expected `v{version}.{purpose}.` literal.
  #[error("token does not start with the expected version/purpose header")]
  InvalidHeader,
  /// The caller-asserted footer does not match the token's trailing segment.
  #[error("asserted footer does not match the token's footer")]
  InvalidFooter,
  /// The v4.local BLAKE2b authentication tag did not match.
  #[error("v4 authentication tag verification failed")]
  InvalidMac,
  /// The v2.local AEAD tag, or an Ed25519 signature, failed to verify.
  #[error("authenticated decryption or signature verification failed")]
  AuthFail,
  /// The key's serialized version/purpose prefix didn't match the operation,
  /// or a raw key was the wrong length.
  #[error("key is not valid for the requested operation")]
  InvalidKey,
  /// Malformed base64 length, a token with the wrong number of segments, or
  /// any other structural fault in the input.
  #[error("input is structurally malformed")]
  BadInput,
}
