//! Secure stateless [PASETO: Platform-Agnostic Security Tokens](https://github.com/paseto-standard/paseto-spec)
//!
//! This crate implements the `v2` and `v4` PASETO versions, both the
//! `local` (symmetric authenticated encryption) and `public`
//! (asymmetric signature) purposes. It covers the protocol's
//! cryptographic core only: encoding, decoding, and authenticating a
//! token's header, payload, and optional footer. It does not interpret
//! the payload, so there is no claims model, no builder DSL, and no
//! expiration checking — callers own what goes inside the token and
//! decide what to do with the bytes they get back.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "v4_local")]
//! # {
//! use paseto_core::prelude::*;
//!
//! let key = SymmetricKey::<V4>::from(Key::<32>::try_from(
//!   "707172737475767778797a7b7c7d7e7f808182838485868788898a8b8c8d8e8f",
//! )?);
//!
//! let payload = b"this is a secret message";
//! let token = v4::encrypt(payload, &key, None, None)?;
//! let decrypted = v4::decrypt(&token, &key, None, None)?;
//! assert_eq!(decrypted, payload);
//! # }
//! # Ok::<(), paseto_core::PasetoError>(())
//! ```

mod base64url;
mod common;
mod error;
mod footer;
mod header;
mod implicit_assertion;
mod key;
mod paseto;
mod paseto_impl;
mod payload;
mod purpose;
mod traits;
mod untrusted_token;
mod version;

pub mod v2;
pub mod v4;

pub use error::PasetoError;
pub use footer::Footer;
pub use implicit_assertion::ImplicitAssertion;
pub use key::{Key, Nonce, PublicKey, SecretKey, SymmetricKey};
pub use purpose::{Local, Public};
pub use untrusted_token::UntrustedToken;
pub use version::*;

pub(crate) use header::Header;
pub(crate) use paseto::Paseto;
pub(crate) use payload::Payload;
pub(crate) use traits::Base64Encodable;
pub use traits::{ImplicitAssertionCapable, PurposeTrait, VersionTrait};

/// Everything most callers need in one `use`.
pub mod prelude {
  pub use crate::error::PasetoError;
  pub use crate::footer::Footer;
  pub use crate::implicit_assertion::ImplicitAssertion;
  pub use crate::key::{Key, Nonce, PublicKey, SecretKey, SymmetricKey};
  pub use crate::purpose::{Local, Public};
  pub use crate::untrusted_token::UntrustedToken;
  #[cfg(any(feature = "v2_local", feature = "v2_public"))]
  pub use crate::v2;
  pub use crate::v4;
  pub use crate::version::*;
}
