#![allow(unused)]
pub mod cipher_text;
mod encryption_key;
mod tag;
mod raw_payload;
mod authentication_key;
mod authentication_key_separator;
mod encryption_key_separator;
mod pre_authentication_encoding;
mod encryption_key_impl;
mod tag_impl;
mod raw_payload_impl;
mod authentication_key_impl;
mod cipher_text_impl;

pub(crate) use encryption_key::EncryptionKey;
pub use raw_payload::RawPayload;
pub use pre_authentication_encoding::PreAuthenticationEncoding;
pub(crate) use cipher_text::CipherText;
pub(crate) use authentication_key::AuthenticationKey;
pub(crate) use authentication_key_separator::AuthenticationKeySeparator;
pub(crate) use encryption_key_separator::EncryptionKeySeparator;
pub use tag::Tag;
