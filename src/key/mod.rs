mod keys;
mod paseto_asymmetric_private_key;
mod paseto_asymmetric_public_key;
mod paseto_nonce;
mod paseto_symmetric_key;

pub use keys::Key;
pub use paseto_asymmetric_private_key::SecretKey;
pub use paseto_asymmetric_public_key::PublicKey;
pub use paseto_nonce::Nonce;
pub use paseto_symmetric_key::SymmetricKey;
