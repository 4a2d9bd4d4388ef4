#![cfg(feature = "v2_public")]
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use crate::{Footer, Header, Paseto, SecretKey, PublicKey, PasetoError, Public, V2};
use crate::common::{PreAuthenticationEncoding, RawPayload};

impl<'a> Paseto<'a, V2, Public> {
    /// Attempts to verify a signed V2 Public Paseto
    /// Fails with a PasetoError if the token is malformed or the token cannot be verified with the
    /// passed public key
    pub fn try_verify(
        signature: &'a str,
        public_key: &PublicKey<V2>,
        footer: impl Into<Option<Footer<'a>>> + Copy,
    ) -> Result<Vec<u8>, PasetoError> {
        // V2 public token structure: message (variable) + signature (64 bytes)
        let sig_len = ed25519_dalek::SIGNATURE_LENGTH;

        let decoded_payload = Self::parse_raw_token(signature, footer, &V2::default(), &Public::default())?;

        // Validate minimum payload size (at least signature length)
        if decoded_payload.len() < sig_len {
            return Err(PasetoError::BadInput);
        }

        let key_bytes = <&[u8; 32]>::try_from(public_key.as_ref()).map_err(|_| PasetoError::InvalidKey)?;
        let verifying_key = VerifyingKey::from_bytes(key_bytes).map_err(|_| PasetoError::InvalidKey)?;

        // Safe slicing with bounds-checked access
        let msg_len = decoded_payload.len().saturating_sub(sig_len);
        let msg = decoded_payload.get(..msg_len).ok_or(PasetoError::BadInput)?;
        let sig_end = msg_len
            .checked_add(sig_len)
            .ok_or(PasetoError::BadInput)?;
        let sig = decoded_payload.get(msg_len..sig_end).ok_or(PasetoError::BadInput)?;

        let signature = Signature::try_from(sig).map_err(|_| PasetoError::BadInput)?;
        let pae = PreAuthenticationEncoding::parse(&[
            &Header::<V2, Public>::default(),
            msg,
            &footer.into().unwrap_or_default(),
        ]);

        verifying_key.verify(&pae, &signature).map_err(|_| PasetoError::AuthFail)?;

        Ok(msg.to_vec())
    }

    /// Attempts to sign a V2 Public Paseto
    /// Fails with a PasetoError if the token is malformed or the private key can't be parsed
    pub fn try_sign(&mut self, key: &SecretKey<V2>) -> Result<String, PasetoError> {
        let footer = self.footer.unwrap_or_default();

        let key_bytes = <&[u8; 64]>::try_from(key.as_ref()).map_err(|_| PasetoError::InvalidKey)?;
        let signing_key = SigningKey::from_keypair_bytes(key_bytes).map_err(|_| PasetoError::InvalidKey)?;

        let pae = PreAuthenticationEncoding::parse(&[&self.header, &self.payload, &footer]);

        let signature = signing_key.sign(&pae);
        let raw_payload = RawPayload::<V2, Public>::from(&self.payload, &signature.to_bytes());

        Ok(self.format_token(&raw_payload))
    }
}
