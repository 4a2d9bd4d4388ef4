#![cfg(feature = "v4_public")]
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use crate::{Footer, Header, ImplicitAssertion, Paseto, SecretKey, PublicKey, PasetoError, Public, V4};
use crate::common::{PreAuthenticationEncoding, RawPayload};

impl<'a> Paseto<'a, V4, Public> {
    pub fn try_verify(
        signature: &'a str,
        public_key: &PublicKey<V4>,
        footer: impl Into<Option<Footer<'a>>> + Copy,
        implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>> + Copy,
    ) -> Result<Vec<u8>, PasetoError> {
        // V4 public token structure: message (variable) + signature (64 bytes)
        let sig_len = ed25519_dalek::SIGNATURE_LENGTH;

        let decoded_payload = Self::parse_raw_token(signature, footer, &V4::default(), &Public::default())?;

        // Validate minimum payload size (at least signature length)
        if decoded_payload.len() < sig_len {
            return Err(PasetoError::BadInput);
        }

        let key_bytes = <&[u8; 32]>::try_from(public_key.as_ref()).map_err(|_| PasetoError::InvalidKey)?;
        let verifying_key = VerifyingKey::from_bytes(key_bytes).map_err(|_| PasetoError::InvalidKey)?;

        // Safe slicing with bounds-checked access
        let msg_len = decoded_payload.len().saturating_sub(sig_len);
        let msg = decoded_payload.get(..msg_len).ok_or(PasetoError::BadInput)?;
        let sig = decoded_payload.get(msg_len..msg_len + sig_len).ok_or(PasetoError::BadInput)?;

        let signature = Signature::try_from(sig).map_err(|_| PasetoError::BadInput)?;
        let pae = PreAuthenticationEncoding::parse(&[
            &Header::<V4, Public>::default(),
            msg,
            &footer.into().unwrap_or_default(),
            &implicit_assertion.into().unwrap_or_default(),
        ]);

        verifying_key.verify(&pae, &signature).map_err(|_| PasetoError::AuthFail)?;

        Ok(msg.to_vec())
    }

    pub fn try_sign(&mut self, key: &SecretKey<V4>) -> Result<String, PasetoError> {
        let footer = self.footer.unwrap_or_default();
        let assertion = self.implicit_assertion.unwrap_or_default();
        let key_bytes = <&[u8; 64]>::try_from(key.as_ref()).map_err(|_| PasetoError::InvalidKey)?;
        let signing_key = SigningKey::from_keypair_bytes(key_bytes).map_err(|_| PasetoError::InvalidKey)?;

        let pae = PreAuthenticationEncoding::parse(&[&self.header, &self.payload, &footer, &assertion]);

        let signature = signing_key.sign(&pae);

        let raw_payload = RawPayload::<V4, Public>::from(&self.payload, &signature.to_bytes());

        Ok(self.format_token(&raw_payload))
    }
}
