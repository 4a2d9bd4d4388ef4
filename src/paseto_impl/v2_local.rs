#![cfg(feature = "v2_local")]
use blake2::Blake2bMac;
use blake2::digest::{FixedOutput, Mac};
use chacha20poly1305::XNonce;
use crate::{Footer, Header, Local, Paseto, PasetoError, Nonce, SymmetricKey, V2};
use crate::common::{CipherText, PreAuthenticationEncoding, RawPayload};
impl<'a> Paseto<'a, V2, Local> {
    /// Decrypts a `v2.local` token, verifying its footer and AEAD tag.
    pub fn try_decrypt(
        token: &'a str,
        key: &SymmetricKey<V2>,
        footer: impl Into<Option<Footer<'a>>> + Copy,
    ) -> Result<Vec<u8>, PasetoError> {
        //get footer

        let decoded_payload = Self::parse_raw_token(token, footer, &V2::default(), &Local::default())?;
        if decoded_payload.len() < 24 {
            return Err(PasetoError::BadInput);
        }
        let (nonce, ciphertext) = decoded_payload.split_at(24);

        //pack preauth
        let pae = &PreAuthenticationEncoding::parse(&[
            &Header::<V2, Local>::default(),
            nonce,
            &footer.into().unwrap_or_default(),
        ]);

        //create the nonce
        let nonce = XNonce::from_slice(nonce);

        //encrypt payload
        let ciphertext = CipherText::<V2, Local>::try_decrypt_from(key, nonce, ciphertext, pae)?;

        //return decrypted payload
        Ok(ciphertext.to_vec())
    }

    /// Encrypts a payload into a `v2.local` token, hashing the plaintext into the nonce.
    pub fn try_encrypt(
        &self,
        key: &SymmetricKey<V2>,
        nonce: &Nonce<V2>,
    ) -> Result<String, PasetoError> {
        //setup
        let footer = self.footer.unwrap_or_default();

        //create the blake2 context to generate the nonce
        let mut blake2 = Blake2bMac::new_from_slice(nonce.as_ref()).map_err(|_| PasetoError::InvalidKey)?;
        blake2.update(&self.payload);
        let mut context = [0u8; 24];
        blake2.finalize_into((&mut context).into());

        //create the nonce
        let nonce = XNonce::from_slice(&context);

        //pack preauth
        let pae = PreAuthenticationEncoding::parse(&[&self.header, nonce, &footer]);

        //encrypt payload
        let ciphertext = CipherText::<V2, Local>::try_from(key, nonce, &self.payload, &pae)?;

        //generate appended and base64 encoded payload
        let raw_payload = RawPayload::<V2, Local>::from(&context, &ciphertext);

        //format as paseto with header and optional footer
        Ok(self.format_token(&raw_payload))
    }
}
