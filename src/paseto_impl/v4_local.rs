#![cfg(feature = "v4_local")]

use subtle::ConstantTimeEq;

use crate::{Footer, Header, ImplicitAssertion, Key, Local, Paseto, PasetoError, Nonce, SymmetricKey, V4};
use crate::common::{AuthenticationKey, AuthenticationKeySeparator, CipherText, EncryptionKey, EncryptionKeySeparator, PreAuthenticationEncoding, RawPayload, Tag};

impl<'a> Paseto<'a, V4, Local> {
    /// Decrypts a `v4.local` token: split-derives `Ek`/`Ak` from the embedded nonce,
    /// verifies the BLAKE2b tag, then removes the XChaCha20 keystream.
    pub fn try_decrypt(
        token: &'a str,
        key: &SymmetricKey<V4>,
        footer: impl Into<Option<Footer<'a>>> + Copy,
        implicit_assertion: impl Into<Option<ImplicitAssertion<'a>>> + Copy,
    ) -> Result<Vec<u8>, PasetoError> {
        // V4 local token structure: nonce (32 bytes) + ciphertext (variable) + tag (32 bytes)
        const NONCE_SIZE: usize = 32;
        const TAG_SIZE: usize = 32;
        const MIN_PAYLOAD_SIZE: usize = NONCE_SIZE + TAG_SIZE;

        let decoded_payload = Self::parse_raw_token(token, footer, &V4::default(), &Local::default())?;

        // Validate minimum payload size before slicing
        if decoded_payload.len() < MIN_PAYLOAD_SIZE {
            return Err(PasetoError::BadInput);
        }

        // Safe slicing with bounds-checked access
        let nonce_bytes = decoded_payload.get(..NONCE_SIZE).ok_or(PasetoError::BadInput)?;
        let nonce = Key::from(nonce_bytes);
        let nonce = Nonce::<V4>::from(&nonce);

        let authentication_key =
            AuthenticationKey::<V4, Local>::try_from(&(AuthenticationKeySeparator::default() + &nonce), key)?;
        let encryption_key = EncryptionKey::<V4, Local>::from(&(EncryptionKeySeparator::default() + &nonce), key);

        // Ciphertext is between nonce and tag
        let ciphertext_end = decoded_payload.len().saturating_sub(TAG_SIZE);
        let ciphertext = decoded_payload.get(NONCE_SIZE..ciphertext_end).ok_or(PasetoError::BadInput)?;

        //pack preauth
        let pae = PreAuthenticationEncoding::parse(&[
            &Header::<V4, Local>::default(),
            nonce.as_ref(),
            ciphertext,
            &footer.into().unwrap_or_default(),
            &implicit_assertion.into().unwrap_or_default(),
        ]);

        //generate tags - tag is the last TAG_SIZE bytes
        let tag_start = NONCE_SIZE + ciphertext.len();
        let tag = decoded_payload.get(tag_start..).ok_or(PasetoError::BadInput)?;
        let tag2 = Tag::<V4, Local>::try_from(authentication_key, &pae)?;
        //compare tags
        if !bool::from(tag.ct_eq(tag2.as_ref())) {
            return Err(PasetoError::InvalidMac);
        }

        //decrypt payload
        let ciphertext = CipherText::<V4, Local>::from(ciphertext, &encryption_key);

        //return decrypted payload
        Ok(ciphertext.to_vec())
    }

    /// Encrypts a payload into a `v4.local` token under the given nonce.
    pub fn try_encrypt(
        &mut self,
        key: &SymmetricKey<V4>,
        nonce: &Nonce<V4>,
    ) -> Result<String, PasetoError> {
        //setup
        let footer = self.footer.unwrap_or_default();
        let implicit_assertion = self.implicit_assertion.unwrap_or_default();

        //split key
        let authentication_key =
            AuthenticationKey::<V4, Local>::try_from(&(AuthenticationKeySeparator::default() + nonce), key)?;
        let encryption_key = EncryptionKey::<V4, Local>::from(&(EncryptionKeySeparator::default() + nonce), key);

        //encrypt payload
        let ciphertext = CipherText::<V4, Local>::from(&self.payload, &encryption_key);

        //pack preauth
        let pae =
            PreAuthenticationEncoding::parse(&[&self.header, nonce.as_ref(), &ciphertext, &footer, &implicit_assertion]);

        //generate tag
        let tag = Tag::<V4, Local>::try_from(authentication_key, &pae)?;

        //generate appended and base64 encoded payload
        let raw_payload = RawPayload::<V4, Local>::try_from(nonce, &ciphertext, &tag)?;

        //format as paseto with header and optional footer
        Ok(self.format_token(&raw_payload))
    }
}
