use std::{
    str,
};
use crate::{Base64Encodable, Footer, Header, ImplicitAssertion, ImplicitAssertionCapable, PasetoError, Payload, PurposeTrait, VersionTrait};


/// Builds and encrypts/decrypts a core PASETO token.
///
/// Given a [Payload], optional [Footer] and optional [ImplicitAssertion] ([V4] only)
/// returns an encrypted token when [Local] is specified as the purpose or a signed token when
/// [Public] is specified. This is the internal engine behind the `v2`/`v4` module functions;
/// callers should reach for those instead of this builder directly.
#[derive(Default, Copy, Clone)]
pub struct Paseto<'a, Version, Purpose>
    where
        Version: VersionTrait,
        Purpose: PurposeTrait,
{
    pub(crate) header: Header<Version, Purpose>,
    pub(crate) payload: Payload<'a>,
    pub(crate) footer: Option<Footer<'a>>,
    pub(crate) implicit_assertion: Option<ImplicitAssertion<'a>>,
}

impl<'a, Version: VersionTrait, Purpose: PurposeTrait> Paseto<'a, Version, Purpose> {
    /// Returns a builder for creating a PASETO token.
    pub fn builder() -> Paseto<'a, Version, Purpose> {
        Self { ..Default::default() }
    }

    /// Sets the payload for the token
    pub fn set_payload(&mut self, payload: Payload<'a>) -> &mut Self {
        self.payload = payload;
        self
    }

    /// Sets an optional footer for the token.
    pub fn set_footer(&mut self, footer: Footer<'a>) -> &mut Self {
        self.footer = Some(footer);
        self
    }

    /* BEGIN PRIVATE FUNCTIONS */
    pub(crate) fn format_token(&self, encrypted_payload: &str) -> String {
        let footer = self.footer.map(|f| f.encode());
        match footer {
            Some(f) => format!("{}{}.{}", self.header, encrypted_payload, f),
            None => format!("{}{}", self.header, encrypted_payload),
        }
    }

    pub(crate) fn parse_raw_token(
        raw_token: &'a str,
        footer: impl Into<Option<Footer<'a>>> + Copy,
        v: &Version,
        p: &Purpose,
    ) -> Result<Vec<u8>, PasetoError> {
        //split the raw token into parts
        let potential_parts = raw_token.split('.').collect::<Vec<_>>();
        //inspect the parts
        match potential_parts.len() {
            length if !(3..=4).contains(&length) => {
                return Err(PasetoError::BadInput);
            }
            4 => {
                //verify expected footer
                let footer = footer.into().unwrap_or_default();
                if !footer.constant_time_equals(potential_parts[3].as_bytes()) {
                    return Err(PasetoError::InvalidFooter);
                }
            }
            _ => {}
        }

        //grab the header
        let potential_header = format!("{}.{}.", potential_parts[0], potential_parts[1]);
        //we should be able to verify the header using the passed in Version and Purpose
        let expected_header = format!("{}.{}.", v, p);

        //verify the header
        if potential_header.ne(&expected_header) {
            return Err(PasetoError::InvalidHeader);
        };

        let encrypted_payload = Payload::from(potential_parts[2]);
        Ok(encrypted_payload.decode()?)
    }
    /* END PRIVATE FUNCTIONS */
}

impl<'a, Version, Purpose> Paseto<'a, Version, Purpose>
    where
        Purpose: PurposeTrait,
        Version: ImplicitAssertionCapable,
{
    /// Sets an optional [ImplicitAssertion] for the token.
    ///
    /// *NOTE:* Only for [V4] tokens.
    pub fn set_implicit_assertion(&mut self, implicit_assertion: ImplicitAssertion<'a>) -> &mut Self {
        self.implicit_assertion = Some(implicit_assertion);
        self
    }
}
















