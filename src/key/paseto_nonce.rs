use super::Key;
#[cfg(feature = "v2")]
use crate::version::V2;
use crate::version::V4;
use std::convert::AsRef;
use std::marker::PhantomData;
use std::ops::Deref;

/// A nonce used by `{version}.local` encryption.
///
/// `v2.local` nonces are 24 bytes; `v4.local` nonces are 32 bytes. Both may
/// be supplied directly for testing or drawn from the system CSPRNG in
/// production via [`Key::try_new_random`](super::Key::try_new_random).
pub struct Nonce<'a, Version> {
  version: PhantomData<Version>,
  key: &'a [u8],
}

impl<Version> Deref for Nonce<'_, Version> {
  type Target = [u8];
  fn deref(&self) -> &Self::Target {
    self.key
  }
}

impl<Version> AsRef<[u8]> for Nonce<'_, Version> {
  fn as_ref(&self) -> &[u8] {
    self.key
  }
}

#[cfg(feature = "v2")]
impl<'a> From<&'a Key<24>> for Nonce<'a, V2> {
  fn from(key: &'a Key<24>) -> Self {
    Self {
      version: PhantomData,
      key: key.as_ref(),
    }
  }
}

impl<'a> From<&'a Key<32>> for Nonce<'a, V4> {
  fn from(key: &'a Key<32>) -> Self {
    Self {
      version: PhantomData,
      key: key.as_ref(),
    }
  }
}

#[cfg(all(test, feature = "v4_local"))]
mod unit_tests {
  use super::Nonce;
  use crate::key::Key;
  use crate::version::V4;

  #[test]
  fn wraps_the_underlying_bytes() {
    let key = Key::<32>::from(b"wubbalubbadubdubwubbalubbadubdub");
    let nonce = Nonce::<V4>::from(&key);
    assert_eq!(nonce.as_ref().len(), 32);
  }
}
