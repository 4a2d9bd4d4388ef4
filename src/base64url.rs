//! RFC 4648 §5 URL-safe base64 without padding.
//!
//! The wire format never carries `=` padding; decoding reconstructs it from
//! the input length modulo 4. Residue 1 is not a legal base64 length and is
//! rejected before the decoder ever sees the bytes.

use crate::error::PasetoError;
use base64::prelude::*;

pub fn encode(bytes: &[u8]) -> String {
  BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

/// Number of `=` characters a standard base64 decoder would expect for an
/// unpadded input of the given length. Residue 1 can never occur for valid
/// base64 and is rejected.
pub fn padding_size(len: usize) -> Result<usize, PasetoError> {
  match len % 4 {
    0 => Ok(0),
    2 => Ok(2),
    3 => Ok(1),
    _ => Err(PasetoError::BadInput),
  }
}

pub fn decode(input: &[u8]) -> Result<Vec<u8>, PasetoError> {
  padding_size(input.len())?;
  BASE64_URL_SAFE_NO_PAD.decode(input).map_err(|_| PasetoError::BadInput)
}

#[cfg(test)]
mod unit_tests {
  use super::*;

  #[test]
  fn encodes_rfc4648_example() {
    assert_eq!(encode(b"foobar"), "Zm9vYmFy");
  }

  #[test]
  fn decodes_without_padding() {
    assert_eq!(decode(b"Zm8").unwrap(), b"fo");
  }

  #[test]
  fn round_trips_arbitrary_length() {
    for payload in [&b""[..], b"a", b"ab", b"abc", b"abcd", b"abcde"] {
      let encoded = encode(payload);
      assert_eq!(decode(encoded.as_bytes()).unwrap(), payload);
    }
  }

  #[test]
  fn rejects_residue_one() {
    assert!(matches!(padding_size(1), Err(PasetoError::BadInput)));
    assert!(matches!(padding_size(5), Err(PasetoError::BadInput)));
  }

  #[test]
  fn accepts_legal_residues() {
    assert_eq!(padding_size(0).unwrap(), 0);
    assert_eq!(padding_size(2).unwrap(), 2);
    assert_eq!(padding_size(3).unwrap(), 1);
  }

  proptest::proptest! {
    #[test]
    fn round_trips_any_byte_string(bytes in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..256)) {
      let encoded = encode(&bytes);
      assert!(!encoded.contains('='));
      assert_eq!(decode(encoded.as_bytes()).unwrap(), bytes);
    }
  }
}
