#![cfg(any(feature = "v4_local", feature = "v4_public"))]

use paseto_core::prelude::*;
use std::collections::HashMap;

#[cfg(feature = "v4_local")]
mod key_rotation_tests {
  use super::*;

  struct KeyStore {
    keys: HashMap<&'static str, SymmetricKey<V4>>,
  }

  impl KeyStore {
    fn new() -> Self {
      let mut keys = HashMap::new();
      keys.insert("key-1", SymmetricKey::<V4>::from(Key::<32>::from(*b"key1key1key1key1key1key1key1key1")));
      keys.insert("key-2", SymmetricKey::<V4>::from(Key::<32>::from(*b"key2key2key2key2key2key2key2key2")));
      Self { keys }
    }

    fn get(&self, kid: &str) -> Option<&SymmetricKey<V4>> {
      self.keys.get(kid)
    }
  }

  #[test]
  fn test_key_rotation_with_untrusted_footer() -> Result<(), PasetoError> {
    let key_store = KeyStore::new();

    let key1 = key_store.get("key-1").expect("key-1 should exist");
    let payload: &[u8] = b"sensitive information about alice";
    let footer = Footer::from("key-1");

    let token = v4::encrypt(payload, key1, footer, None)?;

    // Extract the footer from the untrusted token to pick a verification key.
    let untrusted = UntrustedToken::try_parse(&token)?;
    let kid = untrusted.footer_str()?.expect("footer should be present");
    assert_eq!(kid, "key-1");

    let selected_key = key_store.get(&kid).expect("key should exist in store");

    let decrypted = v4::decrypt(&token, selected_key, Footer::from(kid.as_str()), None)?;
    assert_eq!(decrypted, payload);
    Ok(())
  }

  #[test]
  fn test_key_rotation_with_second_key() -> Result<(), PasetoError> {
    let key_store = KeyStore::new();

    let key2 = key_store.get("key-2").expect("key-2 should exist");
    let payload: &[u8] = b"another secret about bob";
    let footer = Footer::from("key-2");

    let token = v4::encrypt(payload, key2, footer, None)?;

    let untrusted = UntrustedToken::try_parse(&token)?;
    let kid = untrusted.footer_str()?.expect("footer should be present");
    assert_eq!(kid, "key-2");

    let selected_key = key_store.get(&kid).expect("key should exist in store");
    let decrypted = v4::decrypt(&token, selected_key, Footer::from(kid.as_str()), None)?;
    assert_eq!(decrypted, payload);
    Ok(())
  }

  #[test]
  fn test_token_without_footer_returns_none() -> Result<(), PasetoError> {
    let key = SymmetricKey::<V4>::from(Key::<32>::from(*b"testkey_testkey_testkey_32bytes!"));
    let token = v4::encrypt(b"no footer here", &key, None, None)?;

    let untrusted = UntrustedToken::try_parse(&token)?;
    assert!(untrusted.footer_base64().is_none());
    assert!(untrusted.footer_str()?.is_none());
    Ok(())
  }

  #[test]
  fn test_footer_mismatch_fails_verification() -> Result<(), PasetoError> {
    let key = SymmetricKey::<V4>::from(Key::<32>::from(*b"testkey_testkey_testkey_32bytes!"));
    let footer = Footer::from("key-1");

    let token = v4::encrypt(b"secret", &key, footer, None)?;

    let untrusted = UntrustedToken::try_parse(&token)?;
    let extracted = untrusted.footer_str()?.expect("footer should be present");
    assert_eq!(extracted, "key-1");

    let wrong_footer = Footer::from("key-2");
    let result = v4::decrypt(&token, &key, wrong_footer, None);
    assert_eq!(result, Err(PasetoError::InvalidFooter));
    Ok(())
  }
}

#[cfg(feature = "v4_public")]
mod public_key_rotation_tests {
  use super::*;

  #[test]
  fn test_public_key_rotation_with_untrusted_footer() -> Result<(), PasetoError> {
    let private_key_bytes = Key::<64>::try_from("b4cbfb43df4ce210727d953e4a713307fa19bb7d9f85041438d9e11b942a37741eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2")?;
    let private_key = SecretKey::<V4>::from(&private_key_bytes);

    let public_key_bytes = Key::<32>::try_from("1eb9dbbbbc047c03fd70604e0071f0987e16b28b757225c11f00415d0e20b1a2")?;
    let public_key = PublicKey::<V4>::from(&public_key_bytes);

    let payload: &[u8] = b"signed message from charlie";
    let footer = Footer::from("signing-key-1");

    let token = v4::sign(payload, &private_key, footer, None)?;

    let untrusted = UntrustedToken::try_parse(&token)?;
    let kid = untrusted.footer_str()?.expect("footer should be present");
    assert_eq!(kid, "signing-key-1");

    let verified = v4::verify(&token, &public_key, Footer::from(kid.as_str()), None)?;
    assert_eq!(verified, payload);
    Ok(())
  }
}
