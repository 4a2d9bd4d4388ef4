use std::ops::Deref;

pub struct PreAuthenticationEncoding(Vec<u8>);

/// Performs Pre-Authentication Encoding (or PAE) as described in the
/// Paseto Specification v2.
///
impl PreAuthenticationEncoding {
    /// * `pieces` - The Pieces to concatenate, and encode together.
    /// Refactored from original code found at
    /// <https://github.com/instructure/paseto/blob/trunk/src/pae.rs>
    pub fn parse<'a>(pieces: &'a [&'a [u8]]) -> Self {
        let the_vec = PreAuthenticationEncoding::le64(pieces.len() as u64);

        Self(pieces.iter().fold(the_vec, |mut acc, piece| {
            acc.extend(PreAuthenticationEncoding::le64(piece.len() as u64));
            acc.extend(piece.iter());
            acc
        }))
    }
    /// Encodes a u64-bit unsigned integer into a little-endian binary string.
    ///
    /// * `to_encode` - The u8 to encode.
    /// Copied and gently refactored from <https://github.com/instructure/paseto/blob/trunk/src/pae.rs>
    pub(crate) fn le64(mut to_encode: u64) -> Vec<u8> {
        let mut the_vec = Vec::with_capacity(8);

        for _idx in 0..8 {
            the_vec.push((to_encode & 255) as u8);
            to_encode >>= 8;
        }

        the_vec
    }
}

impl Deref for PreAuthenticationEncoding {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.deref()
    }
}

impl AsRef<Vec<u8>> for PreAuthenticationEncoding {
    fn as_ref(&self) -> &Vec<u8> {
        &self.0
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_sequence_is_eight_zero_bytes() {
        let pae = PreAuthenticationEncoding::parse(&[]);
        assert_eq!(pae.deref(), &[0u8; 8]);
    }

    #[test]
    fn le64_is_little_endian() {
        assert_eq!(PreAuthenticationEncoding::le64(1), vec![1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(PreAuthenticationEncoding::le64(256), vec![0, 1, 0, 0, 0, 0, 0, 0]);
    }

    proptest! {
        // PAE is injective: two distinct piece sequences never encode to the same bytes,
        // since each piece is prefixed with its own length.
        #[test]
        fn distinct_sequences_never_collide(a in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..4),
                                             b in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..4)) {
            if a != b {
                let pae_a = PreAuthenticationEncoding::parse(&a.iter().map(|p| p.as_slice()).collect::<Vec<_>>());
                let pae_b = PreAuthenticationEncoding::parse(&b.iter().map(|p| p.as_slice()).collect::<Vec<_>>());
                assert_ne!(pae_a.deref(), pae_b.deref());
            }
        }

        #[test]
        fn encoding_is_deterministic(pieces in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..32), 0..6)) {
            let refs = pieces.iter().map(|p| p.as_slice()).collect::<Vec<_>>();
            let first = PreAuthenticationEncoding::parse(&refs);
            let second = PreAuthenticationEncoding::parse(&refs);
            assert_eq!(first.deref(), second.deref());
        }
    }
}
