// SPDX-License-Identifier: Apache-2.0

//! Secret ↔ field-element encoding, `spec.md` §4.3.

use crate::bigint::BigInt;

/// A field element paired with the canonical byte length of the value it
/// was encoded from.
///
/// Invariant: `decode(encode(bytes)) == bytes` whenever `bytes.len()`
/// matches the recorded `byte_len`; `encode(decode(secret)) == secret`
/// whenever `secret.value < p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Secret {
    value: BigInt,
    byte_len: usize,
}

impl Secret {
    /// Encodes a byte string as a field element: interpreted little-endian
    /// unsigned, with `bytes.len()` retained as the canonical byte length.
    /// For UTF-8 strings, `bytes` is the UTF-8 encoding and `byte_len`
    /// therefore equals the encoding's length.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Secret {
            value: BigInt::from_le_bytes(bytes),
            byte_len: bytes.len().max(1),
        }
    }

    /// Encodes a non-negative integer as a field element: minimal
    /// little-endian bytes, one zero byte for value `0`.
    pub fn from_non_negative_integer(value: BigInt) -> Self {
        let byte_len = value.byte_length();
        Secret { value, byte_len }
    }

    /// Wraps an already-reduced field element produced by interpolation
    /// (`spec.md` §4.7's `Secret.FromFieldElement`). The byte length is the
    /// value's own minimal encoding length: reconstruction carries no
    /// out-of-band length metadata, so a secret whose value happens to be
    /// `0` decodes to a single zero byte regardless of how many zero bytes
    /// were originally shared (`spec.md` §4.3's byte-length invariant only
    /// binds `encode`/`decode` on the same `Secret`, not across a
    /// split/combine round trip).
    pub fn from_field_element(value: BigInt) -> Self {
        Secret::from_non_negative_integer(value)
    }

    /// Samples a uniform field element in `[0, p)`: `p.byteLength()` random
    /// bytes reduced mod `p`. `p = 2^e - 1`, so the only value the
    /// reduction folds down is `p` itself, mapped to `0`.
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R, p: &BigInt) -> Self {
        let byte_len = p.byte_length();
        let mut buf = vec![0u8; byte_len];
        rng.fill_bytes(&mut buf);
        let candidate = BigInt::from_le_bytes(&buf).mod_p(p);
        Secret::from_non_negative_integer(candidate)
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Decodes back to bytes: the value's canonical little-endian bytes,
    /// truncated or zero-padded to the recorded byte length.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.value.to_le_bytes();
        bytes.resize(self.byte_len, 0);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() {
        let original = b"hello";
        let secret = Secret::from_bytes(original);
        assert_eq!(secret.to_bytes(), original);
    }

    #[test]
    fn all_zero_sixteen_bytes_preserves_length() {
        let original = [0u8; 16];
        let secret = Secret::from_bytes(&original);
        assert_eq!(secret.byte_len(), 16);
        assert_eq!(secret.to_bytes(), original.to_vec());
    }

    #[test]
    fn integer_zero_encodes_to_one_byte() {
        let secret = Secret::from_non_negative_integer(BigInt::zero());
        assert_eq!(secret.to_bytes(), vec![0]);
    }
}
