// SPDX-License-Identifier: Apache-2.0

//! Coefficient sampling and Horner evaluation, `spec.md` §4.2 step 3 and
//! §4.4.

use rand::{CryptoRng, RngCore};

use crate::bigint::BigInt;

/// A polynomial over GF(p), represented by its coefficients in ascending
/// degree order: `coefs[0]` is the constant term.
#[derive(Clone, Debug)]
pub struct Polynomial {
    coefs: Vec<BigInt>,
}

impl Polynomial {
    /// Builds the degree-`k - 1` polynomial used by a split: `coefs[0]` is
    /// the secret, and each higher coefficient is `⌈bit_length(p) / 8⌉`
    /// random bytes reduced mod `p`, drawn from a cryptographically secure
    /// source (`spec.md` §4.2 step 3).
    pub fn sample_for_secret<R: RngCore + CryptoRng>(
        rng: &mut R,
        secret: BigInt,
        degree: usize,
        p: &BigInt,
    ) -> Self {
        let byte_len = ((p.bit_length() + 7) / 8) as usize;
        let mut coefs = Vec::with_capacity(degree + 1);
        coefs.push(secret);
        for _ in 0..degree {
            let mut buf = vec![0u8; byte_len];
            rng.fill_bytes(&mut buf);
            let a = BigInt::from_le_bytes(&buf).abs();
            coefs.push(a.mod_p(p));
        }
        Polynomial { coefs }
    }

    pub fn coefs(&self) -> &[BigInt] {
        &self.coefs
    }

    /// Evaluates the polynomial at `x` modulo `p` via Horner's rule,
    /// reducing after each step: `a <- 0; for c in coefs.rev(): a <- (a*x +
    /// c) mod p`. Equivalent to `sum(coefs[i] * x^i) mod p`
    /// (`spec.md` §4.4).
    pub fn evaluate(&self, x: &BigInt, p: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for c in self.coefs.iter().rev() {
            acc = (&(&acc * x) + c).mod_p(p);
        }
        acc
    }
}
