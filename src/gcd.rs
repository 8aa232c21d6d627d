// SPDX-License-Identifier: Apache-2.0

//! Extended Euclidean algorithm.

use crate::bigint::BigInt;
use num_integer::ExtendedGcd;

/// Computes `(g, s, t)` with `s*a + t*b = g`, `g >= 0` whenever `b > 0`.
///
/// When `gcd(a, p) = 1` for `0 < a < p` with `p` prime (always true in the
/// Combiner's use of this function), `s` is `a`'s modular inverse mod `p`,
/// per `spec.md` §4.6.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let ExtendedGcd { gcd, x, y, .. } = a.inner().extended_gcd(b.inner());
    (
        BigInt::from_inner(gcd),
        BigInt::from_inner(x),
        BigInt::from_inner(y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezout_identity_holds() {
        let a = BigInt::from_u32(240);
        let b = BigInt::from_u32(46);
        let (g, s, t) = extended_gcd(&a, &b);
        assert_eq!(g, BigInt::from_u32(2));
        let lhs = &(&s * &a) + &(&t * &b);
        assert_eq!(lhs, g);
    }

    #[test]
    fn inverse_via_gcd() {
        // 3 * 5 = 15 = 2*7 + 1, so 3^-1 mod 7 == 5
        let p = BigInt::from_u32(7);
        let a = BigInt::from_u32(3);
        let (g, s, _) = extended_gcd(&a, &p);
        assert_eq!(g, BigInt::one());
        assert_eq!(s.mod_p(&p), BigInt::from_u32(5));
    }
}
