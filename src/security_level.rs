// SPDX-License-Identifier: Apache-2.0

//! Mersenne-exponent security-level table and snap-up policy.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// The known Mersenne-prime exponents up to 43,112,609, in ascending order.
///
/// `spec.md` §4.1.
pub const E: [u32; 45] = [
    5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203, 2281, 3217, 4253, 4423, 9689,
    9941, 11213, 19937, 21701, 23209, 44497, 86243, 110503, 132049, 216091, 756839, 859433,
    1257787, 1398269, 2976221, 3021377, 6972593, 13466917, 20996011, 24036583, 25964951,
    30402457, 32582657, 37156667, 42643801, 43112609,
];

/// The minimum exponent enforced when `LEGACY_MODE` is off.
const MIN_MODERN_EXPONENT: u32 = 13;

/// Process-wide flag relaxing the minimum permitted exponent from 13 down
/// to 5. Read-mostly by design (`spec.md` §5, §9): set it once at startup,
/// never toggle it concurrently with in-flight splits or combines.
static LEGACY_MODE: AtomicBool = AtomicBool::new(false);

/// Reads the process-wide `LEGACY_MODE` flag.
pub fn legacy_mode() -> bool {
    LEGACY_MODE.load(Ordering::SeqCst)
}

/// Sets the process-wide `LEGACY_MODE` flag.
pub fn set_legacy_mode(enabled: bool) {
    LEGACY_MODE.store(enabled, Ordering::SeqCst);
}

/// A validated Mersenne exponent plus its cached prime `p = 2^e - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityLevel {
    exponent: u32,
    prime: BigInt,
}

impl SecurityLevel {
    /// The default level at construction: 13, or 7 under legacy mode.
    ///
    /// `spec.md` §4.1.
    pub fn default_for_mode() -> Self {
        let e = if legacy_mode() { 7 } else { MIN_MODERN_EXPONENT };
        Self::new(e).expect("default exponent is always in E")
    }

    /// Validates `requested` per `spec.md` §4.1's setter semantics and
    /// builds the corresponding `SecurityLevel`.
    pub fn new(requested: u32) -> Result<Self> {
        let exponent = snap(requested, legacy_mode())?;
        let prime = mersenne_prime(exponent);
        Ok(SecurityLevel { exponent, prime })
    }

    /// Builds a `SecurityLevel` from an exponent already known to be a
    /// member of `E` (used internally once `snap` has run).
    fn from_table_exponent(exponent: u32) -> Self {
        SecurityLevel {
            exponent,
            prime: mersenne_prime(exponent),
        }
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn prime(&self) -> &BigInt {
        &self.prime
    }

    /// Index of this level's exponent within `E`.
    fn table_index(&self) -> usize {
        E.iter()
            .position(|&e| e == self.exponent)
            .expect("exponent is always snapped into E")
    }

    /// Raises this level to at least `min_exponent`, snapped per §4.1. The
    /// level is never lowered by this call. Used by
    /// `Splitter::make_shares(k, n, secret)`'s auto-raise rule
    /// (`spec.md` §4.2).
    pub fn raise_to_at_least(&mut self, min_exponent: u32) -> Result<()> {
        if min_exponent > self.exponent {
            *self = SecurityLevel::new(min_exponent)?;
        }
        Ok(())
    }

    /// Implements `spec.md` §4.8's inference procedure: given the maximum
    /// y-value observed across a set of shares, find the smallest `e in E`
    /// such that `max_y < 2^e - 1`, then step to the next larger element of
    /// `E` — the level a split would have used for a secret whose field
    /// element happened to be this large.
    pub fn infer_from_max_y(max_y: &BigInt) -> Result<Self> {
        let byte_len = max_y.byte_length();
        let initial_exponent = snap((byte_len * 8) as u32, legacy_mode())?;
        let mut level = SecurityLevel::from_table_exponent(initial_exponent);
        let mut i = level.table_index();

        while level.exponent > 5 && i > 0 {
            let fits = max_y.mod_p(&level.prime) == *max_y;
            if !fits {
                break;
            }
            i -= 1;
            level = SecurityLevel::from_table_exponent(E[i]);
        }

        if level.exponent > 5 {
            if i + 1 >= E.len() {
                return Err(Error::OutOfRange(format!(
                    "share magnitude requires a security level beyond max(E) = {}",
                    E[E.len() - 1]
                )));
            }
            i += 1;
        }
        Ok(SecurityLevel::from_table_exponent(E[i]))
    }
}

/// `2^e - 1`.
fn mersenne_prime(e: u32) -> BigInt {
    &BigInt::pow2(e) - &BigInt::one()
}

/// Pure setter-semantics function from `spec.md` §4.1:
///
/// 1. `v < 5` fails with `OutOfRange`.
/// 2. Under modern mode (`legacy == false`), `v < 13` is raised to 13.
/// 3. `v` snaps up to the next element of `E`; exceeding `max(E)` fails.
pub fn snap(v: u32, legacy: bool) -> Result<u32> {
    if v < 5 {
        return Err(Error::OutOfRange(format!(
            "security level {v} is below the minimum permitted exponent 5"
        )));
    }
    let floor = if legacy { 5 } else { MIN_MODERN_EXPONENT };
    let v = v.max(floor);

    E.iter()
        .copied()
        .find(|&e| e >= v)
        .ok_or_else(|| Error::OutOfRange(format!("security level {v} exceeds max(E) = {}", E[E.len() - 1])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_below_five() {
        assert!(snap(4, false).is_err());
        assert!(snap(0, true).is_err());
    }

    #[test]
    fn modern_floor_is_thirteen() {
        assert_eq!(snap(5, false).unwrap(), 13);
        assert_eq!(snap(13, false).unwrap(), 13);
    }

    #[test]
    fn legacy_floor_is_five() {
        assert_eq!(snap(5, true).unwrap(), 5);
        assert_eq!(snap(6, true).unwrap(), 7);
    }

    #[test]
    fn snaps_up_to_next_member() {
        assert_eq!(snap(14, false).unwrap(), 17);
        assert_eq!(snap(1024, false).unwrap(), 4253);
    }

    #[test]
    fn rejects_above_max() {
        assert!(snap(43112610, false).is_err());
    }

    #[test]
    fn default_level_is_thirteen() {
        set_legacy_mode(false);
        assert_eq!(SecurityLevel::default_for_mode().exponent(), 13);
    }

    #[test]
    fn infer_from_max_y_beyond_table_range_is_out_of_range_not_a_panic() {
        let beyond_max = &BigInt::pow2(*E.last().unwrap()) - &BigInt::one();
        assert!(matches!(
            SecurityLevel::infer_from_max_y(&beyond_max),
            Err(Error::OutOfRange(_))
        ));
    }

    proptest::proptest! {
        /// `spec.md` §8's "E-snap" invariant: every `v` in `[5, max(E)]`
        /// snaps to a member of `E` that is `>= v`, and to the smallest
        /// such member.
        #[test]
        fn snap_picks_smallest_member_ge_v(v in 5u32..=43_112_609) {
            let snapped = snap(v, true).unwrap();
            proptest::prop_assert!(E.contains(&snapped));
            proptest::prop_assert!(snapped >= v);
            proptest::prop_assert!(E.iter().all(|&e| e >= v || e < snapped));
        }
    }
}
