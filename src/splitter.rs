// SPDX-License-Identifier: Apache-2.0

//! Splits a secret into `n` Shamir shares with threshold `k`,
//! `spec.md` §4.2.

use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::point::Point;
use crate::polynomial::Polynomial;
use crate::secret::Secret;
use crate::security_level::SecurityLevel;
use crate::share_set::ShareSet;

/// Owns a mutable current [`SecurityLevel`] (and its cached prime), updated
/// on each operation. Not safe for concurrent use: two threads driving the
/// same `Splitter` may race on that level (`spec.md` §5).
pub struct Splitter {
    level: SecurityLevel,
}

impl Splitter {
    /// A new `Splitter` at the default level (13, or 7 under legacy mode).
    pub fn new() -> Self {
        Splitter {
            level: SecurityLevel::default_for_mode(),
        }
    }

    /// A new `Splitter` at an explicit, validated level.
    pub fn with_level(level: u32) -> Result<Self> {
        Ok(Splitter {
            level: SecurityLevel::new(level)?,
        })
    }

    pub fn security_level(&self) -> u32 {
        self.level.exponent()
    }

    pub fn set_security_level(&mut self, level: u32) -> Result<()> {
        self.level = SecurityLevel::new(level)?;
        Ok(())
    }

    /// `MakeShares(k, n)`: random secret, current level.
    pub fn make_shares<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        k: u32,
        n: u32,
    ) -> Result<ShareSet> {
        validate_k_n(k, n)?;
        let secret = Secret::random(rng, self.level.prime());
        self.build(rng, k, n, secret)
    }

    /// `MakeShares(k, n, secret)`: explicit secret, level auto-raised to at
    /// least `8 * secret.byteLength`, never lowered.
    pub fn make_shares_with_secret<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        k: u32,
        n: u32,
        secret: Secret,
    ) -> Result<ShareSet> {
        validate_k_n(k, n)?;
        self.raise_for_secret(&secret)?;
        self.build(rng, k, n, secret)
    }

    /// `MakeShares(k, n, secret, level)`: explicit secret, explicit level.
    /// The requested level is still subject to the same auto-raise rule as
    /// `make_shares_with_secret`: a secret whose field element would not
    /// fit under the requested level raises the level rather than
    /// silently truncating the secret (`spec.md` §4.2's literal scenario 1
    /// splits the integer 12345, which does not fit under `level = 13`'s
    /// `p = 8191`, and still reconstructs exactly — only consistent if the
    /// auto-raise precondition applies here too, not only to the
    /// secret-only overload).
    pub fn make_shares_with_secret_and_level<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
        k: u32,
        n: u32,
        secret: Secret,
        level: u32,
    ) -> Result<ShareSet> {
        validate_k_n(k, n)?;
        self.set_security_level(level)?;
        self.raise_for_secret(&secret)?;
        self.build(rng, k, n, secret)
    }

    /// Raises the current level to at least `8 * secret.byteLength`,
    /// snapped per `spec.md` §4.1, never lowering it.
    fn raise_for_secret(&mut self, secret: &Secret) -> Result<()> {
        let min_exponent = 8u32
            .checked_mul(secret.byte_len() as u32)
            .ok_or_else(|| Error::OutOfRange("secret byte length overflows u32".to_string()))?;
        self.level.raise_to_at_least(min_exponent)
    }

    fn build<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        k: u32,
        n: u32,
        secret: Secret,
    ) -> Result<ShareSet> {
        let p = self.level.prime().clone();
        let original_secret = secret.clone();
        let poly = Polynomial::sample_for_secret(rng, secret.value().clone(), (k - 1) as usize, &p);

        let mut points = Vec::with_capacity(n as usize);
        for i in 1..=n {
            let x = crate::bigint::BigInt::from_u32(i);
            let y = poly.evaluate(&x, &p);
            points.push(Point::new(i, y));
        }

        Ok(ShareSet::new(Some(original_secret), points))
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Splitter::new()
    }
}

/// `spec.md` §4.2 preconditions: `2 <= k <= n`, `1 <= n < 2^31`.
fn validate_k_n(k: u32, n: u32) -> Result<()> {
    if n == 0 || n >= (1u32 << 31) {
        return Err(Error::OutOfRange(format!(
            "n = {n} must satisfy 1 <= n < 2^31"
        )));
    }
    if k < 2 || k > n {
        return Err(Error::OutOfRange(format!(
            "threshold k = {k} must satisfy 2 <= k <= n = {n}"
        )));
    }
    Ok(())
}
