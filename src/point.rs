// SPDX-License-Identifier: Apache-2.0

//! `(x, y)` share points, `spec.md` §3, and their textual wire format,
//! `spec.md` §4.9.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// One evaluation of the sharing polynomial: `x` is the share index
/// (`1..=n`, `n < 2^31`), `y` is the field element `P(x) mod p`.
#[derive(Clone, Debug)]
pub struct Point {
    x: u32,
    y: BigInt,
}

impl Point {
    pub fn new(x: u32, y: BigInt) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// `HEX(x.bytes_be) "-" HEX(y.bytes_be)`, upper-case, 2 chars per byte.
    pub fn to_share_string(&self) -> String {
        format!(
            "{}-{}",
            hex::encode_upper(BigInt::from_u32(self.x).to_be_bytes()),
            hex::encode_upper(self.y.to_be_bytes())
        )
    }

    /// Parses a single `HEX(x)-HEX(y)` share line. Rejects any non-hex
    /// digit or odd-length run as `InvalidInput` (`spec.md` §9's Open
    /// Question, resolved in favor of strict rejection over the legacy
    /// silent-zero lookup).
    pub fn parse_share_string(line: &str) -> Result<Self> {
        let line = line.trim();
        let (x_hex, y_hex) = line.split_once('-').ok_or_else(|| {
            Error::InvalidInput(format!("share '{line}' is not of the form HEX(x)-HEX(y)"))
        })?;

        let x_bytes = decode_hex(x_hex)?;
        let y_bytes = decode_hex(y_hex)?;

        let x_value = BigInt::from_be_bytes(&x_bytes);
        let x = x_value
            .to_u32()
            .ok_or_else(|| Error::InvalidInput(format!("share x-coordinate '{x_hex}' out of range")))?;

        Ok(Point {
            x,
            y: BigInt::from_be_bytes(&y_bytes),
        })
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // hash(x) xor hash(y), per `spec.md` §3.
        let mut xh = std::collections::hash_map::DefaultHasher::new();
        self.x.hash(&mut xh);
        let mut yh = std::collections::hash_map::DefaultHasher::new();
        self.y.to_le_bytes().hash(&mut yh);
        (xh.finish() ^ yh.finish()).hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Orders by the magnitude of `(x^2 + y^2)^(1/2)`, per `spec.md` §3.
    /// Used only for dedup/sort stability inside interpolation
    /// (`spec.md` §9); a lexicographic `(x, y)` order would be equally
    /// valid, but the magnitude rule is what gives the crate's `BigInt`
    /// integer-sqrt operation a caller.
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude().cmp(&other.magnitude())
    }
}

impl Point {
    fn magnitude(&self) -> BigInt {
        let x = BigInt::from_u32(self.x);
        let sum = &(&x * &x) + &(&self.y * &self.y);
        sum.sqrt()
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let bytes = hex::decode(s)
        .map_err(|e| Error::InvalidInput(format!("'{s}' is not a valid hex string: {e}")))?;
    if bytes.is_empty() {
        return Err(Error::InvalidInput(format!("'{s}' is not a valid hex string")));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip() {
        let p = Point::new(3, BigInt::from_u32(0xDEAD_BEEF));
        let s = p.to_share_string();
        let parsed = Point::parse_share_string(&s).unwrap();
        assert_eq!(p, parsed);
    }

    #[test]
    fn rejects_non_hex_input() {
        assert!(Point::parse_share_string("0G-01").is_err());
        assert!(Point::parse_share_string("nope").is_err());
    }

    #[test]
    fn is_case_insensitive_on_parse() {
        let a = Point::parse_share_string("0a-ff").unwrap();
        let b = Point::parse_share_string("0A-FF").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_by_euclidean_magnitude() {
        let near = Point::new(1, BigInt::from_u32(1));
        let far = Point::new(100, BigInt::from_u32(100));
        assert!(near < far);
    }
}
