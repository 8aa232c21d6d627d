// SPDX-License-Identifier: Apache-2.0

//! Container binding an (optional) original secret with its points, plus
//! the newline-joined textual wire format, `spec.md` §3, §4.9.

use crate::error::{Error, Result};
use crate::point::Point;
use crate::secret::Secret;

/// An ordered collection of shares, with the original secret attached only
/// immediately after a split. A `ShareSet` parsed from text has no
/// attached secret.
#[derive(Clone, Debug)]
pub struct ShareSet {
    secret: Option<Secret>,
    points: Vec<Point>,
}

impl ShareSet {
    pub fn new(secret: Option<Secret>, points: Vec<Point>) -> Self {
        ShareSet { secret, points }
    }

    pub fn secret(&self) -> Option<&Secret> {
        self.secret.as_ref()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// `share ("\n" share)*`: one `HEX(x)-HEX(y)` line per point.
    pub fn to_share_string(&self) -> String {
        self.points
            .iter()
            .map(Point::to_share_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parses a newline-joined share list. Accepts any newline convention
    /// and tolerates blank lines; trailing whitespace on each line is
    /// ignored. The returned `ShareSet` has no attached secret.
    pub fn parse(text: &str) -> Result<Self> {
        let points = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Point::parse_share_string)
            .collect::<Result<Vec<_>>>()?;

        if points.is_empty() {
            return Err(Error::InvalidInput(
                "no shares found in input text".to_string(),
            ));
        }

        Ok(ShareSet {
            secret: None,
            points,
        })
    }

    /// Parses a slice of individual share strings (one point per string),
    /// equivalent to joining them with newlines and calling
    /// [`ShareSet::parse`].
    pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let joined = lines
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::BigInt;

    #[test]
    fn wire_round_trip_preserves_point_set() {
        let points = vec![
            Point::new(1, BigInt::from_u32(111)),
            Point::new(2, BigInt::from_u32(222)),
            Point::new(3, BigInt::from_u32(333)),
        ];
        let set = ShareSet::new(None, points.clone());
        let text = set.to_share_string();
        let parsed = ShareSet::parse(&text).unwrap();
        assert_eq!(parsed.points(), &points[..]);
    }

    #[test]
    fn parse_tolerates_blank_lines_and_crlf() {
        let text = "01-FF\r\n\r\n02-EE\n";
        let parsed = ShareSet::parse(text).unwrap();
        assert_eq!(parsed.points().len(), 2);
    }

    #[test]
    fn parse_lines_matches_parse() {
        let lines = ["01-FF", "02-EE"];
        let from_lines = ShareSet::parse_lines(&lines).unwrap();
        let from_text = ShareSet::parse("01-FF\n02-EE").unwrap();
        assert_eq!(from_lines.points(), from_text.points());
    }

    proptest::proptest! {
        /// `spec.md` §8's "wire round-trip" invariant: `parse(format(s)) ==
        /// s.points` as a set, for arbitrary point lists with distinct `x`.
        #[test]
        fn wire_round_trip_property(
            xs in proptest::collection::hash_set(1u32..1000, 1..10),
            y_seed in proptest::collection::vec(0u32..u32::MAX, 10),
        ) {
            let points: Vec<Point> = xs
                .into_iter()
                .zip(y_seed)
                .map(|(x, y)| Point::new(x, BigInt::from_u32(y)))
                .collect();
            let set = ShareSet::new(None, points.clone());
            let text = set.to_share_string();
            let parsed = ShareSet::parse(&text).unwrap();

            let expected: std::collections::HashSet<(u32, String)> = points
                .iter()
                .map(|p| (p.x(), p.y().to_string()))
                .collect();
            let actual: std::collections::HashSet<(u32, String)> = parsed
                .points()
                .iter()
                .map(|p| (p.x(), p.y().to_string()))
                .collect();
            proptest::prop_assert_eq!(actual, expected);
        }
    }
}
