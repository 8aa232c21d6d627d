// SPDX-License-Identifier: Apache-2.0

//! Shamir's (k,n)-threshold secret sharing over GF(p), where `p = 2^e - 1`
//! is a Mersenne prime.
//!
//! A secret is split into `n` shares such that any `k <= n` shares
//! reconstruct it exactly, while any `k - 1` or fewer reveal no information
//! beyond the secret's bit-length upper bound. See `SPEC_FULL.md` for the
//! full design.
//!
//! ```
//! use mersenne_sss::{Combiner, Secret, ShareSet, Splitter};
//! use rand::rngs::OsRng;
//!
//! let mut splitter = Splitter::with_level(13).unwrap();
//! let secret = Secret::from_bytes(b"correct horse battery staple");
//! let shares = splitter
//!     .make_shares_with_secret(&mut OsRng, 3, 5, secret)
//!     .unwrap();
//!
//! let subset: Vec<_> = shares.points().iter().take(3).cloned().collect();
//! let mut combiner = Combiner::new();
//! let recovered = combiner
//!     .reconstruct(ShareSet::new(None, subset))
//!     .unwrap();
//! assert_eq!(recovered.to_bytes(), b"correct horse battery staple".to_vec());
//! ```

mod bigint;
mod combiner;
mod error;
mod gcd;
mod point;
mod polynomial;
mod secret;
mod security_level;
mod share_set;
mod splitter;

pub use bigint::BigInt;
pub use combiner::{Combiner, IntoPoints};
pub use error::{Error, Result};
pub use gcd::extended_gcd;
pub use point::Point;
pub use secret::Secret;
pub use security_level::{legacy_mode, set_legacy_mode, SecurityLevel, E};
pub use share_set::ShareSet;
pub use splitter::Splitter;
