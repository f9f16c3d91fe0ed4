// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Seed derivation for the chaotic algorithms.
//!
//! Only the fractional part of a seed is used, so seeds derived here are
//! always in `[0, 1)`.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use sha2::{Digest, Sha256};

/// Interpret user-supplied seed text.
///
/// Finite numbers are used as-is. Anything else is treated as a
/// passphrase, see [passphrase_seed].
pub fn parse_seed(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => passphrase_seed(text),
    }
}

/// Deterministic seed from a passphrase.
pub fn passphrase_seed(text: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(text);

    Xoshiro256StarStar::from_seed(hasher.finalize().into()).gen()
}

/// Fresh seed from OS entropy.
pub fn random_seed() -> f64 {
    Xoshiro256StarStar::from_entropy().gen()
}
