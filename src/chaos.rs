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

//! Tent-map driven pseudorandom permutation.

use tracing::debug;

use crate::permutation::normalize;

/// Slope of the tent map, just under 2 so orbits do not collapse to 0.
pub const TENT_MU: f64 = 1.9999;

/// One step of the tent map.
#[inline]
pub fn tent_map(x: f64, mu: f64) -> f64 {
    if x < 0.5 {
        mu * x
    } else {
        mu * (1.0 - x)
    }
}

/// `n` consecutive iterates of the tent map, starting from the fractional
/// part of `seed`. The first score is already one step in.
pub fn chaotic_scores(n: usize, seed: f64) -> Vec<f64> {
    let mut x = seed - seed.floor();
    (0..n)
        .map(|_| {
            x = tent_map(x, TENT_MU);
            x
        })
        .collect()
}

/// Rank of every raster position under the tent-map scores.
pub fn chaotic_permutation(n: usize, seed: f64) -> Vec<usize> {
    debug!(n, seed, "tent map permutation");
    normalize(&chaotic_scores(n, seed))
}
