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

//! Golden-ratio shift along the Gilbert curve.
//!
//! Every pixel moves `offset` steps further along the curve, wrapping
//! around at the end. Since the offset is an irrational fraction of the
//! curve length, neighbouring pixels end up far apart.

use tracing::debug;

use crate::algorithm::Direction;
use crate::gilbert::gilbert_curve;

/// Number of curve steps each pixel is moved for a grid of `n` pixels,
/// `round(n * (sqrt(5) - 1) / 2)`.
pub fn shift_offset(n: usize) -> usize {
    ((5f64.sqrt() - 1.0) / 2.0 * n as f64).round() as usize
}

/// Build a source-lookup permutation that shifts every pixel along the
/// Gilbert curve of a `width` x `height` grid.
///
/// [Direction::Inverse] writes the same pairs the other way round, so it
/// undoes [Direction::Forward] without a separate inversion pass.
pub fn shift_permutation(width: usize, height: usize, direction: Direction) -> Vec<usize> {
    let curve = gilbert_curve(width, height);
    let n = curve.len();
    let offset = shift_offset(n);
    debug!(n, offset, ?direction, "golden-ratio shift");

    let mut perm = vec![0; n];
    for (i, &(sx, sy)) in curve.iter().enumerate() {
        let (dx, dy) = curve[(i + offset) % n];
        let src = sy * width + sx;
        let dst = dy * width + dx;

        match direction {
            Direction::Forward => perm[dst] = src,
            Direction::Inverse => perm[src] = dst,
        }
    }
    perm
}
