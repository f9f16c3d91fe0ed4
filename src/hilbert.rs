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

//! Compact Hilbert index for arbitrary grids.
//!
//! Each axis only contributes as many bits as it needs. Levels where just
//! one axis is still active emit a single bit and leave the curve state
//! alone, so the index stays locality-preserving on non-square and
//! non-power-of-2 grids. The result is a score array, not a permutation:
//! run it through [normalize](crate::permutation::normalize) first.

use ndarray::parallel::prelude::*;
use ndarray::prelude::*;

/// Bits needed to address `n` cells along one axis, `ceil(log2(n))`.
pub fn precision(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Compact Hilbert index of cell `(x, y)`.
///
/// `w_prec` and `h_prec` are the [precision] of the grid width and height.
pub fn compact_index(x: u64, y: u64, w_prec: u32, h_prec: u32) -> u64 {
    // d: axes swapped, e: entry point reflection.
    let mut d = false;
    let mut e = 0u64;
    let mut index = 0u64;

    for i in (0..w_prec.max(h_prec)).rev() {
        let x_active = w_prec > i;
        let y_active = h_prec > i;

        let bx = if x_active { (x >> i) & 1 } else { 0 };
        let by = if y_active { (y >> i) & 1 } else { 0 };

        let mut l = (bx << 1) | by;
        if d {
            l = (l >> 1) | ((l & 1) << 1);
        }
        let t = l ^ e;

        if x_active && y_active {
            let r = match t {
                0 => 0,
                1 => 1,
                3 => 2,
                _ => 3,
            };
            if r == 0 {
                d = !d;
            } else if r == 3 {
                d = !d;
                e ^= 3;
            }
            index = (index << 2) | r;
        } else if x_active {
            index = (index << 1) | ((t >> if d { 0 } else { 1 }) & 1);
        } else {
            index = (index << 1) | ((t >> if d { 1 } else { 0 }) & 1);
        }
    }

    index
}

/// Compact Hilbert index of every cell of a `width` x `height` grid,
/// in raster order.
pub fn compact_scores(width: usize, height: usize) -> Vec<u64> {
    let w_prec = precision(width);
    let h_prec = precision(height);

    let mut scores = Array2::<u64>::zeros((height, width));
    par_azip!((index (y, x), s in &mut scores) {
        *s = compact_index(x as u64, y as u64, w_prec, h_prec);
    });

    scores.into_raw_vec()
}
