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

//! Permutation algebra over raster indices.
//!
//! Two conventions are used throughout the crate:
//!
//! * rank: `perm[i]` is the destination rank of position `i`,
//!   which is what [normalize] produces.
//! * source lookup: `perm[i]` is the source index whose pixel lands on
//!   destination `i`, which is what [apply] consumes.
//!
//! The two are inverses of each other, see [invert].

use std::cmp::Ordering;

use ndarray::parallel::prelude::*;
use ndarray::prelude::*;
use rayon::prelude::*;

use crate::error::{check_dimensions, Error, Result};

/// Rank a score array into a permutation.
///
/// `normalize(scores)[i]` is the 0-based rank of `scores[i]`,
/// smallest first. Ties are broken by raster index, so the result is
/// fully determined by the input. Incomparable scores (NaN) compare equal.
pub fn normalize<T>(scores: &[T]) -> Vec<usize>
where
    T: PartialOrd + Sync,
{
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.par_sort_unstable_by(|&a, &b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut ranks = vec![0; scores.len()];
    for (rank, &i) in order.iter().enumerate() {
        ranks[i] = rank;
    }
    ranks
}

/// Check that `perm` is a bijection on `[0, perm.len())`.
pub fn validate(perm: &[usize]) -> Result<()> {
    let len = perm.len();
    let mut seen = vec![false; len];
    for (position, &index) in perm.iter().enumerate() {
        if index >= len || seen[index] {
            return Err(Error::InvariantViolation {
                position,
                index,
                len,
            });
        }
        seen[index] = true;
    }
    Ok(())
}

/// Compute `inv` such that `inv[perm[i]] == i`.
///
/// Fails with [Error::InvariantViolation] if `perm` is not a bijection.
pub fn invert(perm: &[usize]) -> Result<Vec<usize>> {
    validate(perm)?;

    let mut inv = vec![0; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inv[p] = i;
    }
    Ok(inv)
}

/// Remap pixels through a source-lookup permutation.
///
/// `pixels` has shape `(height, width, channels)`. For every destination
/// raster index `i`, the whole pixel at raster index `perm[i]` is copied.
/// The input is never modified.
pub fn apply<A>(pixels: ArrayView3<'_, A>, perm: &[usize]) -> Result<Array3<A>>
where
    A: Clone + Default + Send + Sync,
{
    let (height, width, _) = pixels.dim();
    let n = height * width;
    if perm.len() != n {
        return Err(Error::InvariantViolation {
            position: perm.len(),
            index: n,
            len: perm.len(),
        });
    }
    validate(perm)?;

    let mut out = Array3::<A>::default(pixels.raw_dim());
    par_azip!((index (y, x), mut dst in out.lanes_mut(Axis(2))) {
        let p = perm[y * width + x];
        dst.assign(&pixels.slice(s![p / width, p % width, ..]));
    });

    Ok(out)
}

/// [apply] on a flat RGBA8 buffer of `width * height * 4` bytes.
pub fn apply_rgba(pixels: &[u8], perm: &[usize], width: usize, height: usize) -> Result<Vec<u8>> {
    check_dimensions(width, height, pixels.len())?;
    let view = ArrayView3::from_shape((height, width, 4), pixels).map_err(|_| {
        Error::BufferMismatch {
            width,
            height,
            len: pixels.len(),
        }
    })?;

    Ok(apply(view, perm)?.into_raw_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ranks_scores() {
        assert_eq!(normalize(&[30, 10, 20]), [2, 0, 1]);
        assert_eq!(normalize(&[0.5, -1.0, 0.25, 8.0]), [2, 0, 1, 3]);
    }

    #[test]
    fn normalize_breaks_ties_by_index() {
        assert_eq!(normalize(&[5, 1, 5, 1, 5]), [2, 0, 3, 1, 4]);
        assert_eq!(normalize(&[0u64; 6]), [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(&[0u64, 1, 14, 15, 16, 3, 2, 13, 12, 19, 4, 7, 8, 11, 20]);
        assert_eq!(once, [0, 1, 10, 11, 12, 3, 2, 9, 8, 13, 4, 5, 6, 7, 14]);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_empty() {
        assert!(normalize::<u64>(&[]).is_empty());
    }

    #[test]
    fn invert_permutation() {
        let p = vec![2, 0, 3, 1];
        let inv = invert(&p).unwrap();
        assert_eq!(inv, [1, 3, 0, 2]);
        for (i, &v) in p.iter().enumerate() {
            assert_eq!(inv[v], i);
        }
        assert_eq!(invert(&inv).unwrap(), p);
    }

    #[test]
    fn invert_rejects_non_bijection() {
        assert_eq!(
            invert(&[0, 2, 2]),
            Err(Error::InvariantViolation {
                position: 2,
                index: 2,
                len: 3
            })
        );
        assert!(invert(&[0, 3, 1]).is_err());
    }

    #[test]
    fn apply_copies_whole_pixels() {
        // 2x2 image, one distinct RGBA value per pixel.
        let src: Vec<u8> = (0..16).collect();
        let out = apply_rgba(&src, &[3, 2, 1, 0], 2, 2).unwrap();
        assert_eq!(
            out,
            [12, 13, 14, 15, 8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3]
        );
    }

    #[test]
    fn apply_uses_source_lookup() {
        let arr = Array3::from_shape_fn((1, 3, 1), |(_, x, _)| x as u8 * 10);
        let out = apply(arr.view(), &[1, 2, 0]).unwrap();
        assert_eq!(out.into_raw_vec(), [10, 20, 0]);
        // Input untouched.
        assert_eq!(arr.into_raw_vec(), [0, 10, 20]);
    }

    #[test]
    fn apply_then_inverse_restores() {
        let src: Vec<u8> = (0..6 * 4 * 4).map(|v| (v * 7) as u8).collect();
        let perm = normalize(&[
            9, 3, 7, 1, 0, 4, 11, 2, 5, 8, 6, 10, 13, 12, 15, 14, 17, 16, 19, 18, 21, 20, 23, 22,
        ]);
        let scrambled = apply_rgba(&src, &perm, 6, 4).unwrap();
        assert_ne!(scrambled, src);
        let restored = apply_rgba(&scrambled, &invert(&perm).unwrap(), 6, 4).unwrap();
        assert_eq!(restored, src);
    }

    #[test]
    fn apply_rejects_bad_permutation() {
        let src = [0u8; 16];
        assert!(apply_rgba(&src, &[0, 1, 2], 2, 2).is_err());
        assert!(apply_rgba(&src, &[0, 1, 1, 3], 2, 2).is_err());
        assert!(matches!(
            apply_rgba(&src, &[0, 1, 2, 3], 3, 2),
            Err(Error::BufferMismatch { .. })
        ));
    }
}
