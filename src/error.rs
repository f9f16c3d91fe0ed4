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

/// Errors produced while building or applying a pixel permutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Zero-sized image, or one whose byte size overflows `usize`.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel buffer length does not match `width * height * 4`.
    #[error("{len}-byte buffer does not hold a {width}x{height} RGBA image")]
    BufferMismatch {
        width: usize,
        height: usize,
        len: usize,
    },

    /// Algorithm identifier outside the known set.
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    /// A permutation that is not a bijection on `[0, len)`.
    #[error("not a permutation: index {index} at position {position} (length {len})")]
    InvariantViolation {
        position: usize,
        index: usize,
        len: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Pixel count `N` of a `width` x `height` image.
///
/// Fails if either side is zero or `N * 4` overflows.
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&n| n != 0 && n.checked_mul(4).is_some())
        .ok_or(Error::InvalidDimensions { width, height })
}

/// Validate image dimensions against an RGBA buffer length in bytes.
///
/// Returns the pixel count `N`.
pub(crate) fn check_dimensions(width: usize, height: usize, len: usize) -> Result<usize> {
    let n = pixel_count(width, height)?;
    if n * 4 != len {
        return Err(Error::BufferMismatch { width, height, len });
    }
    Ok(n)
}
