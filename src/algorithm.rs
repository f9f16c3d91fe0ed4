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

use std::fmt;
use std::str::FromStr;

use ndarray::prelude::*;
use tracing::debug;

use crate::chaos::chaotic_permutation;
use crate::error::{check_dimensions, pixel_count, Error, Result};
use crate::hilbert::compact_scores;
use crate::permutation::{apply, invert, normalize, validate};
use crate::shift::shift_permutation;

/// Which half of an algorithm pair to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Scrambling strategy.
///
/// Algorithms come in pairs: the `*Inverse` variant undoes the matching
/// `*Forward` one, given the same image size (and seed, for the chaotic
/// pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Inverted ranks of the compact Hilbert index.
    #[default]
    CompactForward,
    /// Ranks of the compact Hilbert index.
    CompactInverse,
    /// Golden-ratio shift along the Gilbert curve.
    GilbertShiftForward,
    /// Golden-ratio shift, reversed.
    GilbertShiftInverse,
    /// Ranks of a seeded tent-map sequence.
    ChaoticForward,
    /// Inverted ranks of a seeded tent-map sequence.
    ChaoticInverse,
}

impl Algorithm {
    /// All algorithms, in legacy selector order.
    pub const ALL: [Algorithm; 6] = [
        Self::CompactForward,
        Self::CompactInverse,
        Self::GilbertShiftForward,
        Self::GilbertShiftInverse,
        Self::ChaoticForward,
        Self::ChaoticInverse,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::CompactForward => "compact-forward",
            Self::CompactInverse => "compact-inverse",
            Self::GilbertShiftForward => "gilbert-shift-forward",
            Self::GilbertShiftInverse => "gilbert-shift-inverse",
            Self::ChaoticForward => "chaotic-forward",
            Self::ChaoticInverse => "chaotic-inverse",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CompactForward => "compact Hilbert curve",
            Self::CompactInverse => "inverse compact Hilbert curve",
            Self::GilbertShiftForward => "Gilbert curve golden-ratio shift",
            Self::GilbertShiftInverse => "inverse Gilbert curve golden-ratio shift",
            Self::ChaoticForward => "chaotic tent map (seeded)",
            Self::ChaoticInverse => "inverse chaotic tent map (seeded)",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::CompactForward | Self::GilbertShiftForward | Self::ChaoticForward => {
                Direction::Forward
            }
            _ => Direction::Inverse,
        }
    }

    /// The other half of this algorithm's pair.
    pub fn inverse(self) -> Self {
        match self {
            Self::CompactForward => Self::CompactInverse,
            Self::CompactInverse => Self::CompactForward,
            Self::GilbertShiftForward => Self::GilbertShiftInverse,
            Self::GilbertShiftInverse => Self::GilbertShiftForward,
            Self::ChaoticForward => Self::ChaoticInverse,
            Self::ChaoticInverse => Self::ChaoticForward,
        }
    }

    /// Whether the seed affects the output.
    pub fn uses_seed(self) -> bool {
        matches!(self, Self::ChaoticForward | Self::ChaoticInverse)
    }

    /// Build the source-lookup permutation for a `width` x `height` image.
    ///
    /// `seed` is ignored unless [uses_seed](Self::uses_seed) is true.
    pub fn permutation(self, width: usize, height: usize, seed: f64) -> Result<Vec<usize>> {
        let n = pixel_count(width, height)?;
        debug!(algorithm = self.id(), width, height, n, "building permutation");

        let perm = match self {
            Self::CompactForward => invert(&normalize(&compact_scores(width, height)))?,
            Self::CompactInverse => normalize(&compact_scores(width, height)),
            Self::GilbertShiftForward => shift_permutation(width, height, Direction::Forward),
            Self::GilbertShiftInverse => shift_permutation(width, height, Direction::Inverse),
            Self::ChaoticForward => chaotic_permutation(n, seed),
            Self::ChaoticInverse => invert(&chaotic_permutation(n, seed))?,
        };

        if perm.len() != n {
            return Err(Error::InvariantViolation {
                position: perm.len(),
                index: n,
                len: perm.len(),
            });
        }
        validate(&perm)?;
        Ok(perm)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the kebab-case id or the legacy numeric selector `0..=5`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(i) = s.parse::<usize>() {
            return Self::ALL
                .get(i)
                .copied()
                .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()));
        }
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}

/// Obfuscation settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub algorithm: Algorithm,
    pub seed: f64,
}

impl Config {
    /// Same seed, paired algorithm.
    pub fn inverse(&self) -> Self {
        Self {
            algorithm: self.algorithm.inverse(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    pub fn seed(mut self, seed: f64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Scramble (or unscramble) an image.
///
/// `pixels` has shape `(height, width, channels)`; every pixel is moved as a
/// whole. Returns a new array of the same shape.
pub fn obfuscate(pixels: ArrayView3<'_, u8>, config: &Config) -> Result<Array3<u8>> {
    let (height, width, _) = pixels.dim();
    let perm = config.algorithm.permutation(width, height, config.seed)?;
    apply(pixels, &perm)
}

/// [obfuscate] on a flat RGBA8 buffer of `width * height * 4` bytes.
pub fn obfuscate_rgba(
    pixels: &[u8],
    width: usize,
    height: usize,
    config: &Config,
) -> Result<Vec<u8>> {
    check_dimensions(width, height, pixels.len())?;
    let view = ArrayView3::from_shape((height, width, 4), pixels).map_err(|_| {
        Error::BufferMismatch {
            width,
            height,
            len: pixels.len(),
        }
    })?;

    Ok(obfuscate(view, config)?.into_raw_vec())
}
