//! Library to reversibly scramble the pixels of an image.
//!
//! An image is scrambled by computing a permutation of its pixel positions
//! and moving every pixel as a whole. Each [Algorithm] has a paired
//! inverse that puts the pixels back:
//!
//! * Compact Hilbert curve, which works on any image size.
//! * Golden-ratio shift along a Gilbert curve.
//! * Chaotic tent map, driven by a numeric seed.
//!
//! This is visual obfuscation, not encryption. Anyone who knows the
//! algorithm, the image size and (for the chaotic pair) the seed can undo it.

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
//

mod algorithm;
pub mod chaos;
mod error;
pub mod gilbert;
pub mod hilbert;
pub mod permutation;
pub mod seed;
pub mod shift;

#[doc(inline)]
pub use crate::algorithm::{
    obfuscate, obfuscate_rgba, Algorithm, Config, ConfigBuilder, Direction,
};
#[doc(inline)]
pub use crate::error::{Error, Result};
