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

use obfusimg::permutation::{apply_rgba, invert};
use obfusimg::{obfuscate_rgba, Algorithm, Config, ConfigBuilder, Error};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

const SIZES: [(usize, usize); 5] = [(1, 1), (2, 1), (7, 13), (16, 16), (512, 384)];

fn noise(width: usize, height: usize) -> Vec<u8> {
    let mut buf = vec![0; width * height * 4];
    Xoshiro256StarStar::seed_from_u64((width * 31 + height) as u64).fill_bytes(&mut buf);
    buf
}

fn config(algorithm: Algorithm) -> Config {
    ConfigBuilder::new()
        .algorithm(algorithm)
        .seed(0.7071)
        .build()
}

#[test]
fn every_permutation_is_a_bijection() {
    for &(w, h) in &SIZES {
        for a in Algorithm::ALL {
            let mut perm = a.permutation(w, h, 0.7071).unwrap();
            perm.sort_unstable();
            assert!(
                perm.iter().copied().eq(0..w * h),
                "{a} on {w}x{h} is not a permutation"
            );
        }
    }
}

#[test]
fn double_inversion_is_identity() {
    for a in Algorithm::ALL {
        let p = a.permutation(7, 13, 0.31).unwrap();
        assert_eq!(invert(&invert(&p).unwrap()).unwrap(), p, "{a}");
    }
}

#[test]
fn forward_then_inverse_restores() {
    for &(w, h) in &SIZES {
        let src = noise(w, h);
        for a in [
            Algorithm::CompactForward,
            Algorithm::GilbertShiftForward,
            Algorithm::ChaoticForward,
        ] {
            let c = config(a);
            let scrambled = obfuscate_rgba(&src, w, h, &c).unwrap();
            let restored = obfuscate_rgba(&scrambled, w, h, &c.inverse()).unwrap();
            assert_eq!(restored, src, "{a} on {w}x{h}");
        }
    }
}

#[test]
fn inverse_then_forward_restores() {
    let (w, h) = (33, 20);
    let src = noise(w, h);
    for a in [
        Algorithm::CompactInverse,
        Algorithm::GilbertShiftInverse,
        Algorithm::ChaoticInverse,
    ] {
        let c = config(a);
        let scrambled = obfuscate_rgba(&src, w, h, &c).unwrap();
        let restored = obfuscate_rgba(&scrambled, w, h, &c.inverse()).unwrap();
        assert_eq!(restored, src, "{a}");
    }
}

#[test]
fn scrambling_moves_pixels() {
    let (w, h) = (16, 16);
    let src = noise(w, h);
    for a in Algorithm::ALL {
        let out = obfuscate_rgba(&src, w, h, &config(a)).unwrap();
        assert_ne!(out, src, "{a}");

        // Same pixels, different places.
        let mut a_px: Vec<_> = src.chunks_exact(4).collect();
        let mut b_px: Vec<_> = out.chunks_exact(4).collect();
        a_px.sort_unstable();
        b_px.sort_unstable();
        assert_eq!(a_px, b_px);
    }
}

#[test]
fn wrong_seed_does_not_restore() {
    let (w, h) = (16, 16);
    let src = noise(w, h);
    let c = config(Algorithm::ChaoticForward);
    let scrambled = obfuscate_rgba(&src, w, h, &c).unwrap();
    let wrong = ConfigBuilder::new()
        .algorithm(Algorithm::ChaoticInverse)
        .seed(0.7072)
        .build();
    assert_ne!(obfuscate_rgba(&scrambled, w, h, &wrong).unwrap(), src);
}

#[test]
fn alpha_is_copied_verbatim() {
    let (w, h) = (5, 3);
    let src: Vec<u8> = (0..w * h)
        .flat_map(|i| [i as u8, 0, 0, 255 - i as u8])
        .collect();
    let perm = Algorithm::GilbertShiftForward.permutation(w, h, 0.0).unwrap();
    let out = apply_rgba(&src, &perm, w, h).unwrap();
    for px in out.chunks_exact(4) {
        assert_eq!(px[3], 255 - px[0]);
    }
}

#[test]
fn errors_before_any_work() {
    let c = Config::default();
    assert_eq!(
        obfuscate_rgba(&[], 0, 4, &c),
        Err(Error::InvalidDimensions {
            width: 0,
            height: 4
        })
    );
    assert_eq!(
        obfuscate_rgba(&[0; 12], 2, 2, &c),
        Err(Error::BufferMismatch {
            width: 2,
            height: 2,
            len: 12
        })
    );
    assert_eq!(
        "7".parse::<Algorithm>(),
        Err(Error::UnknownAlgorithm("7".into()))
    );
}
