//! Main Program for Obfusimg
//! Run with `--help` for more instruction

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Error};
use clap::Parser;
use image::codecs::jpeg::JpegEncoder;
use image::io::Reader as ImageReader;
use image::{save_buffer_with_format, ColorType, DynamicImage, ImageFormat, RgbaImage};
use ndarray::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use obfusimg::seed::{parse_seed, random_seed};
use obfusimg::{obfuscate, Algorithm, ConfigBuilder};

const JPEG_QUALITY: u8 = 92;

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Input file
    #[arg(required_unless_present = "list")]
    input: Option<PathBuf>,

    /// Algorithm name or number (see --list)
    #[arg(short = 'a', long, default_value = "compact-forward")]
    algorithm: Algorithm,

    /// Seed for the chaotic algorithms (number or passphrase)
    #[arg(short = 's', long)]
    seed: Option<String>,

    /// Undo the algorithm instead of applying it
    #[arg(short = 'd', long)]
    decrypt: bool,

    /// Output file (default: <input>_out.png or .jpg)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// List available algorithms
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.list {
        for (i, a) in Algorithm::ALL.into_iter().enumerate() {
            println!("{i}  {:<22} {}", a.id(), a.description());
        }
        return Ok(());
    }
    let Some(input) = args.input else {
        bail!("No input file");
    };

    let algorithm = if args.decrypt {
        args.algorithm.inverse()
    } else {
        args.algorithm
    };

    let seed = match (algorithm.uses_seed(), args.seed) {
        (true, Some(s)) => parse_seed(&s),
        (true, None) => {
            let s = random_seed();
            info!("No seed given, using {s} (pass it with --seed to restore the image)");
            s
        }
        (false, Some(_)) => {
            warn!("{algorithm} does not use a seed, ignoring it");
            0.0
        }
        (false, None) => 0.0,
    };

    let config = ConfigBuilder::new()
        .algorithm(algorithm)
        .seed(seed)
        .build();

    let reader = ImageReader::new(BufReader::new(
        File::open(&input).with_context(|| format!("Cannot open {}", input.display()))?,
    ))
    .with_guessed_format()?;
    let input_format = reader.format();
    let im = reader
        .decode()
        .with_context(|| format!("Cannot decode {}", input.display()))?
        .into_rgba8();
    let (width, height) = im.dimensions();
    info!("Loaded {} ({width}x{height})", input.display());

    let arr = ArrayView3::from_shape((height as usize, width as usize, 4), im.as_raw().as_slice())?;
    let out = obfuscate(arr, &config)?;
    info!("Algorithm {algorithm} applied on {} pixels", width as usize * height as usize);

    let transparent = out.slice(s![.., .., 3]).iter().any(|&a| a != 255);
    let (path, format) = match args.output {
        Some(p) => {
            let format = ImageFormat::from_path(&p)
                .with_context(|| format!("Unknown output format for {}", p.display()))?;
            if format == ImageFormat::Jpeg && transparent {
                warn!("JPEG has no alpha channel, transparency will be lost");
            }
            (p, format)
        }
        None => default_output(&input, input_format, transparent),
    };

    let out = RgbaImage::from_raw(width, height, out.into_raw_vec())
        .context("Output buffer has the wrong size")?;
    save(&path, out, format)?;
    info!("Wrote {}", path.display());

    Ok(())
}

/// `<stem>_out.<ext>` next to the input. PNG and JPEG inputs keep their
/// format, everything else becomes PNG. JPEG falls back to PNG when the
/// output has transparency.
fn default_output(
    input: &Path,
    input_format: Option<ImageFormat>,
    transparent: bool,
) -> (PathBuf, ImageFormat) {
    let mut format = match input_format {
        Some(ImageFormat::Jpeg) => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    };
    if format == ImageFormat::Jpeg && transparent {
        warn!("Output has transparency, writing PNG instead of JPEG");
        format = ImageFormat::Png;
    }

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "obfusimg_out".into());
    let ext = if format == ImageFormat::Jpeg { "jpg" } else { "png" };

    (input.with_file_name(format!("{stem}_out.{ext}")), format)
}

fn save(path: &Path, im: RgbaImage, format: ImageFormat) -> Result<(), Error> {
    if format == ImageFormat::Jpeg {
        let rgb = DynamicImage::ImageRgba8(im).into_rgb8();
        let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
        JpegEncoder::new_with_quality(BufWriter::new(file), JPEG_QUALITY).encode_image(&rgb)?;
    } else {
        save_buffer_with_format(
            path,
            im.as_raw(),
            im.width(),
            im.height(),
            ColorType::Rgba8,
            format,
        )?;
    }
    Ok(())
}
