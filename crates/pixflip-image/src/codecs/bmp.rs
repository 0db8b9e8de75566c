/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "bmp")]

//! Bmp decoding through `zune-bmp`, there is no bmp encoder
use log::debug;
use zune_bmp::BmpDecoder;

use crate::errors::ImageErrors;
use crate::image::PixelImage;

pub(crate) fn decode(bytes: &[u8]) -> Result<PixelImage, ImageErrors> {
    let mut decoder = BmpDecoder::new(bytes);

    decoder
        .decode_headers()
        .map_err(|e| ImageErrors::ImageDecodeErrors(format!("bmp: {e:?}")))?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or(ImageErrors::GenericStr("bmp: no dimensions after reading headers"))?;
    let colorspace = decoder
        .get_colorspace()
        .ok_or(ImageErrors::GenericStr("bmp: no colorspace after reading headers"))?;

    debug!("bmp: {width}x{height}, colorspace {colorspace:?}");

    let pixels = decoder
        .decode()
        .map_err(|e| ImageErrors::ImageDecodeErrors(format!("bmp: {e:?}")))?;

    PixelImage::from_u8(&pixels, width, height, colorspace)
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use super::*;

    const SIZE: u8 = 4;

    fn colour(x: u8, y: u8) -> [u8; 3] {
        [x * 60, y * 60, 200]
    }

    /// A 4x4, 24 bit bottom up bitmap, smaller files don't fit the
    /// header size the decoder asks for
    fn small_bitmap() -> Vec<u8> {
        let pixel_bytes = u32::from(SIZE) * u32::from(SIZE) * 3;

        let mut file = Vec::new();
        // file header
        file.extend_from_slice(b"BM");
        file.extend_from_slice(&(54 + pixel_bytes).to_le_bytes());
        file.extend_from_slice(&0_u32.to_le_bytes());
        file.extend_from_slice(&54_u32.to_le_bytes());
        // info header
        file.extend_from_slice(&40_u32.to_le_bytes());
        file.extend_from_slice(&i32::from(SIZE).to_le_bytes());
        file.extend_from_slice(&i32::from(SIZE).to_le_bytes());
        file.extend_from_slice(&1_u16.to_le_bytes());
        file.extend_from_slice(&24_u16.to_le_bytes());
        file.extend_from_slice(&0_u32.to_le_bytes());
        file.extend_from_slice(&pixel_bytes.to_le_bytes());
        file.extend_from_slice(&2835_i32.to_le_bytes());
        file.extend_from_slice(&2835_i32.to_le_bytes());
        file.extend_from_slice(&0_u32.to_le_bytes());
        file.extend_from_slice(&0_u32.to_le_bytes());
        // bottom row first, BGR, 12 byte rows need no padding
        for y in (0..SIZE).rev() {
            for x in 0..SIZE {
                let [r, g, b] = colour(x, y);
                file.extend_from_slice(&[b, g, r]);
            }
        }
        file
    }

    #[test]
    fn decodes_a_small_bitmap() {
        let image = decode(&small_bitmap()).unwrap();

        assert_eq!(image.dimensions(), (4, 4));
        assert!(matches!(image.colorspace(), ColorSpace::RGB | ColorSpace::RGBA));

        // rows come out top down, samples in rgb order
        for x in 0..SIZE {
            for y in 0..SIZE {
                let pixel = image.at(usize::from(x), usize::from(y));
                assert_eq!(&pixel.as_bytes()[..3], &colour(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn headers_larger_than_the_file_fail() {
        let mut bitmap = small_bitmap();
        bitmap.truncate(60);

        assert!(matches!(decode(&bitmap), Err(ImageErrors::ImageDecodeErrors(_))));
    }
}
