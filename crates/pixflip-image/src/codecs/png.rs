/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "png")]

//! Png decoding and encoding through `zune-png`
use log::debug;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_core::result::DecodingResult;
use zune_png::{PngDecoder, PngEncoder};

use crate::errors::ImageErrors;
use crate::image::PixelImage;

/// Colorspaces the png encoder can write
pub const SUPPORTED_COLORSPACES: [ColorSpace; 4] = [
    ColorSpace::Luma,
    ColorSpace::LumaA,
    ColorSpace::RGB,
    ColorSpace::RGBA
];

pub(crate) fn decode(bytes: &[u8]) -> Result<PixelImage, ImageErrors> {
    let mut decoder = PngDecoder::new(bytes);

    decoder.decode_headers()?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or(ImageErrors::GenericStr("png: no dimensions after reading headers"))?;
    let depth = decoder.get_depth().unwrap_or(BitDepth::Unknown);

    debug!("png: {width}x{height}, depth {depth:?}");

    let pixels = decoder.decode()?;
    // palette and transparency expansion may change the colorspace, so ask after decoding
    let colorspace = decoder
        .get_colorspace()
        .ok_or(ImageErrors::GenericStr("png: no colorspace after decoding"))?;

    match pixels {
        DecodingResult::U8(data) => PixelImage::from_u8(&data, width, height, colorspace),
        DecodingResult::U16(data) => PixelImage::from_u16(&data, width, height, colorspace),
        _ => Err(ImageErrors::NotImplemented("PNG decoder", depth))
    }
}

pub(crate) fn encode(image: &PixelImage, options: EncoderOptions) -> Result<Vec<u8>, ImageErrors> {
    if !SUPPORTED_COLORSPACES.contains(&image.colorspace()) {
        return Err(ImageErrors::EncodeErrors(format!(
            "png: unsupported colorspace {:?}, supported colorspaces are {:?}",
            image.colorspace(),
            SUPPORTED_COLORSPACES
        )));
    }
    let data = match image.depth() {
        BitDepth::Eight => image.as_bytes().to_vec(),
        // png stores 16 bit samples big endian
        BitDepth::Sixteen => image
            .to_u16()
            .iter()
            .flat_map(|x| x.to_be_bytes())
            .collect(),
        depth => return Err(ImageErrors::NotImplemented("PNG encoder", depth))
    };
    let mut encoder = PngEncoder::new(&data, options);

    Ok(encoder.encode())
}

impl From<zune_png::error::PngDecodeErrors> for ImageErrors {
    fn from(from: zune_png::error::PngDecodeErrors) -> Self {
        let err = format!("png: {from:?}");

        ImageErrors::ImageDecodeErrors(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_bit_round_trip() {
        let image = PixelImage::from_fn(7, 5, ColorSpace::RGBA, |x, y| {
            [x as u8, y as u8, (x * y) as u8, 255]
        })
        .unwrap();
        let options = crate::codecs::create_options_for_encoder(EncoderOptions::default(), &image);

        let bytes = encode(&image, options).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded, image);
    }

    #[test]
    fn sixteen_bit_round_trip() {
        let samples: Vec<u16> = (0..4 * 3 * 3).map(|x| (x * 1000) as u16).collect();
        let image = PixelImage::from_u16(&samples, 4, 3, ColorSpace::RGB).unwrap();
        let options = crate::codecs::create_options_for_encoder(EncoderOptions::default(), &image);

        let bytes = encode(&image, options).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.depth(), BitDepth::Sixteen);
        assert_eq!(decoded.to_u16(), samples);
    }

    #[test]
    fn truncated_files_fail() {
        let image = PixelImage::from_fn(4, 4, ColorSpace::RGB, |_, _| [1, 2, 3, 0]).unwrap();
        let options = crate::codecs::create_options_for_encoder(EncoderOptions::default(), &image);
        let bytes = encode(&image, options).unwrap();

        assert!(decode(&bytes[..bytes.len() / 2]).is_err());
    }
}
