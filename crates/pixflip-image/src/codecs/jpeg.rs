/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "jpeg")]

//! Jpeg decoding through `zune-jpeg` and encoding through `jpeg-encoder`
use jpeg_encoder::{ColorType, Encoder};
use log::debug;
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_jpeg::JpegDecoder;

use crate::errors::ImageErrors;
use crate::image::PixelImage;

pub(crate) fn decode(bytes: &[u8]) -> Result<PixelImage, ImageErrors> {
    let mut decoder = JpegDecoder::new(bytes);

    decoder.decode_headers()?;

    let (width, height) = decoder
        .dimensions()
        .ok_or(ImageErrors::GenericStr("jpeg: no dimensions after reading headers"))?;

    let pixels = decoder.decode()?;
    let colorspace = decoder
        .get_output_colorspace()
        .ok_or(ImageErrors::GenericStr("jpeg: no output colorspace"))?;

    debug!("jpeg: {width}x{height}, colorspace {colorspace:?}");

    PixelImage::from_u8(&pixels, width, height, colorspace)
}

pub(crate) fn encode(image: &PixelImage, options: EncoderOptions) -> Result<Vec<u8>, ImageErrors> {
    if image.depth() != BitDepth::Eight {
        return Err(ImageErrors::NotImplemented("JPEG encoder", image.depth()));
    }
    let color_type = match image.colorspace() {
        ColorSpace::Luma => ColorType::Luma,
        ColorSpace::RGB => ColorType::Rgb,
        // alpha is dropped by the encoder
        ColorSpace::RGBA => ColorType::Rgba,
        colorspace => {
            return Err(ImageErrors::EncodeErrors(format!(
                "jpeg: unsupported colorspace {colorspace:?}"
            )))
        }
    };
    let (width, height) = image.dimensions();
    let width = u16::try_from(width)
        .map_err(|_| ImageErrors::EncodeErrors(format!("jpeg: width {width} too large")))?;
    let height = u16::try_from(height)
        .map_err(|_| ImageErrors::EncodeErrors(format!("jpeg: height {height} too large")))?;

    let mut output = Vec::new();
    let encoder = Encoder::new(&mut output, options.get_quality());

    encoder
        .encode(image.as_bytes(), width, height, color_type)
        .map_err(|e| ImageErrors::EncodeErrors(format!("jpeg: {e:?}")))?;

    Ok(output)
}

impl From<zune_jpeg::errors::DecodeErrors> for ImageErrors {
    fn from(from: zune_jpeg::errors::DecodeErrors) -> Self {
        let err = format!("jpeg: {from:?}");

        ImageErrors::ImageDecodeErrors(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_for(image: &PixelImage) -> EncoderOptions {
        crate::codecs::create_options_for_encoder(EncoderOptions::default().set_quality(95), image)
    }

    #[test]
    fn round_trip_keeps_dimensions() {
        let image = PixelImage::from_fn(33, 17, ColorSpace::RGB, |x, y| {
            [(x * 7) as u8, (y * 13) as u8, 128, 0]
        })
        .unwrap();

        let bytes = encode(&image, options_for(&image)).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.dimensions(), (33, 17));
        assert_eq!(decoded.depth(), BitDepth::Eight);
    }

    #[test]
    fn sixteen_bit_images_are_refused() {
        let image = PixelImage::from_u16(&[0; 3], 1, 1, ColorSpace::RGB).unwrap();
        let err = encode(&image, options_for(&image)).unwrap_err();

        assert!(matches!(err, ImageErrors::NotImplemented(_, BitDepth::Sixteen)));
    }

    #[test]
    fn luma_alpha_is_refused() {
        let image = PixelImage::from_u8(&[0; 2], 1, 1, ColorSpace::LumaA).unwrap();

        assert!(matches!(
            encode(&image, options_for(&image)),
            Err(ImageErrors::EncodeErrors(_))
        ));
    }
}
