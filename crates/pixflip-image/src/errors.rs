/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image loading, processing and saving
use std::fmt::{Debug, Display, Formatter};

use zune_core::bit_depth::BitDepth;

use crate::codecs::ImageFormat;

/// All possible image errors that can occur.
///
/// This contains decoding, processing, encoding and
/// file errors, every fallible function in the crate
/// returns this type.
pub enum ImageErrors {
    /// Opening, creating, reading or writing a file failed
    Io(std::io::Error),
    /// The container bytes could not be decoded
    ImageDecodeErrors(String),
    /// The encoder refused or failed to encode the image
    EncodeErrors(String),
    /// The format has no encoder
    UnsupportedFormat(ImageFormat),
    /// An operation or save was requested but no image is present
    NoImageLoaded,
    /// The operation does not support images of this depth
    NotImplemented(&'static str, BitDepth),
    /// Resize factor out of the accepted range
    InvalidModifier(f64),
    /// Sample buffer length did not match the image dimensions,
    /// expected, found
    DimensionsMisMatch(usize, usize),
    /// Width or height was zero
    ZeroDimensions(usize, usize),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::ImageDecodeErrors(err) => writeln!(f, "Decoding failed: {err}"),
            Self::EncodeErrors(err) => writeln!(f, "Encoding failed: {err}"),
            Self::UnsupportedFormat(format) => {
                writeln!(f, "Unsupported format: {format:?} has no encoder")
            }
            Self::NoImageLoaded => {
                writeln!(f, "No image data, you must load the image first")
            }
            Self::NotImplemented(operation, depth) => {
                writeln!(f, "{operation} is not implemented for images of depth {depth:?}")
            }
            Self::InvalidModifier(factor) => {
                writeln!(f, "Unsupported image resize modifier {factor}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions {width}x{height} contain a zero")
            }
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Debug already carries the human readable message
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(err: std::io::Error) -> Self {
        ImageErrors::Io(err)
    }
}

impl From<String> for ImageErrors {
    fn from(s: String) -> ImageErrors {
        ImageErrors::GenericString(s)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(s: &'static str) -> ImageErrors {
        ImageErrors::GenericStr(s)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io::ErrorKind;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = ImageErrors::from(std::io::Error::new(ErrorKind::NotFound, "gone"));

        assert!(matches!(err, ImageErrors::Io(_)));
        assert!(err.source().is_some());
        assert!(format!("{err}").contains("gone"));
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = ImageErrors::InvalidModifier(1.005);
        assert!(format!("{err:?}").contains("1.005"));

        let err = ImageErrors::UnsupportedFormat(ImageFormat::BMP);
        assert!(format!("{err}").contains("BMP"));
    }
}
