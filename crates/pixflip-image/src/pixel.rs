/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single color sample
//!
//! A pixel is stored as the raw bytes of its channels, exactly as they are laid out
//! inside the image buffer. For 16 bit images each channel takes two bytes in native
//! endian order.

use std::fmt::{Debug, Formatter};

use crate::image::MAX_CHANNELS;

/// Largest number of bytes a pixel can occupy, four 16 bit channels
pub const MAX_PIXEL_BYTES: usize = MAX_CHANNELS * 2;

/// The color of a single image coordinate.
///
/// Pixels are copied by value, operations read a pixel from one image
/// and write it to a new image instead of editing it in place.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pixel {
    bytes:  [u8; MAX_PIXEL_BYTES],
    length: u8
}

impl Pixel {
    /// Create a pixel from its channel bytes
    ///
    /// # Panics
    /// If `bytes` is longer than [`MAX_PIXEL_BYTES`]
    pub fn from_bytes(bytes: &[u8]) -> Pixel {
        assert!(
            bytes.len() <= MAX_PIXEL_BYTES,
            "A pixel holds at most {MAX_PIXEL_BYTES} bytes, found {}",
            bytes.len()
        );
        let mut pixel = Pixel {
            bytes:  [0; MAX_PIXEL_BYTES],
            length: bytes.len() as u8
        };
        pixel.bytes[..bytes.len()].copy_from_slice(bytes);
        pixel
    }

    /// Create a pixel from 16 bit channel values
    pub fn from_u16(channels: &[u16]) -> Pixel {
        let mut bytes = [0_u8; MAX_PIXEL_BYTES];

        for (chunk, channel) in bytes.chunks_exact_mut(2).zip(channels) {
            chunk.copy_from_slice(&channel.to_ne_bytes());
        }
        Pixel::from_bytes(&bytes[..channels.len() * 2])
    }

    /// Return the raw channel bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.length)]
    }

    /// Number of bytes this pixel occupies
    pub const fn len(&self) -> usize {
        self.length as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Debug for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pixel({:?})", self.as_bytes())
    }
}
