/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Load, flip, mirror and save raster images
//!
//! The library keeps an image together with the path and format it came from
//! in a [`TrackedImage`](tracked::TrackedImage), applies geometric operations to it
//! and writes it back, either over the source or to a new path.
//!
//! # Example
//! - Flip an image upside down and save it as a new file
//! ```no_run
//! use std::path::Path;
//! use pixflip_image::tracked::TrackedImage;
//!
//! let mut image = TrackedImage::new();
//! image.load("input.png").unwrap();
//! image.flip_vertical().unwrap();
//! image.save(Some(Path::new("flipped.png"))).unwrap();
//! ```
//!
//! Operations can also be used on their own, see [`traits::OperationsTrait`].
//!
//! # Features
//! - `png`, `jpeg`, `bmp`: enable the respective codec
//! - `serde-support`: serialize [`metadata::ImageMetadata`] and [`codecs::ImageFormat`]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::new_without_default
)]

pub mod codecs;
pub mod errors;
pub mod grid;
pub mod image;
pub mod metadata;
pub mod ops;
pub mod pixel;
mod serde;
pub mod store;
pub mod tracked;
pub mod traits;
