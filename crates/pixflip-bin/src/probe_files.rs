/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::Path;

use pixflip_image::errors::ImageErrors;
use pixflip_image::tracked::TrackedImage;

use crate::serde::Metadata;

/// Load the input file, extract metadata and render it as pretty json
pub fn probe_input_file(path: &Path) -> Result<String, ImageErrors> {
    let size = fs::metadata(path)?.len();

    let mut image = TrackedImage::new();
    image.load(path)?;

    let metadata = image.metadata().ok_or(ImageErrors::NoImageLoaded)?;
    let real_metadata = Metadata::new(path.as_os_str().to_os_string(), size, &metadata);

    serde_json::to_string_pretty(&real_metadata)
        .map_err(|x| ImageErrors::GenericString(format!("Could not serialize metadata: {x}")))
}

#[cfg(test)]
mod tests {
    use pixflip_image::codecs::{ImageCodec, ImageFormat, ZuneCodec};
    use pixflip_image::image::PixelImage;
    use pixflip_image::pixel::Pixel;
    use pixflip_image::store::{DiskStore, FileStore};
    use zune_core::bit_depth::BitDepth;
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::EncoderOptions;

    use super::*;

    #[test]
    fn probe_reports_format_and_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("probe.png");

        let image = PixelImage::fill(Pixel::from_bytes(&[1, 2, 3]), 7, 3, ColorSpace::RGB, BitDepth::Eight).unwrap();
        let bytes = ZuneCodec::new()
            .encode(&image, ImageFormat::PNG, EncoderOptions::default())
            .unwrap();
        DiskStore::new().write(&path, &bytes).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&probe_input_file(&path).unwrap()).unwrap();

        assert_eq!(json["file_size"], bytes.len() as u64);
        assert_eq!(json["metadata"]["width"], 7);
        assert_eq!(json["metadata"]["height"], 3);
        assert_eq!(json["metadata"]["format"], "png");
    }

    #[test]
    fn probing_a_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            probe_input_file(&dir.path().join("missing.png")),
            Err(ImageErrors::Io(_))
        ));
    }
}
