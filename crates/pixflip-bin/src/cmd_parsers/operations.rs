/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::debug;
use pixflip_image::codecs::ImageCodec;
use pixflip_image::errors::ImageErrors;
use pixflip_image::store::FileStore;
use pixflip_image::tracked::TrackedImage;

use crate::cmd_args::Operation;

/// Run `operation` on `image`, returning the status line to report
pub fn apply_operation<C: ImageCodec, S: FileStore>(
    image: &mut TrackedImage<C, S>, operation: Operation
) -> Result<&'static str, ImageErrors> {
    debug!("Running {:?}", operation);

    match operation {
        Operation::FlipVertical => {
            image.flip_vertical()?;
            Ok("Vertically flipped image successfully")
        }
        Operation::FlipHorizontal => {
            image.flip_horizontal()?;
            Ok("Horizontally flipped image successfully")
        }
        Operation::Mirror => {
            image.mirror()?;
            Ok("Mirrored image successfully")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_need_a_loaded_image() {
        let mut image = TrackedImage::new();

        for operation in [Operation::FlipVertical, Operation::FlipHorizontal, Operation::Mirror] {
            assert!(matches!(
                apply_operation(&mut image, operation),
                Err(ImageErrors::NoImageLoaded)
            ));
        }
    }
}
