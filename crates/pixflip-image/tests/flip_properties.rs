/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pixflip_image::grid::PixelGrid;
use pixflip_image::image::PixelImage;
use pixflip_image::ops::flip::{horizontal_flip, vertical_flip, Flip, FlipDirection};
use pixflip_image::ops::mirror::Mirror;
use pixflip_image::traits::OperationsTrait;
use zune_core::colorspace::ColorSpace;

const SIZES: [(usize, usize); 7] = [(1, 1), (1, 7), (7, 1), (2, 2), (3, 5), (10, 10), (17, 8)];

fn random_image(rng: &mut WyRand, width: usize, height: usize, colorspace: ColorSpace) -> PixelImage {
    let mut data = vec![0_u8; width * height * colorspace.num_components()];
    rng.fill(&mut data);

    PixelImage::from_u8(&data, width, height, colorspace).unwrap()
}

fn random_image_16(rng: &mut WyRand, width: usize, height: usize) -> PixelImage {
    let mut data = vec![0_u16; width * height * 3];
    rng.fill(&mut data);

    PixelImage::from_u16(&data, width, height, ColorSpace::RGB).unwrap()
}

#[test]
fn double_flip_is_identity() {
    let mut rng = WyRand::new_seed(42);

    for (width, height) in SIZES {
        for colorspace in [ColorSpace::Luma, ColorSpace::LumaA, ColorSpace::RGB, ColorSpace::RGBA] {
            let image = random_image(&mut rng, width, height, colorspace);

            assert_eq!(vertical_flip(&vertical_flip(&image)), image, "{width}x{height}");
            assert_eq!(horizontal_flip(&horizontal_flip(&image)), image, "{width}x{height}");
        }
        let image = random_image_16(&mut rng, width, height);
        assert_eq!(vertical_flip(&vertical_flip(&image)), image);
    }
}

#[test]
fn flips_move_every_pixel_to_its_partner() {
    let mut rng = WyRand::new_seed(7);

    for (width, height) in SIZES {
        let image = random_image(&mut rng, width, height, ColorSpace::RGB);
        let vertical = vertical_flip(&image);
        let horizontal = horizontal_flip(&image);

        assert_eq!(vertical.dimensions(), (width, height));
        assert_eq!(horizontal.dimensions(), (width, height));

        for x in 0..width {
            for y in 0..height {
                assert_eq!(vertical.at(x, y), image.at(x, height - 1 - y));
                assert_eq!(horizontal.at(x, y), image.at(width - 1 - x, y));
            }
        }
    }
}

#[test]
fn odd_sizes_keep_their_centre_lines() {
    let mut rng = WyRand::new_seed(3);
    let image = random_image(&mut rng, 9, 11, ColorSpace::RGBA);

    let vertical = PixelGrid::extract(&vertical_flip(&image));
    let horizontal = PixelGrid::extract(&horizontal_flip(&image));
    let source = PixelGrid::extract(&image);

    for x in 0..9 {
        assert_eq!(vertical[x][5], source[x][5]);
    }
    assert_eq!(horizontal[4], source[4]);
}

#[test]
fn mirror_is_both_flips_in_either_order() {
    let mut rng = WyRand::new_seed(99);

    for (width, height) in SIZES {
        let image = random_image(&mut rng, width, height, ColorSpace::RGB);
        let mirrored = Mirror::new().execute(Some(&image)).unwrap();

        assert_eq!(mirrored, horizontal_flip(&vertical_flip(&image)));
        assert_eq!(mirrored, vertical_flip(&horizontal_flip(&image)));

        for x in 0..width {
            for y in 0..height {
                assert_eq!(mirrored.at(x, y), image.at(width - 1 - x, height - 1 - y));
            }
        }
        // mirroring twice restores the image
        assert_eq!(Mirror::new().execute(Some(&mirrored)).unwrap(), image);
    }
}

#[test]
fn operations_keep_colorspace_and_depth() {
    let mut rng = WyRand::new_seed(11);
    let image = random_image_16(&mut rng, 5, 4);

    for direction in [FlipDirection::Vertical, FlipDirection::Horizontal] {
        let output = Flip::new(direction).execute(Some(&image)).unwrap();

        assert_eq!(output.colorspace(), image.colorspace());
        assert_eq!(output.depth(), image.depth());
    }
}
