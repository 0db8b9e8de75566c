/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use pixflip_image::codecs::ImageFormat;

use crate::cmd_args::help_strings::{AFTER_HELP, FORMAT_HELP, OPERATION_HELP, RESIZE_HELP};

pub mod help_strings;

/// Geometric operations selectable from the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    FlipVertical,
    FlipHorizontal,
    Mirror
}

impl ValueEnum for Operation {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::FlipVertical, Self::FlipHorizontal, Self::Mirror]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::FlipVertical => PossibleValue::new("flip-vertical"),
            Self::FlipHorizontal => PossibleValue::new("flip-horizontal"),
            Self::Mirror => PossibleValue::new("mirror")
        })
    }
}

/// Formats that can be written
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Png,
    Jpeg
}

impl OutputFormat {
    pub const fn to_image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::PNG,
            Self::Jpeg => ImageFormat::JPEG
        }
    }
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Png, Self::Jpeg]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Png => PossibleValue::new("png"),
            Self::Jpeg => PossibleValue::new("jpeg").alias("jpg")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixflip")
        .about("Flip, mirror and convert png, jpeg and bmp images")
        .after_help(AFTER_HELP)
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to, defaults to overwriting the input")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image metadata as json and exit"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about loading and saving"))
        .arg(Arg::new("operation")
            .long("operation")
            .help_heading("OPERATIONS")
            .action(ArgAction::Append)
            .help("Apply a geometric operation, can be repeated")
            .long_help(OPERATION_HELP)
            .value_parser(value_parser!(Operation)))
        .arg(Arg::new("resize")
            .long("resize")
            .help_heading("OPERATIONS")
            .help("Resize the image by a factor")
            .long_help(RESIZE_HELP)
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("format")
            .long("format")
            .help_heading("ENCODING")
            .help("Force the output format")
            .long_help(FORMAT_HELP)
            .value_parser(value_parser!(OutputFormat)))
        .arg(Arg::new("quality")
            .long("quality")
            .help_heading("ENCODING")
            .help("Jpeg encoding quality")
            .default_value("80")
            .value_parser(value_parser!(u8).range(1..=100)))
}
