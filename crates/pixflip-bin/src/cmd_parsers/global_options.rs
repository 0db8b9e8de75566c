/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level, SetLoggerError};
use pixflip_image::errors::ImageErrors;

use crate::cmd_args::{Operation, OutputFormat};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:      PathBuf,
    pub output:     Option<PathBuf>,
    pub operations: Vec<Operation>,
    pub resize:     Option<f64>,
    pub format:     Option<OutputFormat>,
    pub quality:    u8,
    pub probe:      bool
}

impl CmdOptions {
    pub fn new(input: PathBuf) -> CmdOptions {
        CmdOptions {
            input,
            output: None,
            operations: vec![],
            resize: None,
            format: None,
            quality: 80,
            probe: false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, ImageErrors> {
    let input = options
        .get_one::<PathBuf>("in")
        .ok_or(ImageErrors::GenericStr("No input file given"))?;

    let mut cmd_options = CmdOptions::new(input.clone());

    cmd_options.output = options.get_one::<PathBuf>("out").cloned();
    cmd_options.resize = options.get_one::<f64>("resize").copied();
    cmd_options.format = options.get_one::<OutputFormat>("format").copied();
    cmd_options.probe = options.get_flag("probe");

    if let Some(quality) = options.get_one::<u8>("quality") {
        if options.value_source("quality") == Some(ValueSource::CommandLine) {
            info!("Setting jpeg quality to {quality}");
        }
        cmd_options.quality = *quality;
    }

    // values come back in command line order
    cmd_options.operations = options
        .get_many::<Operation>("operation")
        .map(|ops| ops.copied().collect())
        .unwrap_or_default();

    if cmd_options.operations.is_empty() {
        info!("No operation given, defaulting to a vertical flip");
        cmd_options.operations.push(Operation::FlipVertical);
    }
    Ok(cmd_options)
}

/// Pick the log level from the logging flags, warn if none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) -> Result<(), SetLoggerError> {
    let log_level = log_level(options);

    simple_logger::init_with_level(log_level)?;

    info!("Initialized logger");
    info!("Log level :{}", log_level);

    Ok(())
}
