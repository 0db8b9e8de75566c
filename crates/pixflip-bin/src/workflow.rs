/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdout, Write};

use log::{debug, info};
use pixflip_image::codecs::{ImageCodec, ImageFormat};
use pixflip_image::errors::ImageErrors;
use pixflip_image::store::FileStore;
use pixflip_image::tracked::TrackedImage;
use zune_core::options::EncoderOptions;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::operations::apply_operation;
use crate::probe_files::probe_input_file;

pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    if cmd_opts.probe {
        println!("{}", probe_input_file(&cmd_opts.input)?);
        return Ok(());
    }
    info!("Creating workflow from input");

    let mut image = TrackedImage::new();
    run_workflow(&mut image, cmd_opts, &mut stdout().lock())
}

/// Load, transform and save, writing status lines to `out`
pub(crate) fn run_workflow<C: ImageCodec, S: FileStore, W: Write>(
    image: &mut TrackedImage<C, S>, cmd_opts: &CmdOptions, out: &mut W
) -> Result<(), ImageErrors> {
    image.load(&cmd_opts.input)?;
    writeln!(out, "Loaded image: {}", cmd_opts.input.display())?;

    if let Some(format) = image.format() {
        writeln!(out, "Format: {}", format.name())?;
    }
    if let Some((width, height)) = image.dimensions() {
        writeln!(out, "Resolution: {width}x{height}")?;
    }

    for operation in &cmd_opts.operations {
        let status = apply_operation(image, *operation)?;
        writeln!(out, "{status}")?;
    }

    if let Some(factor) = cmd_opts.resize {
        image.resize(factor)?;
        writeln!(out, "Resize by {factor} accepted")?;
    }

    if let Some(format) = output_format(cmd_opts) {
        debug!("Encoding output as {:?}", format);
        image.set_format(format);
    }
    image.set_encoder_options(EncoderOptions::default().set_quality(cmd_opts.quality));

    image.save(cmd_opts.output.as_deref())?;

    let saved_to = cmd_opts.output.as_ref().unwrap_or(&cmd_opts.input);
    writeln!(out, "Saved image: {}", saved_to.display())?;
    writeln!(out, "All commands executed")?;

    Ok(())
}

/// Format requested for the output, `None` keeps the decoded format
///
/// An explicit `--format` wins, then the extension of the output path.
fn output_format(cmd_opts: &CmdOptions) -> Option<ImageFormat> {
    if let Some(format) = cmd_opts.format {
        return Some(format.to_image_format());
    }
    cmd_opts.output.as_deref().and_then(ImageFormat::from_path)
}
