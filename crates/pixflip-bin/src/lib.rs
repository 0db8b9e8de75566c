/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    if let Err(e) = cmd_parsers::global_options::setup_logger(&options) {
        eprintln!("Could not initialize logger: {e}");
    }

    let result = cmd_parsers::global_options::parse_options(&options)
        .and_then(|parsed_opts| create_and_exec_workflow_from_cmd(&parsed_opts));

    if let Err(reason) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", reason);

        println!();
        exit(-1);
    }
}
