/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use clap::error::ErrorKind;
use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    // missing or malformed arguments exit with status 1,
    // not clap's default of 2. Help and version requests also ride
    // clap's error path but they are not failures
    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        Err(err) => {
            let _ = err.print();

            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit(0),
                _ => exit(1)
            }
        }
    };

    cmd_parsers::setup_logger(&options);

    let parsed_opts = cmd_parsers::parse_options(&options);

    let result = create_and_exec_workflow_from_cmd(&options, &parsed_opts);

    if result.is_err() {
        println!();
        error!(
            " Could not complete conversion, reason {:?}",
            result.err().unwrap()
        );

        println!();
        exit(1);
    }
}
