/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Options shared by the whole conversion, parsed once
/// from the command line
#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decode:         bool,
    pub max_input_size: usize
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decode:         false,
            max_input_size: 65536
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if *options.get_one::<bool>("decode").unwrap() {
        info!("Running in decode mode");
        cmd_options.decode = true;
    }

    // has a clap default, always present
    let max_input_size = *options.get_one::<usize>("max-input-size").unwrap();

    cmd_options.max_input_size = max_input_size;

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
