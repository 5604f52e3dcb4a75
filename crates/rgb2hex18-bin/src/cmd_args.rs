/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("rgb2hex18")
        .about("Convert raw RGB pixel dumps to packed 18-bit hex records")
        .arg(Arg::new("in")
            .help("Input file to read data from")
            .required(true))
        .arg(Arg::new("decode")
            .long("decode")
            .short('d')
            .action(ArgAction::SetTrue)
            .help("Treat the input as hex18 text and emit raw RGB bytes")
            .long_help("Run the conversion in reverse.\nThe input is parsed as newline separated 5-digit hex records and the output\nis the raw RGB byte dump they encode, with the derived name ending in `rgb`."))
        .arg(Arg::new("max-input-size")
            .long("max-input-size")
            .help_heading("ADVANCED")
            .help("Maximum number of bytes read from the input file")
            .long_help("Cap on how many bytes are read from the input.\nAnything past the cap is ignored rather than streamed.")
            .value_parser(value_parser!(usize))
            .default_value("65536"))
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
            .help("Display information about the conversion"))
}
