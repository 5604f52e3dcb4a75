/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use clap::ArgMatches;
use hex18::{Hex18Decoder, Hex18Encoder};
use log::{debug, info};

use crate::cmd_parsers::CmdOptions;
use crate::errors::ConvertErrors;
use crate::file_io::{derive_output_path, read_input_bounded};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ConvertErrors> {
    let in_file = args.get_one::<String>("in").unwrap();

    let suffix = if cmd_opts.decode { "rgb" } else { "hex" };

    // derive the name before touching the filesystem so a bad path
    // never leaves a half-written output behind
    let out_file = derive_output_path(in_file, suffix)?;

    info!("Converting {} to {}", in_file, out_file);

    let data = read_input_bounded(in_file, cmd_opts.max_input_size)?;

    let fd = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&out_file)?;

    let mut sink = BufWriter::new(fd);

    if cmd_opts.decode {
        let pixels = Hex18Decoder::new(&data).decode()?;

        sink.write_all(&pixels)?;
        debug!("Wrote {} pixel bytes", pixels.len());
    } else {
        let records = Hex18Encoder::new(&data).encode(&mut sink)?;

        debug!("Wrote {} records", records);
    }
    sink.flush()?;

    info!("Finished writing {}", out_file);

    Ok(())
}
