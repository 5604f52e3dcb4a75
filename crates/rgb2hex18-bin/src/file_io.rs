/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::Read;

use log::debug;

use crate::errors::ConvertErrors;

/// Length of the suffix spliced onto the input path,
/// `hex` when encoding, `rgb` when decoding
const SUFFIX_LENGTH: usize = 3;

/// Read at most `capacity` bytes from the file at `path`.
///
/// A short file simply yields fewer bytes, anything past the cap is
/// left unread. The handle is dropped once the read completes.
pub fn read_input_bounded(path: &str, capacity: usize) -> Result<Vec<u8>, ConvertErrors> {
    let fd = File::open(path)?;
    let mut data = Vec::new();

    fd.take(capacity as u64).read_to_end(&mut data)?;

    debug!("Read {} bytes from {}", data.len(), path);

    Ok(data)
}

/// Derive the output path by overwriting the final three characters
/// of `path` with `suffix`.
///
/// This is a literal tail overwrite, not an extension swap, `a.rgb`
/// becomes `a.hex` but so does `abcd` become `ahex`. Paths shorter
/// than four characters are rejected, as is a path whose overwrite
/// point splits a multi-byte character.
pub fn derive_output_path(path: &str, suffix: &str) -> Result<String, ConvertErrors> {
    debug_assert_eq!(suffix.len(), SUFFIX_LENGTH);

    if path.len() <= SUFFIX_LENGTH {
        return Err(ConvertErrors::PathTooShort(path.to_string()));
    }
    let cut = path.len() - SUFFIX_LENGTH;

    if !path.is_char_boundary(cut) {
        return Err(ConvertErrors::PathNotCharBoundary(path.to_string()));
    }

    Ok(format!("{}{}", &path[..cut], suffix))
}
