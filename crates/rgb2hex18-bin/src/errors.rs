/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::io;

use hex18::{Hex18DecodeErrors, Hex18EncodeErrors};

/// Errors possible while running a conversion
pub enum ConvertErrors {
    /// The input path is too short to derive an output name from.
    /// The derivation overwrites the final three characters, so the
    /// path must be at least four characters long
    PathTooShort(String),
    /// The derivation point does not fall on a UTF-8 character
    /// boundary in the input path
    PathNotCharBoundary(String),
    /// The library failed to encode
    Encode(Hex18EncodeErrors),
    /// The library failed to decode
    Decode(Hex18DecodeErrors),
    /// Opening, reading or writing a file failed
    IoErrors(io::Error)
}

impl Debug for ConvertErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertErrors::PathTooShort(path) => {
                writeln!(
                    f,
                    "Path {path:?} is too short to derive an output name from, need at least 4 characters"
                )
            }
            ConvertErrors::PathNotCharBoundary(path) => {
                writeln!(
                    f,
                    "Cannot overwrite the last 3 characters of {path:?}, not a character boundary"
                )
            }
            ConvertErrors::Encode(err) => {
                writeln!(f, "Encoding failed: {err:?}")
            }
            ConvertErrors::Decode(err) => {
                writeln!(f, "Decoding failed: {err:?}")
            }
            ConvertErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl From<io::Error> for ConvertErrors {
    fn from(err: io::Error) -> Self {
        ConvertErrors::IoErrors(err)
    }
}

impl From<Hex18EncodeErrors> for ConvertErrors {
    fn from(err: Hex18EncodeErrors) -> Self {
        ConvertErrors::Encode(err)
    }
}

impl From<Hex18DecodeErrors> for ConvertErrors {
    fn from(err: Hex18DecodeErrors) -> Self {
        ConvertErrors::Decode(err)
    }
}
