/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding support for the hex18 record format
use std::fmt::{Debug, Formatter};

use log::info;

use crate::{unpack_rgb18, MAX_PACKED_VALUE, RECORD_LENGTH};

/// Errors possible during decoding
pub enum Hex18DecodeErrors {
    /// A record whose length is not exactly five digits.
    /// Carries the one-based line number and the length found
    InvalidRecordLength(usize, usize),
    /// A character that is not a hexadecimal digit.
    /// Carries the one-based line number and the offending character
    InvalidHexDigit(usize, char),
    /// A record above [`MAX_PACKED_VALUE`], i.e. one whose top
    /// two bits are set. Carries the one-based line number and the value
    ValueOutOfRange(usize, u32)
}

impl Debug for Hex18DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Hex18DecodeErrors::InvalidRecordLength(line, length) => {
                writeln!(
                    f,
                    "Expected a record of {RECORD_LENGTH} digits on line {line} but found {length}"
                )
            }
            Hex18DecodeErrors::InvalidHexDigit(line, ch) => {
                writeln!(f, "Invalid hex digit {ch:?} on line {line}")
            }
            Hex18DecodeErrors::ValueOutOfRange(line, value) => {
                writeln!(
                    f,
                    "Value {value:#X} on line {line} does not fit in 18 bits"
                )
            }
        }
    }
}

/// A hex18 decoder
///
/// Parses newline separated records of five hex digits back into raw
/// 8-bit RGB triplets. The two low bits dropped by quantization come
/// back as zero, so decoding is the lossy inverse of encoding.
///
/// Digits are accepted in either case on input, a trailing newline
/// after the final record is optional and empty input decodes to an
/// empty pixel buffer.
///
/// # Example
/// ```
/// use hex18::Hex18Decoder;
///
/// let pixels = Hex18Decoder::new(b"3F080\n").decode().unwrap();
///
/// assert_eq!(&pixels, &[252, 8, 0]);
/// ```
pub struct Hex18Decoder<'a> {
    data: &'a [u8]
}

impl<'a> Hex18Decoder<'a> {
    /// Create a new decoder which will parse the specified
    /// hex18 encoded text
    pub fn new(data: &'a [u8]) -> Hex18Decoder<'a> {
        Hex18Decoder { data }
    }

    /// Decode the records returning the raw RGB bytes, three per
    /// record, or the first error encountered
    pub fn decode(&self) -> Result<Vec<u8>, Hex18DecodeErrors> {
        let mut pixels = Vec::with_capacity((self.data.len() / (RECORD_LENGTH + 1)) * 3);

        for (number, line) in self.data.split(|x| *x == b'\n').enumerate() {
            // the split after a trailing newline yields an empty slice
            if line.is_empty() {
                continue;
            }
            let line_number = number + 1;

            if line.len() != RECORD_LENGTH {
                return Err(Hex18DecodeErrors::InvalidRecordLength(
                    line_number,
                    line.len()
                ));
            }
            let mut color = 0_u32;

            for byte in line {
                let digit = (*byte as char)
                    .to_digit(16)
                    .ok_or(Hex18DecodeErrors::InvalidHexDigit(
                        line_number,
                        *byte as char
                    ))?;

                color = (color << 4) | digit;
            }

            if color > MAX_PACKED_VALUE {
                return Err(Hex18DecodeErrors::ValueOutOfRange(line_number, color));
            }

            pixels.extend_from_slice(&unpack_rgb18(color));
        }
        info!("Decoded {} pixels", pixels.len() / 3);

        Ok(pixels)
    }
}
