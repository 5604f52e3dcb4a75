/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the hex18 record format
use std::fmt::{Debug, Formatter};
use std::io;
use std::io::Write;

use log::trace;

use crate::{pack_rgb18, RECORD_LENGTH};

/// Errors possible during encoding
pub enum Hex18EncodeErrors {
    /// An underlying I/O error from the sink the records
    /// are written to
    IoErrors(io::Error)
}

impl Debug for Hex18EncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Hex18EncodeErrors::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl From<io::Error> for Hex18EncodeErrors {
    fn from(err: io::Error) -> Self {
        Hex18EncodeErrors::IoErrors(err)
    }
}

/// A hex18 encoder
///
/// Interprets its input as a flat sequence of 8-bit RGB triplets,
/// there is no header and no dimensions, and writes one record per
/// triplet.
///
/// Input whose length is not a multiple of three carries a partial
/// trailing pixel, the leftover one or two bytes are dropped silently.
///
/// # Example
/// ```
/// use hex18::Hex18Encoder;
///
/// let pixels = [0, 0, 0, 255, 255, 255];
/// let mut sink = vec![];
///
/// let records = Hex18Encoder::new(&pixels).encode(&mut sink).unwrap();
///
/// assert_eq!(records, 2);
/// assert_eq!(&sink, b"00000\n3FFFF\n");
/// ```
pub struct Hex18Encoder<'a> {
    data: &'a [u8]
}

impl<'a> Hex18Encoder<'a> {
    /// Create a new encoder which will encode the specified
    /// raw RGB bytes
    ///
    /// # Arguments
    /// - data: Raw pixels, three bytes per pixel in R,G,B order
    pub fn new(data: &'a [u8]) -> Hex18Encoder<'a> {
        Hex18Encoder { data }
    }

    /// Encode the contents into `sink`, one record per complete
    /// triplet, returning the number of records written.
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<usize, Hex18EncodeErrors> {
        let mut records = 0;

        for pixel in self.data.chunks_exact(3) {
            let color = pack_rgb18(pixel[0], pixel[1], pixel[2]);

            writeln!(sink, "{color:05X}")?;
            records += 1;
        }
        trace!("Encoded {} records", records);

        Ok(records)
    }

    /// Encode the contents returning a vector containing the
    /// encoded records or an error if writing fails
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, Hex18EncodeErrors> {
        let mut sink = Vec::with_capacity((self.data.len() / 3) * (RECORD_LENGTH + 1));

        self.encode(&mut sink)?;

        Ok(sink)
    }
}

#[cfg(test)]
mod tests {
    use crate::Hex18Encoder;

    #[test]
    fn encode_single_pixel() {
        let out = Hex18Encoder::new(&[252, 8, 0]).encode_to_vec().unwrap();
        assert_eq!(&out, b"3F080\n");
    }

    #[test]
    fn encode_pads_to_five_digits() {
        let out = Hex18Encoder::new(&[0, 0, 4]).encode_to_vec().unwrap();
        assert_eq!(&out, b"00001\n");
    }

    #[test]
    fn encode_empty_input() {
        let out = Hex18Encoder::new(&[]).encode_to_vec().unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn encode_drops_partial_trailing_pixel() {
        // 3n+1 and 3n+2 byte inputs produce n records
        let mut sink = vec![];
        let records = Hex18Encoder::new(&[1, 2, 3, 4]).encode(&mut sink).unwrap();
        assert_eq!(records, 1);

        let mut sink = vec![];
        let records = Hex18Encoder::new(&[1, 2, 3, 4, 5])
            .encode(&mut sink)
            .unwrap();
        assert_eq!(records, 1);

        // fewer than three bytes means no records at all
        let out = Hex18Encoder::new(&[200, 100]).encode_to_vec().unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn encode_record_count_matches_pixels() {
        let data = vec![127_u8; 3 * 21];
        let mut sink = vec![];

        let records = Hex18Encoder::new(&data).encode(&mut sink).unwrap();

        assert_eq!(records, 21);
        assert_eq!(sink.iter().filter(|x| **x == b'\n').count(), 21);
    }
}
