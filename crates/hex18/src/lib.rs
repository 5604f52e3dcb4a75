/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A hex18 encoder and decoder
//!
//! hex18 is a plain-text rendition of a raw RGB pixel dump where every
//! pixel is quantized from 8 to 6 bits per channel and packed into a
//! single 18-bit integer
//!
//! ```text
//! bit 17..12 -> red
//! bit 11..6  -> green
//! bit 5..0   -> blue
//! ```
//!
//! Each packed value is written as one line of exactly five uppercase,
//! zero padded hexadecimal digits followed by a newline. Since the
//! packed value occupies 18 bits and five hex digits hold 20, the top
//! two bits of every record are always zero.
//!
//! # Example
//! ```
//! use hex18::Hex18Encoder;
//!
//! // one pixel, nearly saturated red
//! let pixels = [252, 8, 0];
//! let out = Hex18Encoder::new(&pixels).encode_to_vec().unwrap();
//!
//! assert_eq!(&out, b"3F080\n");
//! ```
pub use crate::decoder::*;
pub use crate::encoder::*;

mod decoder;
mod encoder;

/// Largest value a packed 18-bit color can take, all three
/// channels saturated
pub const MAX_PACKED_VALUE: u32 = 0x3FFFF;

/// Number of hex digits in one record, excluding the newline
pub const RECORD_LENGTH: usize = 5;

/// Quantize an 8-bit RGB triplet to 6 bits per channel and pack the
/// channels into a single 18-bit value.
///
/// Quantization truncates, it never rounds.
///
/// # Example
/// ```
/// use hex18::pack_rgb18;
///
/// assert_eq!(pack_rgb18(255, 255, 255), 0x3FFFF);
/// assert_eq!(pack_rgb18(0, 0, 0), 0);
/// ```
#[inline]
pub const fn pack_rgb18(r: u8, g: u8, b: u8) -> u32 {
    (((r >> 2) as u32) << 12) | (((g >> 2) as u32) << 6) | ((b >> 2) as u32)
}

/// Expand a packed 18-bit color back to an 8-bit RGB triplet.
///
/// The lossy inverse of [`pack_rgb18`], the two low bits dropped by
/// quantization come back as zero.
#[inline]
pub const fn unpack_rgb18(color: u32) -> [u8; 3] {
    [
        (((color >> 12) & 0x3F) as u8) << 2,
        (((color >> 6) & 0x3F) as u8) << 2,
        ((color & 0x3F) as u8) << 2
    ]
}
