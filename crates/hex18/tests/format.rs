/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use hex18::{pack_rgb18, Hex18Decoder, Hex18Encoder, MAX_PACKED_VALUE};

#[test]
fn three_byte_aligned_input_gives_one_line_per_pixel() {
    let data: Vec<u8> = (0..=255).collect();
    let out = Hex18Encoder::new(&data[..252]).encode_to_vec().unwrap();

    let lines: Vec<&[u8]> = out.split(|x| *x == b'\n').filter(|l| !l.is_empty()).collect();

    assert_eq!(lines.len(), 84);
    assert!(lines.iter().all(|l| l.len() == 5));
}

#[test]
fn records_are_uppercase_and_zero_padded() {
    let out = Hex18Encoder::new(&[255, 255, 255, 0, 0, 0, 0, 0, 255])
        .encode_to_vec()
        .unwrap();

    assert_eq!(&out, b"3FFFF\n00000\n0003F\n");
}

#[test]
fn packed_values_stay_in_range() {
    for r in (0..=255).step_by(17) {
        for g in (0..=255).step_by(17) {
            for b in (0..=255).step_by(17) {
                let packed = pack_rgb18(r as u8, g as u8, b as u8);

                assert_eq!(
                    packed,
                    ((r / 4) << 12 | (g / 4) << 6 | (b / 4)) as u32
                );
                assert!(packed <= MAX_PACKED_VALUE);
            }
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let data = [13_u8, 77, 200, 4, 0, 251];

    let first = Hex18Encoder::new(&data).encode_to_vec().unwrap();
    let second = Hex18Encoder::new(&data).encode_to_vec().unwrap();

    assert_eq!(first, second);
}

#[test]
fn decoder_recovers_quantized_pixels() {
    // quantization truncates each channel to a multiple of 4,
    // those survive a full cycle exactly
    let data = [252_u8, 8, 0, 100, 40, 4];

    let encoded = Hex18Encoder::new(&data).encode_to_vec().unwrap();
    let decoded = Hex18Decoder::new(&encoded).decode().unwrap();

    assert_eq!(&decoded, &data);
}

#[test]
fn decoder_rejects_blank_padded_record() {
    let err = Hex18Decoder::new(b"   1F\n").decode().unwrap_err();

    assert!(matches!(err, hex18::Hex18DecodeErrors::InvalidHexDigit(1, ' ')));
}
