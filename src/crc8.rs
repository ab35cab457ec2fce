// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! CRC-8/ITU-T as used by the VPD record: polynomial 0x07, init 0x00, no
//! reflection and no final XOR.

const POLYNOMIAL: u8 = 0x07;

pub fn crc8(buf: &[u8]) -> u8 {
    buf.iter().fold(0x00, |crc, byte| {
        (0..8).fold(crc ^ byte, |crc, _| {
            if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            }
        })
    })
}
