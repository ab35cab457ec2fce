// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! On-flash layout of the VPD record.
//!
//! ```text
//! offset  size  field
//!      0     1  magic ('V')
//!      1     1  version (1)
//!      2    15  serial, ASCII, not necessarily NUL terminated
//!     17     6  base MAC address, big-endian
//!     23     1  CRC-8 over bytes 0..=22
//! ```
//!
//! Every field is decoded individually from its offset, nothing relies on
//! host struct layout.

use log::debug;

use crate::crc8::crc8;
use crate::error::{Result, VpdError};
use crate::mac::MacAddr;

pub const VPD_MAGIC: u8 = b'V';
pub const VPD_VERSION: u8 = 1;

pub const SERIAL_LEN: usize = 15;
const MAC_LEN: usize = 6;

const MAGIC_OFFSET: usize = 0;
const VERSION_OFFSET: usize = 1;
const SERIAL_OFFSET: usize = 2;
const MAC_OFFSET: usize = SERIAL_OFFSET + SERIAL_LEN;
const CRC_OFFSET: usize = MAC_OFFSET + MAC_LEN;

/// Size of the record on flash.
pub const VPD_RECORD_SIZE: usize = CRC_OFFSET + 1;

/// A validated VPD record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VpdRecord {
    serial: [u8; SERIAL_LEN],
    base_mac: MacAddr,
}

impl VpdRecord {
    /// Builds a record from a serial and a base MAC address. Serials longer
    /// than the field are truncated, shorter ones are padded with NUL.
    pub fn new(serial: &[u8], base_mac: MacAddr) -> Self {
        let mut field = [0u8; SERIAL_LEN];
        let len = serial.len().min(SERIAL_LEN);
        field[..len].copy_from_slice(&serial[..len]);
        VpdRecord {
            serial: field,
            base_mac,
        }
    }

    /// Decodes and validates a raw record. Checks run in the order magic,
    /// version, checksum and the first failure is returned.
    pub fn parse(raw: &[u8; VPD_RECORD_SIZE]) -> Result<Self> {
        let magic = raw[MAGIC_OFFSET];
        if magic != VPD_MAGIC {
            return Err(VpdError::MagicMismatch(magic));
        }

        let version = raw[VERSION_OFFSET];
        if version != VPD_VERSION {
            return Err(VpdError::VersionMismatch(version));
        }

        let computed = crc8(&raw[..CRC_OFFSET]);
        let stored = raw[CRC_OFFSET];
        if computed != stored {
            return Err(VpdError::ChecksumMismatch { computed, stored });
        }
        debug!("VPD checksum ok ({:02X}h)", stored);

        let mut serial = [0u8; SERIAL_LEN];
        serial.copy_from_slice(&raw[SERIAL_OFFSET..MAC_OFFSET]);
        let mut mac = [0u8; MAC_LEN];
        mac.copy_from_slice(&raw[MAC_OFFSET..CRC_OFFSET]);

        Ok(VpdRecord {
            serial,
            base_mac: MacAddr::new(mac),
        })
    }

    /// Encodes the record, computing a fresh checksum.
    pub fn to_bytes(&self) -> [u8; VPD_RECORD_SIZE] {
        let mut raw = [0u8; VPD_RECORD_SIZE];
        raw[MAGIC_OFFSET] = VPD_MAGIC;
        raw[VERSION_OFFSET] = VPD_VERSION;
        raw[SERIAL_OFFSET..MAC_OFFSET].copy_from_slice(&self.serial);
        raw[MAC_OFFSET..CRC_OFFSET].copy_from_slice(&self.base_mac.octets());
        raw[CRC_OFFSET] = crc8(&raw[..CRC_OFFSET]);
        raw
    }

    /// The raw serial field, all 15 bytes including any NUL padding.
    pub fn serial(&self) -> &[u8; SERIAL_LEN] {
        &self.serial
    }

    pub fn base_mac(&self) -> MacAddr {
        self.base_mac
    }
}
