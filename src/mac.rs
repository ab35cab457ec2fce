// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fmt;

const MAC_LEN: usize = 6;
const MAC_MASK: u64 = (1 << (8 * MAC_LEN)) - 1;

/// An Ethernet MAC address, octets in transmission (big-endian) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacAddr {
    octets: [u8; MAC_LEN],
}

impl MacAddr {
    pub const fn new(octets: [u8; MAC_LEN]) -> Self {
        MacAddr { octets }
    }

    pub fn octets(&self) -> [u8; MAC_LEN] {
        self.octets
    }

    fn to_u64(self) -> u64 {
        self.octets
            .iter()
            .fold(0u64, |val, &octet| (val << 8) | u64::from(octet))
    }

    fn from_u64(val: u64) -> Self {
        let bytes = (val & MAC_MASK).to_be_bytes();
        let mut octets = [0u8; MAC_LEN];
        octets.copy_from_slice(&bytes[bytes.len() - MAC_LEN..]);
        MacAddr { octets }
    }

    /// Returns the address `offset` positions away from this one, treating
    /// the octets as a 48-bit integer that wraps around in both directions.
    pub fn with_offset(self, offset: i64) -> Self {
        Self::from_u64(self.to_u64().wrapping_add(offset as u64))
    }
}

impl From<[u8; MAC_LEN]> for MacAddr {
    fn from(octets: [u8; MAC_LEN]) -> Self {
        MacAddr::new(octets)
    }
}

// Always two digits per octet; libc's ether_ntoa() drops leading zeros.
impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d, e, g] = self.octets;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}
