// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Reads the vendor product data (VPD) record, a serial number and a base MAC
//! address, from the user OTP area of an MTD flash device.

pub mod crc8;
pub mod error;
pub mod mac;
pub mod mtd;
pub mod output;
pub mod record;

use std::io::Write;

pub use crate::error::{ErrorKind, Result, VpdError};
pub use crate::mac::MacAddr;
pub use crate::mtd::{MtdDevice, OtpStorage};
pub use crate::output::Field;
pub use crate::record::VpdRecord;

/// Reads and validates the record from `storage` and prints `fields` to
/// `out`. Nothing is printed unless the record is valid.
pub fn run<S, W>(storage: &mut S, fields: &[Field], out: &mut W) -> Result<()>
where
    S: OtpStorage + ?Sized,
    W: Write + ?Sized,
{
    let raw = mtd::read_record(storage)?;
    let record = VpdRecord::parse(&raw)?;
    output::write_fields(out, &record, fields)
}
