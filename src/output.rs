// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Maps the command line key to the fields that get printed.

use std::io::Write;
use std::str::FromStr;

use crate::error::{Result, VpdError};
use crate::record::VpdRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Serial,
    BaseMacAddress,
    MacAddress,
}

impl FromStr for Key {
    type Err = VpdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "serial" => Ok(Key::Serial),
            "base-mac-address" => Ok(Key::BaseMacAddress),
            "mac-address" => Ok(Key::MacAddress),
            _ => Err(VpdError::UnknownKey(s.to_string())),
        }
    }
}

/// A single line of output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Serial,
    BaseMacAddress,
    /// The base MAC address moved by the given offset.
    MacAddress(i64),
}

/// Works out which fields to print. Without a key both the serial and the
/// base MAC address are printed. The offset is only looked at for
/// `mac-address`, which requires it.
pub fn select_fields(key: Option<&str>, offset: Option<&str>) -> Result<Vec<Field>> {
    let key = match key {
        None => return Ok(vec![Field::Serial, Field::BaseMacAddress]),
        Some(key) => key.parse::<Key>()?,
    };

    Ok(match key {
        Key::Serial => vec![Field::Serial],
        Key::BaseMacAddress => vec![Field::BaseMacAddress],
        Key::MacAddress => {
            let offset = offset.ok_or(VpdError::MissingOffset)?;
            vec![Field::MacAddress(parse_offset(offset))]
        }
    })
}

/// Parses an offset the way C's atoi() does: leading whitespace is skipped,
/// an optional sign is accepted and digits are consumed up to the first
/// non-digit. Input without digits yields 0.
pub fn parse_offset(arg: &str) -> i64 {
    let s = arg.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r']);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0'))
        });

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Prints the requested fields, one per line.
pub fn write_fields<W: Write + ?Sized>(
    out: &mut W,
    record: &VpdRecord,
    fields: &[Field],
) -> Result<()> {
    let mut buf = Vec::new();
    for field in fields {
        match *field {
            // The serial is printed as its raw 15 bytes, NUL padding included.
            Field::Serial => {
                buf.extend_from_slice(record.serial());
                buf.push(b'\n');
            }
            Field::BaseMacAddress => {
                writeln!(buf, "{}", record.base_mac()).map_err(VpdError::Output)?
            }
            Field::MacAddress(offset) => {
                let mac = record.base_mac().with_offset(offset);
                writeln!(buf, "{}", mac).map_err(VpdError::Output)?
            }
        }
    }

    out.write_all(&buf).map_err(VpdError::Output)?;
    out.flush().map_err(VpdError::Output)
}
