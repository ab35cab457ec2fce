// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse grouping of failures, used to pick how a failure is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed arguments.
    Usage,
    /// Open, OTP select, seek or read failures.
    Device,
    /// The record was read but is not a valid VPD record.
    Format,
}

#[derive(Error, Debug)]
pub enum VpdError {
    #[error("missing offset for key mac-address")]
    MissingOffset,
    #[error("unknown key: {0}")]
    UnknownKey(String),
    #[error("open({}) failed: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("ioctl(OTPSELECT) failed: {0}")]
    OtpSelect(nix::Error),
    #[error("lseek() failed: {0}")]
    Seek(io::Error),
    #[error("read() failed: {0}")]
    Read(io::Error),
    #[error("short read ({0})")]
    ShortRead(usize),
    #[error("VPD magic mismatch ({0})")]
    MagicMismatch(u8),
    #[error("VPD version mismatch ({0})")]
    VersionMismatch(u8),
    #[error("VPD checksum mismatch (got {computed:02X}h, expected {stored:02X}h)")]
    ChecksumMismatch { computed: u8, stored: u8 },
    #[error("failed to write output: {0}")]
    Output(io::Error),
}

impl VpdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VpdError::MissingOffset | VpdError::UnknownKey(_) => ErrorKind::Usage,
            VpdError::Open { .. }
            | VpdError::OtpSelect(_)
            | VpdError::Seek(_)
            | VpdError::Read(_)
            | VpdError::ShortRead(_)
            | VpdError::Output(_) => ErrorKind::Device,
            VpdError::MagicMismatch(_)
            | VpdError::VersionMismatch(_)
            | VpdError::ChecksumMismatch { .. } => ErrorKind::Format,
        }
    }
}

pub type Result<T> = std::result::Result<T, VpdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_message_uses_upper_hex() {
        let err = VpdError::ChecksumMismatch {
            computed: 0x0a,
            stored: 0xf4,
        };
        assert_eq!(
            err.to_string(),
            "VPD checksum mismatch (got 0Ah, expected F4h)"
        );
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn magic_message_is_decimal() {
        assert_eq!(
            VpdError::MagicMismatch(0).to_string(),
            "VPD magic mismatch (0)"
        );
        assert_eq!(
            VpdError::VersionMismatch(2).to_string(),
            "VPD version mismatch (2)"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(VpdError::MissingOffset.kind(), ErrorKind::Usage);
        assert_eq!(VpdError::ShortRead(3).kind(), ErrorKind::Device);
        assert_eq!(
            VpdError::OtpSelect(nix::Error::ENOTTY).kind(),
            ErrorKind::Device
        );
    }
}
