// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Access to the user OTP area of an MTD character device.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::os::unix::io::AsRawFd;
use std::path::Path;

use libc::c_int;
use log::{debug, info};

use crate::error::{Result, VpdError};
use crate::record::VPD_RECORD_SIZE;

// From include/uapi/mtd/mtd-abi.h.
const MTD_IOC_MAGIC: u8 = b'M';
const OTPSELECT_NR: u8 = 13;
// MTD_OTP_OFF is 0 and MTD_OTP_FACTORY is 1.
const MTD_OTP_USER: c_int = 2;

mod ioctl {
    use libc::c_int;

    use super::{MTD_IOC_MAGIC, OTPSELECT_NR};

    nix::ioctl_read!(otp_select, MTD_IOC_MAGIC, OTPSELECT_NR, c_int);
}

/// Older kernels didn't map the OTP data at the beginning of the device.
pub const LEGACY_OFFSET: u64 = 0x1000;

/// The operations needed to fetch a VPD record from OTP storage.
pub trait OtpStorage {
    /// Switches reads to the user OTP area.
    fn select_user_otp(&mut self) -> Result<()>;
    fn seek_to(&mut self, offset: u64) -> io::Result<u64>;
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// An opened MTD character device, e.g. /dev/mtd0. The descriptor is closed
/// on drop.
#[derive(Debug)]
pub struct MtdDevice {
    file: File,
}

impl MtdDevice {
    /// Opens the device read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| VpdError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened {}", path.display());
        Ok(MtdDevice { file })
    }
}

impl OtpStorage for MtdDevice {
    fn select_user_otp(&mut self) -> Result<()> {
        let mut mode = MTD_OTP_USER;
        // SAFETY: OTPSELECT only reads one int through the pointer, which
        // points at a live local for the duration of the call.
        unsafe { ioctl::otp_select(self.file.as_raw_fd(), &mut mode) }.map_err(VpdError::OtpSelect)?;
        Ok(())
    }

    fn seek_to(&mut self, offset: u64) -> io::Result<u64> {
        self.file.seek(SeekFrom::Start(offset))
    }

    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// Reads the raw VPD record from the user OTP area. The legacy offset is
/// tried first and offset 0 is used if the device can't seek there.
pub fn read_record<S: OtpStorage + ?Sized>(storage: &mut S) -> Result<[u8; VPD_RECORD_SIZE]> {
    storage.select_user_otp()?;

    match storage.seek_to(LEGACY_OFFSET) {
        Ok(_) => debug!("Reading VPD at legacy offset {:#x}", LEGACY_OFFSET),
        Err(err) => {
            debug!(
                "Seek to legacy offset {:#x} failed ({}), reading VPD at 0",
                LEGACY_OFFSET, err
            );
            storage.seek_to(0).map_err(VpdError::Seek)?;
        }
    }

    let mut raw = [0u8; VPD_RECORD_SIZE];
    let mut filled = 0;
    while filled < raw.len() {
        match storage.read_into(&mut raw[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(VpdError::Read(err)),
        }
    }
    if filled != raw.len() {
        return Err(VpdError::ShortRead(filled));
    }

    info!("Read {} byte VPD record", filled);
    Ok(raw)
}
