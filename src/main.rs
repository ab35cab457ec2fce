// Copyright 2025 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, log_enabled, Level};

use otpvpd::output::select_fields;
use otpvpd::MtdDevice;

/// Print the vendor product data stored in the user OTP area of an MTD
/// device.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The MTD device, e.g. /dev/mtd0.
    device: PathBuf,

    /// One of `serial`, `base-mac-address` or `mac-address`. Without a key
    /// the serial and the base MAC address are printed.
    key: Option<String>,

    /// For `mac-address`, the offset added to the base MAC address.
    #[arg(allow_hyphen_values = true)]
    offset: Option<String>,

    /// Anything after the offset is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _ignored: Vec<String>,

    /// Log more, may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    stderrlog::new()
        .module(module_path!())
        .verbosity(usize::from(verbose))
        .init()
        .context("Failed to initialize log")
}

fn run(args: &Args) -> otpvpd::Result<()> {
    let fields = select_fields(args.key.as_deref(), args.offset.as_deref())?;
    let mut device = MtdDevice::open(&args.device)?;
    otpvpd::run(&mut device, &fields, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(err) = init_logging(args.verbose) {
        eprintln!("{:#}", err);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if log_enabled!(Level::Error) {
                error!("{}", err);
            } else {
                eprintln!("{}", err);
            }
            ExitCode::FAILURE
        }
    }
}
