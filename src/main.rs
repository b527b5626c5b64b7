// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: command line, logging, localization, window settings.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;

use std::path::PathBuf;

use clap::Parser;
use cosmic::iced::Size;

use crate::app::{Flags, VellumApp};
use crate::constant::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// A small PDF reader with free-text annotations.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// PDF file to open at startup.
    pub file: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default().size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    cosmic::app::run::<VellumApp>(settings, Flags::Args(args))?;

    Ok(())
}
