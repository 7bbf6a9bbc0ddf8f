// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

use amiquery_conf::Config;
use amiquery_params::{FilterParams, ParamsDecoder};
use anyhow::{self as ah, Context as _, format_err as err};
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Raw query strings to decode.
    ///
    /// For example:
    ///
    /// 'ami=ami-1a2b3c4d&region=us-west-2&tag=Name:web&pretty'
    ///
    /// A leading '?' is ignored.
    queries: Vec<String>,

    /// Path to the configuration file.
    ///
    /// Without a configuration file the default key names are used.
    #[arg(long, short = 'c')]
    config: Option<String>,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

impl Opts {
    pub fn get_decoder(&self) -> ah::Result<ParamsDecoder> {
        let conf = if let Some(config) = &self.config {
            Config::new_parse_file(Path::new(config)).context("Parse configuration")?
        } else {
            Config::default()
        };
        Ok(ParamsDecoder::new(conf.key_names()?))
    }
}

fn decode_one(decoder: &ParamsDecoder, query: &str) -> ah::Result<FilterParams> {
    let query = query.strip_prefix('?').unwrap_or(query);
    Ok(decoder.decode(query)?)
}

fn main() -> ah::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("AMIQUERY_LOG", "info")
            .write_style_or("AMIQUERY_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("amiquery-decode version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let decoder = opts.get_decoder()?;
    log::debug!(
        "Using region key '{}' and state key '{}'.",
        decoder.keys().region(),
        decoder.keys().state()
    );

    let mut nr_failed = 0_usize;
    for query in &opts.queries {
        match decode_one(&decoder, query) {
            Ok(params) => {
                let text = toml::to_string(&params).context("Serialize filter")?;
                println!("# {query}\n{text}");
            }
            Err(e) => {
                log::error!("Query '{query}': {e}");
                nr_failed += 1;
            }
        }
    }

    if nr_failed > 0 {
        Err(err!("{nr_failed} of {} queries failed.", opts.queries.len()))
    } else {
        Ok(())
    }
}


// vim: ts=4 sw=4 expandtab
