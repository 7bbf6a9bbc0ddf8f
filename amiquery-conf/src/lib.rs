// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use amiquery_params::{DEFAULT_REGION_KEY, DEFAULT_STATE_KEY, KeyNames};
use anyhow::{self as ah, Context as _, format_err as err};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuerySection {
    region_key: Option<String>,
    state_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    query: QuerySection,
}

impl Config {
    pub fn new_parse_file(path: &Path) -> ah::Result<Self> {
        let data = std::fs::read_to_string(path).context("Read configuration file")?;
        Self::parse_str(&data).context("Parse configuration file")
    }

    pub fn parse_str(data: &str) -> ah::Result<Self> {
        let this: Self = toml::from_str(data)?;
        this.check()?;
        Ok(this)
    }

    pub fn parse_file(&mut self, path: &Path) -> ah::Result<()> {
        *self = Self::new_parse_file(path)?;
        Ok(())
    }

    fn check(&self) -> ah::Result<()> {
        // Check [query] section.
        if let Err(e) = self.key_names() {
            return Err(err!("The [query] section is invalid: {e}"));
        }
        Ok(())
    }

    pub fn region_key(&self) -> &str {
        self.query.region_key.as_deref().unwrap_or(DEFAULT_REGION_KEY)
    }

    pub fn state_key(&self) -> &str {
        self.query.state_key.as_deref().unwrap_or(DEFAULT_STATE_KEY)
    }

    pub fn key_names(&self) -> ah::Result<KeyNames> {
        Ok(KeyNames::new(self.region_key(), self.state_key())?)
    }
}


// vim: ts=4 sw=4 expandtab
