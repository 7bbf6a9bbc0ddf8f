// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use amiquery_util::EscapeError;

/// Reasons a query string is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The raw query string could not be form-decoded.
    QueryParse(EscapeError),
    /// A key outside of the recognized key set.
    UnknownKey(String),
    /// A `tag` value that is not of the form `name:value`.
    InvalidTagValue(String),
    /// A configured key name that is empty or collides with another key.
    InvalidKeyName(String),
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::QueryParse(e) => write!(f, "{e}"),
            Self::UnknownKey(key) => write!(f, "unknown query key: {key}"),
            Self::InvalidTagValue(value) => write!(f, "invalid query tag value: {value}"),
            Self::InvalidKeyName(name) => write!(f, "invalid query key name: {name}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::QueryParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EscapeError> for ParamsError {
    fn from(e: EscapeError) -> Self {
        Self::QueryParse(e)
    }
}

// vim: ts=4 sw=4 expandtab
