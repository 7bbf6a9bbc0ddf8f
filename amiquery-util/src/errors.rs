// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A malformed percent-escape sequence in a query string.
///
/// Carries the offending text: the `%` and at most two following bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeError(String);

impl EscapeError {
    pub(crate) fn new(seq: &[u8]) -> Self {
        let seq = &seq[..seq.len().min(3)];
        Self(String::from_utf8_lossy(seq).into_owned())
    }

    /// Returns the offending escape sequence.
    pub fn sequence(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EscapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "invalid URL escape {:?}", self.0)
    }
}

impl std::error::Error for EscapeError {}

// vim: ts=4 sw=4 expandtab
