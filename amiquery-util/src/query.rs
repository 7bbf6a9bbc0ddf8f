// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    errors::EscapeError,
    escape::unescape,
    strings::{split_delim, split_delim2},
};
use std::{collections::HashMap, str::FromStr};

/// A decoded, multi-valued query string.
///
/// Keys are kept in the order of their first appearance
/// and the values of each key in the order they occur.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormQuery {
    comps: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl FormQuery {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// Components are separated by `&` or `;`.
    /// A component without `=` is a key with an empty value.
    pub fn parse(data: &[u8]) -> Result<Self, EscapeError> {
        let mut this = Self::default();
        let mut tail = data;
        while !tail.is_empty() {
            let (comp, t) = split_delim2(tail, b'&', b';').unwrap_or((tail, &[]));
            tail = t;
            if comp.is_empty() {
                continue;
            }
            let (name, value) = split_delim(comp, b'=').unwrap_or((comp, &[]));
            let name = unescape(name)?;
            let value = unescape(value)?;
            this.push(name, value);
        }
        Ok(this)
    }

    fn push(&mut self, name: String, value: String) {
        if let Some(&idx) = self.index.get(&name) {
            self.comps[idx].1.push(value);
        } else {
            self.index.insert(name.clone(), self.comps.len());
            self.comps.push((name, vec![value]));
        }
    }

    /// Returns all values of a key, in occurrence order.
    /// Returns `None` if the key does not exist.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&idx| &*self.comps[idx].1)
    }

    /// Returns the last value of a key.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .and_then(|v| v.last())
            .map(|v| v.as_str())
    }

    /// Returns the keys in first-appearance order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.comps.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over `(key, values)` in first-appearance order of the keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.comps.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }
}

impl FromStr for FormQuery {
    type Err = EscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for FormQuery {
    type Error = EscapeError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::parse(data)
    }
}


// vim: ts=4 sw=4 expandtab
