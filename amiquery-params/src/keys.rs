// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::ParamsError;

pub const ACCOUNT_ID_KEY: &str = "account_id";
pub const CALLBACK_KEY: &str = "callback";
pub const PRETTY_KEY: &str = "pretty";
pub const IMAGE_KEY: &str = "ami";
pub const TAG_KEY: &str = "tag";

/// Default name of the region selecting key.
pub const DEFAULT_REGION_KEY: &str = "region";
/// Default name of the state selecting key.
/// It is also the tag name the state values are filed under.
pub const DEFAULT_STATE_KEY: &str = "state";

/// The recognized query keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKey {
    AccountId,
    Callback,
    Pretty,
    Region,
    Image,
    Tag,
    State,
}

const FIXED_KEYS: [(&str, QueryKey); 5] = [
    (ACCOUNT_ID_KEY, QueryKey::AccountId),
    (CALLBACK_KEY, QueryKey::Callback),
    (PRETTY_KEY, QueryKey::Pretty),
    (IMAGE_KEY, QueryKey::Image),
    (TAG_KEY, QueryKey::Tag),
];

/// Names of the keys that are not fixed by the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyNames {
    region: String,
    state: String,
}

impl KeyNames {
    /// Create a new key name set.
    ///
    /// The names must be non-empty, distinct from each other
    /// and must not shadow one of the fixed keys.
    pub fn new(region: &str, state: &str) -> Result<Self, ParamsError> {
        for name in [region, state] {
            if name.is_empty() || FIXED_KEYS.iter().any(|(fixed, _)| *fixed == name) {
                return Err(ParamsError::InvalidKeyName(name.to_string()));
            }
        }
        if region == state {
            return Err(ParamsError::InvalidKeyName(state.to_string()));
        }
        Ok(Self {
            region: region.to_string(),
            state: state.to_string(),
        })
    }

    /// Name of the region selecting key.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Name of the state selecting key and of the state tag.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Look up a raw query key name.
    /// Returns `None` for keys outside of the recognized set.
    pub fn lookup(&self, name: &str) -> Option<QueryKey> {
        if let Some((_, key)) = FIXED_KEYS.iter().find(|(fixed, _)| *fixed == name) {
            Some(*key)
        } else if name == self.region {
            Some(QueryKey::Region)
        } else if name == self.state {
            Some(QueryKey::State)
        } else {
            None
        }
    }
}

impl Default for KeyNames {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION_KEY.to_string(),
            state: DEFAULT_STATE_KEY.to_string(),
        }
    }
}


// vim: ts=4 sw=4 expandtab
