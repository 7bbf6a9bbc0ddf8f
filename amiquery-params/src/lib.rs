// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Image filter query decoding
//!
//! Recognized query keys:
//!
//! | Key          | Value        | Effect                                   |
//! | ------------ | ------------ | ---------------------------------------- |
//! | `account_id` | account id   | last value wins                          |
//! | `callback`   | JSONP name   | last value wins                          |
//! | `pretty`     | (none)       | presence enables pretty output           |
//! | `region`     | region name  | appended to the region list              |
//! | `ami`        | image id     | appended to the image list               |
//! | `tag`        | `name:value` | appended to the values of tag `name`     |
//! | `state`      | state name   | appended to the values of tag `state`    |
//!
//! The `region` and `state` key names are configurable with [KeyNames].
//! All lists are deduplicated, keeping the order of first appearance.

#![forbid(unsafe_code)]

mod dedup;
mod error;
mod keys;
mod params;

pub use dedup::dedup;
pub use error::ParamsError;
pub use keys::{
    ACCOUNT_ID_KEY, CALLBACK_KEY, DEFAULT_REGION_KEY, DEFAULT_STATE_KEY, IMAGE_KEY, KeyNames,
    PRETTY_KEY, QueryKey, TAG_KEY,
};
pub use params::{FilterParams, ParamsDecoder};

// vim: ts=4 sw=4 expandtab
