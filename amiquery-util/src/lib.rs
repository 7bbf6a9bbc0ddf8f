// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![forbid(unsafe_code)]

mod errors;
mod escape;
mod query;
mod strings;

pub use errors::EscapeError;
pub use escape::unescape;
pub use query::FormQuery;
pub use strings::{split_delim, split_delim2};

// vim: ts=4 sw=4 expandtab
