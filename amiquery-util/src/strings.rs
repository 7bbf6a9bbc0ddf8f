// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Split `data` at the first occurrence of `delim`.
/// The delimiter itself is not part of either half.
pub fn split_delim(data: &[u8], delim: u8) -> Option<(&[u8], &[u8])> {
    memchr::memchr(delim, data).map(|pos| (&data[..pos], &data[pos + 1..]))
}

/// Split `data` at the first occurrence of any of the two delimiters.
pub fn split_delim2(data: &[u8], delim0: u8, delim1: u8) -> Option<(&[u8], &[u8])> {
    memchr::memchr2(delim0, delim1, data).map(|pos| (&data[..pos], &data[pos + 1..]))
}


// vim: ts=4 sw=4 expandtab
