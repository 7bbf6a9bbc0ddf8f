// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{collections::HashSet, hash::Hash};

/// Remove duplicate elements, keeping the first occurrence of each.
pub fn dedup<T>(mut items: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
    items
}


// vim: ts=4 sw=4 expandtab
