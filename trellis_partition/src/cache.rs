// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide memoization of partition enumerations.
//!
//! Enumerating partition trees is pure and depends only on `(n, limit)`, so
//! results are computed once and shared for the lifetime of the process.
//! Lookup and insert happen under a single lock; values are immutable once
//! inserted and handed out by reference. The table never evicts and is never
//! populated eagerly.

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::enumerate::enumerate;
use crate::tree::PartitionTree;

/// Memo table for partition enumerations, keyed by `(n, limit)`.
#[derive(Debug, Default)]
pub struct PartitionCache {
    table: Mutex<HashMap<(usize, Option<u32>), Arc<Vec<PartitionTree>>>>,
}

impl PartitionCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// All partition trees of `n` positions within `limit`, enumerating on
    /// first use. Repeated queries return the same shared slice.
    pub fn partitions(&self, n: usize, limit: Option<u32>) -> Arc<Vec<PartitionTree>> {
        let mut table = self.table.lock().expect("partition cache poisoned");
        table
            .entry((n, limit))
            .or_insert_with(|| Arc::new(enumerate(n, limit)))
            .clone()
    }

    /// Number of `(n, limit)` keys enumerated so far.
    pub fn len(&self) -> usize {
        self.table.lock().expect("partition cache poisoned").len()
    }

    /// True if nothing has been enumerated yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide cache shared by all generations.
pub fn shared() -> &'static PartitionCache {
    static SHARED: OnceLock<PartitionCache> = OnceLock::new();
    SHARED.get_or_init(PartitionCache::new)
}

/// Convenience lookup through the [`shared`] cache.
pub fn partitions(n: usize, limit: Option<u32>) -> Arc<Vec<PartitionTree>> {
    shared().partitions(n, limit)
}
