// crates/domain/src/analytics/aggregate.rs

//! Aggregation library over a loaded record collection.
//!
//! Every function here is pure: it borrows its input read-only, builds a
//! fresh result, and keeps no state between calls. All tie-breaks are
//! stable first-wins so that answers are deterministic for a given input
//! order.

use std::collections::HashMap;
use std::hash::Hash;

use namedata_shared_kernel::{DomainError, DomainResult};

/// Total record count. 0 for empty input.
pub fn count<T>(records: &[T]) -> usize {
    records.len()
}

/// Count of records satisfying `predicate`.
pub fn count_where<T, P>(records: &[T], predicate: P) -> usize
where
    P: Fn(&T) -> bool,
{
    records.iter().filter(|r| predicate(r)).count()
}

/// Derived key-to-members mapping built by [`group_by`].
///
/// Group order is the order the keys were first encountered, and members
/// keep their insertion order within each group. The index is rebuilt on
/// demand and never persisted across calls.
#[derive(Debug)]
pub struct GroupIndex<'a, K, T> {
    slots: HashMap<K, usize>,
    groups: Vec<(K, Vec<&'a T>)>,
}

impl<'a, K, T> GroupIndex<'a, K, T>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self { slots: HashMap::new(), groups: Vec::new() }
    }

    fn insert(&mut self, key: K, member: &'a T) {
        match self.slots.get(&key) {
            Some(&slot) => self.groups[slot].1.push(member),
            None => {
                self.slots.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![member]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of all group sizes; equals the grouped record count.
    pub fn total_members(&self) -> usize {
        self.groups.iter().map(|(_, members)| members.len()).sum()
    }

    pub fn get(&self, key: &K) -> Option<&[&'a T]> {
        self.slots.get(key).map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Groups in first-encountered key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a T])> {
        self.groups.iter().map(|(key, members)| (key, members.as_slice()))
    }

    /// Key of the largest group. Ties resolve to the first key encountered
    /// achieving the maximum; `None` on an empty index.
    pub fn most_populous(&self) -> Option<&K> {
        let mut best: Option<(&K, usize)> = None;
        for (key, members) in &self.groups {
            if best.is_none_or(|(_, size)| members.len() > size) {
                best = Some((key, members.len()));
            }
        }
        best.map(|(key, _)| key)
    }
}

/// Partition `records` into a [`GroupIndex`] keyed by `key_fn`.
pub fn group_by<'a, T, K, F>(records: &'a [T], key_fn: F) -> GroupIndex<'a, K, T>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index = GroupIndex::new();
    for record in records {
        index.insert(key_fn(record), record);
    }
    index
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Min,
    Max,
}

/// Record minimizing or maximizing `value_fn`.
///
/// Only a strictly better value replaces the running extremum, so exact
/// ties keep the earlier record. Empty input is an `EmptyCollection`
/// error, not an arbitrary default.
pub fn extremum_by<'a, T, V, F>(
    records: &'a [T],
    value_fn: F,
    direction: Direction,
) -> DomainResult<&'a T>
where
    V: PartialOrd,
    F: Fn(&T) -> V,
{
    let mut iter = records.iter();
    let mut best = iter
        .next()
        .ok_or(DomainError::EmptyCollection { operation: "extremum_by" })?;
    let mut best_value = value_fn(best);

    for record in iter {
        let value = value_fn(record);
        let improves = match direction {
            Direction::Min => value < best_value,
            Direction::Max => value > best_value,
        };
        if improves {
            best = record;
            best_value = value;
        }
    }
    Ok(best)
}

/// How [`most_frequent`] forms its groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyMode {
    /// Group items whose labels compare equal. This is the intended
    /// grouping and the default.
    ByValue,
    /// Reproduce the upstream keying by order of first appearance: every
    /// item lands in its own group, so non-adjacent items with equal
    /// labels are never merged and the first item always wins. Kept
    /// selectable because existing reports were produced this way.
    FirstAppearance,
}

/// Representative item of the most frequent label per `classify`.
///
/// Frequency ties resolve to the first label encountered achieving the
/// maximum; the representative is the first member of that group.
pub fn most_frequent<'a, T, K, F>(
    items: &'a [T],
    classify: F,
    mode: FrequencyMode,
) -> DomainResult<&'a T>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    if items.is_empty() {
        return Err(DomainError::EmptyCollection { operation: "most_frequent" });
    }

    let winner = match mode {
        FrequencyMode::ByValue => {
            let index = group_by(items, classify);
            let key = index.most_populous().cloned();
            key.and_then(|key| index.get(&key).and_then(|members| members.first().copied()))
        }
        FrequencyMode::FirstAppearance => {
            let arrival = std::cell::Cell::new(0usize);
            let index = group_by(items, |_| {
                let key = arrival.get();
                arrival.set(key + 1);
                key
            });
            index.iter().next().and_then(|(_, members)| members.first().copied())
        }
    };
    // Non-empty input always yields a winner.
    winner.ok_or(DomainError::EmptyCollection { operation: "most_frequent" })
}
