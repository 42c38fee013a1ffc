//! Partitions records into groups of lines that are connected, directly or
//! transitively, by an equal value in the same field.

use crate::record::{Record, NUM_FIELDS};
use crate::utils::union_find::UnionFind;


/// The literal treated as an empty field by [`EmptyPolicy::EmptyQuotes`].
pub const EMPTY_QUOTES: &str = "\"\"";

/// Which field value, if any, never connects two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Every value may connect records, including `""`.
    #[default]
    Disabled,
    /// The quoted empty string `""` is considered absent.
    EmptyQuotes,
}

impl EmptyPolicy {
    /// `"1"` selects [`EmptyPolicy::EmptyQuotes`], anything else
    /// [`EmptyPolicy::Disabled`].
    pub fn from_flag(flag: &str) -> Self {
        if flag == "1" {
            EmptyPolicy::EmptyQuotes
        } else {
            EmptyPolicy::Disabled
        }
    }

    pub fn is_absent(&self, value: &str) -> bool {
        match self {
            EmptyPolicy::Disabled => false,
            EmptyPolicy::EmptyQuotes => value == EMPTY_QUOTES,
        }
    }
}

/// One connected set of records, as their display strings.
pub type Group = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grouping {
    groups: Vec<Group>,
}

impl Grouping {
    /// Groups ordered by size, largest first.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn num_multi_groups(&self) -> usize {
        self.groups.iter().filter(|g| g.len() > 1).count()
    }
}

const FIELD_ORDER: [usize; NUM_FIELDS] = [0, 1, 2];

/// Record indices must be exactly `0..records.len()`, in any order.
pub fn group_records(records: &[Record], policy: EmptyPolicy) -> Grouping {
    debug_assert!(records.iter().all(|r| r.index() < records.len()));
    let mut uf = connect_records(records, policy, &FIELD_ORDER);
    let (labels, num_sets) = uf.partition_labels();
    let mut groups: Vec<Group> = vec![Vec::new(); num_sets];
    // records are taken in origin order, so members keep their input order
    let mut by_origin: Vec<&Record> = records.iter().collect();
    by_origin.sort_by_key(|r| r.index());
    for record in by_origin {
        groups[labels[record.index()]].push(record.to_string());
    }
    // stable: equal-size groups stay in label order
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    Grouping { groups }
}

/// Builds the union-find over record origin indices, processing the fields in
/// `field_order`.
fn connect_records(records: &[Record], policy: EmptyPolicy, field_order: &[usize]) -> UnionFind {
    let mut uf = UnionFind::new(records.len());
    let mut order: Vec<&Record> = records.iter().collect();
    for &p in field_order {
        connect_field(&mut uf, &mut order, p, policy);
    }
    uf
}

/// Sorts by field `p` and unions every adjacent pair with an equal, present
/// value. A run of `k` equal values ends up connected through its `k - 1`
/// adjacent unions.
fn connect_field(uf: &mut UnionFind, order: &mut [&Record], p: usize, policy: EmptyPolicy) {
    order.sort_by(|a, b| a.field(p).cmp(b.field(p)).then(a.index().cmp(&b.index())));
    for pair in order.windows(2) {
        let (prev, cur) = (pair[0], pair[1]);
        if cur.field(p) == prev.field(p) && !policy.is_absent(cur.field(p)) {
            uf.union(prev.index(), cur.index());
        }
    }
}
