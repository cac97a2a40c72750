use rayon::prelude::*;
use std::collections::HashMap;

use super::Utility;
use super::classify::ItemPartition;
use super::transaction::Transaction;

/// Upper-bound statistics for one item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UtilityBounds {
    /// Redefined transaction-weighted utilization.
    pub rtwu: Utility,
    /// Remaining-subtree utility for the current prefix.
    pub rsu: Utility,
    /// Remaining-local utility for the current prefix.
    pub rlu: Utility,
}

/// Item -> bounds, valid only for the prefix and candidates it was built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundTable {
    bounds: HashMap<usize, UtilityBounds>,
}

impl BoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds for `item`; items never touched read as zero.
    pub fn get(&self, item: usize) -> UtilityBounds {
        self.bounds.get(&item).copied().unwrap_or_default()
    }

    pub fn rtwu(&self, item: usize) -> Utility {
        self.get(item).rtwu
    }

    pub fn rsu(&self, item: usize) -> Utility {
        self.get(item).rsu
    }

    pub fn rlu(&self, item: usize) -> Utility {
        self.get(item).rlu
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub(crate) fn entry(&mut self, item: usize) -> &mut UtilityBounds {
        self.bounds.entry(item).or_default()
    }
}

/// RTWU of every classified item: for each transaction containing the item,
/// add that transaction's positive utility.
pub fn compute_rtwu(transactions: &[Transaction], partition: &ItemPartition) -> BoundTable {
    let sums = transactions
        .par_iter()
        .fold(HashMap::new, |mut acc: HashMap<usize, Utility>, transaction| {
            let rtu = transaction.positive_utility();
            for &item in transaction.items() {
                if partition.contains(item) {
                    *acc.entry(item).or_insert(0) += rtu;
                }
            }
            acc
        })
        .reduce(HashMap::new, |mut left, right| {
            for (item, rtwu) in right {
                *left.entry(item).or_insert(0) += rtwu;
            }
            left
        });

    let mut table = BoundTable::new();
    for (item, rtwu) in sums {
        table.entry(item).rtwu = rtwu;
    }
    table
}

/// RSU and RLU of every candidate against `prefix`, in one scan of `db`.
///
/// Only transactions holding the whole prefix and the candidate count.
/// RSU adds the prefix utility, the candidate's utility and the positive
/// utility after the candidate. RLU adds the prefix utility and the positive
/// utility after the prefix's last item.
pub fn compute_subtree_bounds(
    db: &[&Transaction],
    prefix: &[usize],
    candidates: &[usize],
) -> BoundTable {
    let mut table = BoundTable::new();
    if candidates.is_empty() {
        return table;
    }

    for transaction in db {
        let Some(prefix_utility) = transaction.itemset_utility(prefix) else {
            continue;
        };
        let local_start = transaction.last_position(prefix).map_or(0, |p| p + 1);
        let suffix = positive_suffix_sums(transaction);
        let local = prefix_utility + suffix[local_start];

        for &item in candidates {
            let Some(pos) = transaction.position(item) else {
                continue;
            };
            let bounds = table.entry(item);
            bounds.rsu += prefix_utility + transaction.utilities()[pos] + suffix[pos + 1];
            bounds.rlu += local;
        }
    }

    table
}

pub fn rsu(db: &[&Transaction], prefix: &[usize], item: usize) -> Utility {
    compute_subtree_bounds(db, prefix, &[item]).rsu(item)
}

pub fn rlu(db: &[&Transaction], prefix: &[usize], item: usize) -> Utility {
    compute_subtree_bounds(db, prefix, &[item]).rlu(item)
}

// suffix[i] = positive utility at positions i.., with suffix[len] = 0
fn positive_suffix_sums(transaction: &Transaction) -> Vec<Utility> {
    let utilities = transaction.utilities();
    let mut suffix = vec![0; utilities.len() + 1];
    for idx in (0..utilities.len()).rev() {
        suffix[idx] = suffix[idx + 1] + utilities[idx].max(0);
    }
    suffix
}
