use std::collections::{HashMap, HashSet};

use super::Utility;
use super::bounds::BoundTable;
use super::classify::{ItemClass, ItemPartition};
use super::transaction::Transaction;

/// Canonical total order over the items kept for mining: ρ block, then δ,
/// then η, each by ascending RTWU with the item id as tiebreak.
#[derive(Debug, Clone, Default)]
pub struct ItemOrder {
    ranks: HashMap<usize, usize>,
}

impl ItemOrder {
    pub fn new(
        items: impl IntoIterator<Item = usize>,
        partition: &ItemPartition,
        bounds: &BoundTable,
    ) -> Self {
        let mut keyed: Vec<(ItemClass, Utility, usize)> = items
            .into_iter()
            .filter_map(|item| {
                partition
                    .class_of(item)
                    .map(|class| (class, bounds.rtwu(item), item))
            })
            .collect();
        keyed.sort_unstable();
        keyed.dedup();

        let ranks = keyed
            .into_iter()
            .enumerate()
            .map(|(rank, (_, _, item))| (item, rank))
            .collect();
        Self { ranks }
    }

    pub fn rank(&self, item: usize) -> Option<usize> {
        self.ranks.get(&item).copied()
    }

    /// True when both items are ranked and `item` comes after `pivot`.
    pub fn follows(&self, item: usize, pivot: usize) -> bool {
        match (self.rank(item), self.rank(pivot)) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    pub fn sort(&self, items: &mut [usize]) {
        items.sort_by_key(|&item| (self.rank(item).unwrap_or(usize::MAX), item));
    }

    /// Insert `item` into an already ordered itemset, keeping it ordered.
    pub fn insert(&self, itemset: &mut Vec<usize>, item: usize) {
        let key = (self.rank(item).unwrap_or(usize::MAX), item);
        let at = itemset.partition_point(|&x| (self.rank(x).unwrap_or(usize::MAX), x) < key);
        itemset.insert(at, item);
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Outcome of reorganizing the database: the canonical order plus the
/// global candidate lists, each in that order.
#[derive(Debug, Clone)]
pub struct Layout {
    pub order: ItemOrder,
    pub secondary: Vec<usize>,
    pub eta: Vec<usize>,
}

/// Secondary(∅): ρ ∪ δ items whose RTWU reaches the threshold, by id.
pub fn secondary_items(
    partition: &ItemPartition,
    bounds: &BoundTable,
    min_utility: Utility,
) -> Vec<usize> {
    let mut items: Vec<usize> = partition
        .items()
        .filter(|&(item, class)| class != ItemClass::Negative && bounds.rtwu(item) >= min_utility)
        .map(|(item, _)| item)
        .collect();
    items.sort_unstable();
    items
}

/// Drop every occurrence of an item outside `keep`, preserving relative order.
pub fn filter_transactions(transactions: &mut [Transaction], keep: &HashSet<usize>) {
    for transaction in transactions.iter_mut() {
        transaction.retain_items(|item| keep.contains(&item));
    }
}

pub fn sort_items_in_transactions(transactions: &mut [Transaction], order: &ItemOrder) {
    for transaction in transactions.iter_mut() {
        transaction.reorder(|item| (order.rank(item).unwrap_or(usize::MAX), item));
    }
}

/// Stable sort by ascending transaction utility.
pub fn sort_transactions(transactions: &mut [Transaction]) {
    transactions.sort_by_key(Transaction::transaction_utility);
}

/// Filter, canonically order and sort the database in place.
pub fn reorganize(
    transactions: &mut [Transaction],
    partition: &ItemPartition,
    bounds: &BoundTable,
    min_utility: Utility,
) -> Layout {
    let mut secondary = secondary_items(partition, bounds, min_utility);
    let mut eta = partition.eta();

    let order = ItemOrder::new(secondary.iter().chain(eta.iter()).copied(), partition, bounds);
    let keep: HashSet<usize> = secondary.iter().chain(eta.iter()).copied().collect();

    filter_transactions(transactions, &keep);
    sort_items_in_transactions(transactions, &order);
    sort_transactions(transactions);

    order.sort(&mut secondary);
    order.sort(&mut eta);

    log::debug!(
        "reorganized {} transactions: {} secondary items, {} eta items",
        transactions.len(),
        secondary.len(),
        eta.len()
    );

    Layout { order, secondary, eta }
}
