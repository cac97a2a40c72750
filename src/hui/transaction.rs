use ndarray::ArrayView2;
use std::collections::HashSet;
use thiserror::Error;

use super::Utility;

/// Rejections raised while building transactions from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("transaction has {items} items but {utilities} utilities")]
    LengthMismatch { items: usize, utilities: usize },
    #[error("item {item} occurs more than once in one transaction")]
    DuplicateItem { item: usize },
    #[error("absolute utilities of one transaction do not fit in an i64")]
    UtilityOverflow,
}

/// One transaction: item ids paired 1:1 with signed utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: Vec<usize>,
    utilities: Vec<Utility>,
}

impl Transaction {
    /// Validate and build a transaction.
    ///
    /// The summed absolute utility of the transaction must fit in a
    /// [`Utility`]. Mining sums utilities across transactions unchecked, so
    /// callers must also keep database-wide totals inside that range.
    pub fn new(items: Vec<usize>, utilities: Vec<Utility>) -> Result<Self, DataError> {
        if items.len() != utilities.len() {
            return Err(DataError::LengthMismatch {
                items: items.len(),
                utilities: utilities.len(),
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for &item in &items {
            if !seen.insert(item) {
                return Err(DataError::DuplicateItem { item });
            }
        }

        let magnitude = utilities
            .iter()
            .try_fold(0 as Utility, |acc, &u| u.checked_abs().and_then(|a| acc.checked_add(a)));
        if magnitude.is_none() {
            return Err(DataError::UtilityOverflow);
        }

        Ok(Self { items, utilities })
    }

    pub fn from_pairs(pairs: &[(usize, Utility)]) -> Result<Self, DataError> {
        let (items, utilities) = pairs.iter().copied().unzip();
        Self::new(items, utilities)
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }

    pub fn utilities(&self) -> &[Utility] {
        &self.utilities
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every utility in the transaction.
    pub fn transaction_utility(&self) -> Utility {
        self.utilities.iter().sum()
    }

    /// Sum of the positive utilities only.
    pub fn positive_utility(&self) -> Utility {
        self.utilities.iter().filter(|&&u| u > 0).sum()
    }

    pub fn position(&self, item: usize) -> Option<usize> {
        self.items.iter().position(|&x| x == item)
    }

    pub fn contains(&self, item: usize) -> bool {
        self.items.contains(&item)
    }

    pub fn utility_of(&self, item: usize) -> Option<Utility> {
        self.position(item).map(|idx| self.utilities[idx])
    }

    /// Utility of `itemset` in this transaction, or `None` unless every
    /// member occurs here.
    pub fn itemset_utility(&self, itemset: &[usize]) -> Option<Utility> {
        itemset
            .iter()
            .map(|&item| self.utility_of(item))
            .sum::<Option<Utility>>()
    }

    /// Highest position occupied by a member of `itemset`, if all occur.
    pub fn last_position(&self, itemset: &[usize]) -> Option<usize> {
        itemset
            .iter()
            .map(|&item| self.position(item))
            .try_fold(None, |last: Option<usize>, pos| {
                pos.map(|p| Some(last.map_or(p, |l| l.max(p))))
            })
            .flatten()
    }

    /// Positive utility held at positions `start..`.
    pub fn remaining_utility(&self, start: usize) -> Utility {
        self.utilities
            .iter()
            .skip(start)
            .filter(|&&u| u > 0)
            .sum()
    }

    pub(crate) fn retain_items<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        let (items, utilities) = self
            .items
            .iter()
            .zip(self.utilities.iter())
            .filter(|&(&item, _)| keep(item))
            .map(|(&item, &utility)| (item, utility))
            .unzip();
        self.items = items;
        self.utilities = utilities;
    }

    /// Stable reorder of both sequences by `key(item)`.
    pub(crate) fn reorder<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(usize) -> K,
    {
        let mut pairs: Vec<(usize, Utility)> = self
            .items
            .iter()
            .copied()
            .zip(self.utilities.iter().copied())
            .collect();
        pairs.sort_by_key(|&(item, _)| key(item));
        (self.items, self.utilities) = pairs.into_iter().unzip();
    }
}

/// Convert a dense utility matrix to transactions: rows are transactions,
/// columns are item ids, zero cells are absent.
pub fn transactions_from_dense(matrix: ArrayView2<Utility>) -> Result<Vec<Transaction>, DataError> {
    matrix
        .rows()
        .into_iter()
        .map(|row| {
            let (items, utilities) = row
                .iter()
                .enumerate()
                .filter(|&(_, &u)| u != 0)
                .map(|(item, &u)| (item, u))
                .unzip();
            Transaction::new(items, utilities)
        })
        .collect()
}
