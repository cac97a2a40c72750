use super::Utility;
use super::bounds::compute_subtree_bounds;
use super::reorganize::ItemOrder;
use super::storage::ItemsetStorage;
use super::transaction::Transaction;

/// Exact utility of `itemset`: over every transaction holding all of its
/// members, the sum of those members' utilities.
pub fn calculate_utility(db: &[&Transaction], itemset: &[usize]) -> Utility {
    db.iter()
        .filter_map(|transaction| transaction.itemset_utility(itemset))
        .sum()
}

/// Transactions of `db` that contain every member of `itemset`.
pub fn project<'a>(db: &[&'a Transaction], itemset: &[usize]) -> Vec<&'a Transaction> {
    db.iter()
        .copied()
        .filter(|transaction| itemset.iter().all(|&item| transaction.contains(item)))
        .collect()
}

/// Depth-first branch-and-bound enumerator over prefixes.
///
/// Prefixes are kept sorted in canonical order. Transactions are only read.
pub struct SearchEngine<'o> {
    order: &'o ItemOrder,
    min_utility: Utility,
    project_database: bool,
    results: ItemsetStorage,
    itemsets_evaluated: usize,
}

impl<'o> SearchEngine<'o> {
    pub fn new(order: &'o ItemOrder, min_utility: Utility, project_database: bool) -> Self {
        Self {
            order,
            min_utility,
            project_database,
            results: ItemsetStorage::new(),
            itemsets_evaluated: 0,
        }
    }

    /// Extend `prefix` with each item of `primary` in order, record the high
    /// utility ones and recurse with the candidates that follow.
    pub fn search(
        &mut self,
        eta: &[usize],
        prefix: &[usize],
        db: &[&Transaction],
        primary: &[usize],
        secondary: &[usize],
    ) {
        if primary.is_empty() {
            return;
        }

        for &item in primary {
            let mut beta = Vec::with_capacity(prefix.len() + 1);
            beta.extend_from_slice(prefix);
            beta.push(item);

            let projected;
            let scope: &[&Transaction] = if self.project_database {
                projected = project(db, &beta);
                &projected
            } else {
                db
            };

            let utility = self.evaluate(scope, &beta);
            if utility > self.min_utility {
                self.search_negative(eta, &beta, scope);
            }

            let tail: Vec<usize> = secondary
                .iter()
                .copied()
                .filter(|&candidate| self.order.follows(candidate, item))
                .collect();
            let table = compute_subtree_bounds(scope, &beta, &tail);

            let next_primary: Vec<usize> = tail
                .iter()
                .copied()
                .filter(|&candidate| table.rsu(candidate) >= self.min_utility)
                .collect();
            let next_secondary: Vec<usize> = tail
                .iter()
                .copied()
                .filter(|&candidate| table.rlu(candidate) >= self.min_utility)
                .collect();

            self.search(eta, &beta, scope, &next_primary, &next_secondary);
        }
    }

    /// Extend `beta` with negative-only items. Any η item not yet in the
    /// itemset may be added, so the only rule is never re-adding one.
    pub fn search_negative(&mut self, eta: &[usize], beta: &[usize], db: &[&Transaction]) {
        if eta.is_empty() {
            return;
        }

        for &item in eta {
            let mut extended = beta.to_vec();
            self.order.insert(&mut extended, item);

            let projected;
            let scope: &[&Transaction] = if self.project_database {
                projected = project(db, &extended);
                &projected
            } else {
                db
            };

            self.evaluate(scope, &extended);

            let remaining: Vec<usize> = eta.iter().copied().filter(|&e| e != item).collect();
            let table = compute_subtree_bounds(scope, &extended, &remaining);
            let next: Vec<usize> = remaining
                .into_iter()
                .filter(|&candidate| table.rsu(candidate) >= self.min_utility)
                .collect();

            self.search_negative(&next, &extended, scope);
        }
    }

    pub fn itemsets_evaluated(&self) -> usize {
        self.itemsets_evaluated
    }

    pub fn into_results(self) -> ItemsetStorage {
        self.results
    }

    fn evaluate(&mut self, db: &[&Transaction], itemset: &[usize]) -> Utility {
        self.itemsets_evaluated += 1;
        let utility = calculate_utility(db, itemset);
        if utility >= self.min_utility {
            log::trace!("high utility itemset {:?} = {}", itemset, utility);
            self.results.add_itemset(itemset, utility);
        }
        utility
    }
}
