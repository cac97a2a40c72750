use std::collections::HashMap;

use super::transaction::Transaction;

/// Utility sign class of an item. Variant order is the block order used
/// inside reorganized transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemClass {
    /// ρ: only ever seen with positive utility.
    Positive,
    /// δ: seen with both positive and negative utility.
    Mixed,
    /// η: only ever seen with negative utility.
    Negative,
}

/// Disjoint split of the item universe into ρ, δ and η.
///
/// Items that only ever occur with zero utility belong to no class.
#[derive(Debug, Clone, Default)]
pub struct ItemPartition {
    classes: HashMap<usize, ItemClass>,
}

impl ItemPartition {
    pub fn classify(transactions: &[Transaction]) -> Self {
        // (seen positive, seen negative)
        let mut signs: HashMap<usize, (bool, bool)> = HashMap::new();

        for transaction in transactions {
            for (&item, &utility) in transaction.items().iter().zip(transaction.utilities()) {
                if utility == 0 {
                    continue;
                }
                let entry = signs.entry(item).or_insert((false, false));
                if utility > 0 {
                    entry.0 = true;
                } else {
                    entry.1 = true;
                }
            }
        }

        let classes = signs
            .into_iter()
            .map(|(item, seen)| {
                let class = match seen {
                    (true, false) => ItemClass::Positive,
                    (true, true) => ItemClass::Mixed,
                    _ => ItemClass::Negative,
                };
                (item, class)
            })
            .collect();

        Self { classes }
    }

    pub fn class_of(&self, item: usize) -> Option<ItemClass> {
        self.classes.get(&item).copied()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.classes.contains_key(&item)
    }

    pub fn rho(&self) -> Vec<usize> {
        self.items_in(ItemClass::Positive)
    }

    pub fn delta(&self) -> Vec<usize> {
        self.items_in(ItemClass::Mixed)
    }

    pub fn eta(&self) -> Vec<usize> {
        self.items_in(ItemClass::Negative)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = (usize, ItemClass)> + '_ {
        self.classes.iter().map(|(&item, &class)| (item, class))
    }

    fn items_in(&self, class: ItemClass) -> Vec<usize> {
        let mut items: Vec<usize> = self
            .classes
            .iter()
            .filter(|&(_, &c)| c == class)
            .map(|(&item, _)| item)
            .collect();
        items.sort_unstable();
        items
    }
}
