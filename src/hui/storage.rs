use std::fmt;

use super::Utility;

/// An itemset whose exact utility met the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighUtilityItemset {
    itemset: Vec<usize>,
    utility: Utility,
}

impl HighUtilityItemset {
    pub fn new(mut itemset: Vec<usize>, utility: Utility) -> Self {
        itemset.sort_unstable();
        itemset.dedup();
        Self { itemset, utility }
    }

    /// Members in ascending id order.
    pub fn itemset(&self) -> &[usize] {
        &self.itemset
    }

    pub fn utility(&self) -> Utility {
        self.utility
    }
}

impl fmt::Display for HighUtilityItemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Itemset: [")?;
        for (idx, item) in self.itemset.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "], Utility: {}", self.utility)
    }
}

/// Append-only result list in discovery order, stored as flat arrays.
#[derive(Debug, Clone, Default)]
pub struct ItemsetStorage {
    items: Vec<usize>,
    offsets: Vec<(usize, usize)>,
    utilities: Vec<Utility>,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an itemset (members are stored in ascending id order) and
    /// return its index.
    pub fn add_itemset(&mut self, itemset: &[usize], utility: Utility) -> usize {
        let start = self.items.len();
        self.items.extend_from_slice(itemset);
        self.items[start..].sort_unstable();
        self.offsets.push((start, itemset.len()));
        self.utilities.push(utility);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn utility(&self, idx: usize) -> Utility {
        self.utilities[idx]
    }

    pub fn get(&self, idx: usize) -> HighUtilityItemset {
        HighUtilityItemset {
            itemset: self.get_itemset(idx).to_vec(),
            utility: self.utility(idx),
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], Utility)> + '_ {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.utility(idx)))
    }

    pub fn to_vec(&self) -> Vec<HighUtilityItemset> {
        (0..self.len()).map(|idx| self.get(idx)).collect()
    }
}
