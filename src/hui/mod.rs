pub mod bounds;
pub mod classify;
pub mod config;
pub mod miner;
pub mod reorganize;
pub mod search;
pub mod storage;
pub mod transaction;


/// Signed utility of an item occurrence; thresholds share the same domain.
pub type Utility = i64;

pub use bounds::{BoundTable, UtilityBounds, compute_rtwu, compute_subtree_bounds};
pub use classify::{ItemClass, ItemPartition};
pub use config::MinerConfig;
pub use miner::{Miner, MiningRun, MiningStats, mine_high_utility_itemsets};
pub use reorganize::{ItemOrder, Layout, reorganize};
pub use search::{SearchEngine, calculate_utility};
pub use storage::{HighUtilityItemset, ItemsetStorage};
pub use transaction::{DataError, Transaction, transactions_from_dense};
