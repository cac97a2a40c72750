use super::Utility;
use super::bounds::{compute_rtwu, compute_subtree_bounds};
use super::classify::ItemPartition;
use super::config::MinerConfig;
use super::reorganize::reorganize;
use super::search::SearchEngine;
use super::storage::ItemsetStorage;
use super::transaction::Transaction;

/// Counters describing one mining run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningStats {
    pub transactions: usize,
    pub rho: usize,
    pub delta: usize,
    pub eta: usize,
    pub secondary: usize,
    pub primary: usize,
    pub itemsets_evaluated: usize,
    pub high_utility_itemsets: usize,
}

#[derive(Debug, Clone)]
pub struct MiningRun {
    pub itemsets: ItemsetStorage,
    pub stats: MiningStats,
}

pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    /// Classify, bound, reorganize and search `transactions`.
    pub fn run(&self, mut transactions: Vec<Transaction>) -> MiningRun {
        let min_utility = self.config.min_utility;

        let partition = ItemPartition::classify(&transactions);
        let mut stats = MiningStats {
            transactions: transactions.len(),
            rho: partition.rho().len(),
            delta: partition.delta().len(),
            eta: partition.eta().len(),
            ..MiningStats::default()
        };
        log::debug!(
            "classified {} items: rho={} delta={} eta={}",
            partition.len(),
            stats.rho,
            stats.delta,
            stats.eta
        );

        let rtwu = compute_rtwu(&transactions, &partition);
        let layout = reorganize(&mut transactions, &partition, &rtwu, min_utility);

        let db: Vec<&Transaction> = transactions.iter().collect();
        let initial = compute_subtree_bounds(&db, &[], &layout.secondary);
        let primary: Vec<usize> = layout
            .secondary
            .iter()
            .copied()
            .filter(|&item| initial.rsu(item) >= min_utility)
            .collect();
        stats.secondary = layout.secondary.len();
        stats.primary = primary.len();
        log::debug!("primary items: {:?}", primary);

        let mut engine =
            SearchEngine::new(&layout.order, min_utility, self.config.project_database);
        engine.search(&layout.eta, &[], &db, &primary, &layout.secondary);

        stats.itemsets_evaluated = engine.itemsets_evaluated();
        let itemsets = engine.into_results();
        stats.high_utility_itemsets = itemsets.len();
        log::debug!(
            "search finished: {} itemsets evaluated, {} high utility",
            stats.itemsets_evaluated,
            stats.high_utility_itemsets
        );

        MiningRun { itemsets, stats }
    }
}

/// Mine with the default configuration and the given threshold.
pub fn mine_high_utility_itemsets(
    transactions: Vec<Transaction>,
    min_utility: Utility,
) -> ItemsetStorage {
    Miner::new(MinerConfig::new(min_utility))
        .run(transactions)
        .itemsets
}
