use super::Utility;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinerConfig {
    /// Itemsets with utility at or above this are reported.
    pub min_utility: Utility,
    /// Restrict each recursive call to the transactions containing its prefix.
    pub project_database: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_utility: 0,
            project_database: true,
        }
    }
}

impl MinerConfig {
    pub fn new(min_utility: Utility) -> Self {
        Self {
            min_utility,
            ..Self::default()
        }
    }

    pub fn with_projection(mut self, project_database: bool) -> Self {
        self.project_database = project_database;
        self
    }
}
