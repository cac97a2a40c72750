//! High-utility itemset mining over transactions whose items carry positive
//! or negative utilities.
//!
//! The engine lives in [`hui`]; with the `python` feature the crate also
//! builds the `emhun` extension module.

pub mod hui;

pub use hui::{
    HighUtilityItemset, ItemsetStorage, Miner, MinerConfig, MiningRun, Transaction, Utility,
    mine_high_utility_itemsets,
};

#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArray2;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::hui::{
        DataError, ItemsetStorage, Transaction, Utility, mine_high_utility_itemsets,
        transactions_from_dense,
    };

    fn to_py_err(err: DataError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn into_rows(itemsets: &ItemsetStorage) -> Vec<(Vec<usize>, Utility)> {
        itemsets
            .iter()
            .map(|(itemset, utility)| (itemset.to_vec(), utility))
            .collect()
    }

    /// Mine from a list of `(items, utilities)` pairs.
    #[pyfunction]
    #[pyo3(name = "mine_huis")]
    fn mine_huis_py(
        py: Python<'_>,
        transactions: Vec<(Vec<usize>, Vec<Utility>)>,
        min_utility: Utility,
    ) -> PyResult<Vec<(Vec<usize>, Utility)>> {
        let transactions = transactions
            .into_iter()
            .map(|(items, utilities)| Transaction::new(items, utilities))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_py_err)?;

        let itemsets = py.allow_threads(|| mine_high_utility_itemsets(transactions, min_utility));
        Ok(into_rows(&itemsets))
    }

    /// Mine from a dense `(transactions, items)` utility matrix; zero cells
    /// are absent items.
    #[pyfunction]
    #[pyo3(name = "mine_huis_dense")]
    fn mine_huis_dense_py<'py>(
        py: Python<'py>,
        utilities: PyReadonlyArray2<'py, Utility>,
        min_utility: Utility,
    ) -> PyResult<Vec<(Vec<usize>, Utility)>> {
        let transactions = transactions_from_dense(utilities.as_array()).map_err(to_py_err)?;
        let itemsets = py.allow_threads(|| mine_high_utility_itemsets(transactions, min_utility));
        Ok(into_rows(&itemsets))
    }

    #[pymodule]
    fn emhun(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(mine_huis_py, m)?)?;
        m.add_function(wrap_pyfunction!(mine_huis_dense_py, m)?)?;
        Ok(())
    }
}
