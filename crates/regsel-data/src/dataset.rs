use std::collections::HashSet;

use regsel_core::Matrix;

use crate::error::{DataError, DataResult};

/// Name given to the target column of every derived dataset.
pub const TARGET_COLUMN: &str = "target";

/// A rectangular table of named numeric columns.
///
/// The last column is the regression target; every column before it is a
/// feature. Construction guarantees at least one feature, unique names, and
/// a header as wide as the data.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularDataset {
    columns: Vec<String>,
    values: Matrix<f64>,
}

impl TabularDataset {
    pub fn new(columns: Vec<String>, values: Matrix<f64>) -> DataResult<Self> {
        if columns.len() != values.ncols() {
            return Err(DataError::WidthMismatch {
                header: columns.len(),
                data: values.ncols(),
            });
        }
        if columns.len() < 2 {
            return Err(DataError::TooFewColumns(columns.len()));
        }
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(DataError::DuplicateColumn(name.clone()));
            }
        }
        let n_features = columns.len() - 1;
        if let Some(name) = columns[..n_features].iter().find(|c| *c == TARGET_COLUMN) {
            return Err(DataError::ReservedColumn(name.clone()));
        }
        Ok(TabularDataset { columns, values })
    }

    /// All column names, target last.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn feature_names(&self) -> &[String] {
        &self.columns[..self.n_features()]
    }

    pub fn target_name(&self) -> &str {
        &self.columns[self.n_features()]
    }

    pub fn n_features(&self) -> usize {
        self.columns.len() - 1
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    /// The full table, target column included.
    pub fn values(&self) -> &Matrix<f64> {
        &self.values
    }

    /// Feature columns as an `n_rows × n_features` matrix.
    pub fn features(&self) -> DataResult<Matrix<f64>> {
        let indices: Vec<usize> = (0..self.n_features()).collect();
        Ok(self.values.select_columns(&indices)?)
    }

    pub fn target(&self) -> DataResult<Vec<f64>> {
        Ok(self.values.col(self.n_features())?)
    }

    /// Keep the features at `indices` (in that order) plus the target, which
    /// is renamed to [`TARGET_COLUMN`].
    pub fn select_features(&self, indices: &[usize]) -> DataResult<TabularDataset> {
        if indices.is_empty() {
            return Err(DataError::EmptySelection);
        }
        let n_features = self.n_features();
        if let Some(&index) = indices.iter().find(|&&i| i >= n_features) {
            return Err(DataError::FeatureOutOfRange { index, n_features });
        }

        let mut columns: Vec<String> = indices.iter().map(|&i| self.columns[i].clone()).collect();
        columns.push(TARGET_COLUMN.to_string());

        let mut keep = indices.to_vec();
        keep.push(n_features);
        TabularDataset::new(columns, self.values.select_columns(&keep)?)
    }

    /// Same as [`select_features`](Self::select_features), addressing
    /// features by name.
    pub fn select_by_names<S: AsRef<str>>(&self, names: &[S]) -> DataResult<TabularDataset> {
        let features = self.feature_names();
        let indices = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                features
                    .iter()
                    .position(|f| f == name)
                    .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
            })
            .collect::<DataResult<Vec<usize>>>()?;
        self.select_features(&indices)
    }
}
