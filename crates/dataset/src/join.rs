//! Inner-join assembly of the factor dataset.

use chrono::Datelike;
use fondra_primitives::{Date, Region, TimeSeries};
use ndarray::{Array1, Array2};
use polars::prelude::*;

use crate::DatasetError;

/// Name of the shared join key column.
pub const DATE_COLUMN: &str = "date";

fn date_key(date: Date) -> i32 {
    date.num_days_from_ce()
}

fn to_frame(name: &str, series: &TimeSeries) -> Result<DataFrame, DatasetError> {
    let keys: Vec<i32> = series.dates().iter().copied().map(date_key).collect();
    let values: Vec<f64> = series.values().to_vec();
    Ok(df! {
        DATE_COLUMN => keys,
        name => values,
    }?)
}

/// The inner join of a fund's returns with factor legs and the risk-free
/// rate on the date key.
///
/// Rows are restricted to dates present in every input and sorted
/// ascending; rows with any missing value are dropped. Join order does
/// not affect the result (a pure intersection), so sources can be added
/// in any order.
#[derive(Debug, Clone)]
pub struct FactorDataset {
    df: DataFrame,
    target: String,
}

impl FactorDataset {
    /// Assemble the dataset from named percent return series.
    ///
    /// `target` is the fund's return series; `factors` holds one entry
    /// per factor leg (column name, series); `risk_free` joins in like a
    /// factor but is excluded from region feature selection by its name.
    ///
    /// # Errors
    /// Returns `DatasetError` if a join fails or inputs are absent.
    pub fn build(
        target: (&str, &TimeSeries),
        factors: &[(&str, &TimeSeries)],
        risk_free: (&str, &TimeSeries),
    ) -> Result<Self, DatasetError> {
        let (target_name, target_series) = target;

        let mut lf = to_frame(target_name, target_series)?.lazy();
        for &(name, series) in factors {
            lf = lf.join(
                to_frame(name, series)?.lazy(),
                [col(DATE_COLUMN)],
                [col(DATE_COLUMN)],
                JoinArgs::new(JoinType::Inner),
            );
        }
        let (rf_name, rf_series) = risk_free;
        lf = lf.join(
            to_frame(rf_name, rf_series)?.lazy(),
            [col(DATE_COLUMN)],
            [col(DATE_COLUMN)],
            JoinArgs::new(JoinType::Inner),
        );

        let df = lf
            .drop_nulls(None)
            .sort([DATE_COLUMN], SortMultipleOptions::default())
            .collect()?;

        Ok(Self { df, target: target_name.to_string() })
    }

    /// Number of joined rows (the date-intersection size).
    #[must_use]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// The underlying frame.
    #[must_use]
    pub const fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Name of the target (fund) column.
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target
    }

    /// All column names except the date key.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .filter(|s| s != DATE_COLUMN)
            .collect()
    }

    /// Joined dates, ascending.
    ///
    /// # Errors
    /// Returns `DatasetError` if the date column is missing or corrupt.
    pub fn dates(&self) -> Result<Vec<Date>, DatasetError> {
        self.df
            .column(DATE_COLUMN)?
            .i32()?
            .into_no_null_iter()
            .map(|k| Date::from_num_days_from_ce_opt(k).ok_or(DatasetError::InvalidDate(k)))
            .collect()
    }

    /// The target column as an array.
    ///
    /// # Errors
    /// Returns `DatasetError::MissingColumn` if the target column is gone.
    pub fn target(&self) -> Result<Array1<f64>, DatasetError> {
        self.column(&self.target)
    }

    /// A single numeric column as an array.
    ///
    /// # Errors
    /// Returns `DatasetError::MissingColumn` for an unknown name.
    pub fn column(&self, name: &str) -> Result<Array1<f64>, DatasetError> {
        let column = self
            .df
            .column(name)
            .map_err(|_| DatasetError::MissingColumn(name.to_string()))?;
        Ok(Array1::from_iter(column.f64()?.into_no_null_iter()))
    }

    /// Feature matrix of the factor columns matching a region, with their
    /// names in column order.
    ///
    /// Selection is a substring match of the region tag against column
    /// names; the date key and the target column never participate.
    ///
    /// # Errors
    /// Returns `DatasetError::NoRegionFeatures` when nothing matches.
    pub fn region_features(
        &self,
        region: Region,
    ) -> Result<(Array2<f64>, Vec<String>), DatasetError> {
        let names: Vec<String> = self
            .column_names()
            .into_iter()
            .filter(|name| *name != self.target && region.matches_column(name))
            .collect();

        if names.is_empty() {
            return Err(DatasetError::NoRegionFeatures(region.to_string()));
        }

        let mut features = Array2::zeros((self.height(), names.len()));
        for (j, name) in names.iter().enumerate() {
            let column = self.column(name)?;
            for (i, value) in column.iter().enumerate() {
                features[[i, j]] = *value;
            }
        }

        Ok((features, names))
    }
}
