//! Contains the `IvFrame` structure, the table produced for one instantaneous-values request.

use crate::error::UsgsError;
use chrono::{DateTime, Utc};
use polars::prelude::{col, lit, Column, DataFrame, Expr, IntoLazy};

/// Name of the timestamp column every [`IvFrame`] carries.
pub const DATETIME_COLUMN: &str = "datetime";

/// A Polars `DataFrame` holding the instantaneous values of one site.
///
/// The frame has a `datetime` column (`Datetime(Milliseconds, None)`, UTC,
/// unique and ascending) followed by one `Float64` column per parameter code.
/// A null cell means no reading for that parameter at that instant; a
/// parameter the service had no data for is a column of nulls.
///
/// Instances are produced by [`crate::Usgs::instantaneous_values`] or
/// [`crate::parse_instantaneous_values`].
#[derive(Debug, Clone)]
pub struct IvFrame {
    /// Site identifier as reported by the service (`locationParam`).
    pub site: String,
    /// The underlying table.
    pub frame: DataFrame,
}

impl IvFrame {
    pub fn new(site: impl Into<String>, frame: DataFrame) -> Self {
        Self {
            site: site.into(),
            frame,
        }
    }

    /// Number of distinct timestamps.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Value column names, in table order. `datetime` is not included.
    pub fn parameter_codes(&self) -> Vec<&str> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .filter(|name| *name != DATETIME_COLUMN)
            .collect()
    }

    pub fn column(&self, name: &str) -> Result<&Column, UsgsError> {
        Ok(self.frame.column(name)?)
    }

    /// Keeps the rows matching `predicate`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use usgs::{Usgs, UsgsError, PARAM_DISCHARGE};
    /// use polars::prelude::{col, lit};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), UsgsError> {
    /// let usgs = Usgs::new();
    /// let values = usgs
    ///     .instantaneous_values()
    ///     .site("05568500")
    ///     .parameter_codes(PARAM_DISCHARGE)
    ///     .start_date("2024-05-01")
    ///     .call()
    ///     .await?;
    ///
    /// let high_flow = values.filter(col(PARAM_DISCHARGE).gt(lit(40_000.0)))?;
    /// println!("{}", high_flow.frame);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> Result<IvFrame, UsgsError> {
        let frame = self.frame.clone().lazy().filter(predicate).collect()?;
        Ok(IvFrame::new(self.site.clone(), frame))
    }

    /// Rows with `start <= datetime <= end`.
    pub fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<IvFrame, UsgsError> {
        // The frame stores naive UTC
        let start_naive = start.naive_utc();
        let end_naive = end.naive_utc();

        self.filter(
            col(DATETIME_COLUMN)
                .gt_eq(lit(start_naive))
                .and(col(DATETIME_COLUMN).lt_eq(lit(end_naive))),
        )
    }
}
