//! Spreadsheet import: read the grid, locate the order columns and turn rows into
//! [`OrderDraft`](crate::models::OrderDraft)s. Persisting them is the job of
//! [`import_service`](crate::services::import_service).

pub mod columns;
pub mod rows;
pub mod sheet;

use thiserror::Error;

pub use columns::{ColumnMap, OrderColumn};
pub use rows::{RowOutcome, normalize_row};
pub use sheet::{Grid, read_first_sheet};

/// Failures that stop an import before any row is written.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no file was uploaded under the `file` field")]
    MissingFile,

    #[error("the workbook contains no worksheet")]
    NoWorksheet,

    #[error("the spreadsheet has no data rows below the header")]
    NoDataRows,

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("failed to process the spreadsheet")]
    Unreadable(#[source] calamine::Error),
}

/// Failures scoped to a single row. The row is skipped and the import carries on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("row {row}: order number or customer name must not be empty")]
    Validation { row: usize },

    #[error("row {row}: failed to save order {order_number}: {reason}")]
    Persistence {
        row: usize,
        order_number: String,
        reason: String,
    },
}

/// Spreadsheet row number as a person sees it: 1-based, counting the header row.
pub fn display_row(data_index: usize) -> usize {
    data_index + 2
}
