// Common traits and error types for the band grid

use crate::config::PlacementLimits;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    InvalidRow {
        row: usize,
        row_count: usize,
    },
    InvalidPosition {
        row: usize,
        position: usize,
        row_len: usize,
    },
    WeightOutOfRange {
        weight: f64,
        min: f64,
        max: f64,
    },
    PositionOccupied {
        row: usize,
        position: usize,
        weight: f64,
    },
    PositionVacant {
        row: usize,
        position: usize,
    },
    RowWeightExceeded {
        row: usize,
        total: f64,
        limit: f64,
    },
    ConfigurationError(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidRow { row, row_count } => {
                write!(f, "Row index {} out of range, band has {} rows", row, row_count)
            }
            GridError::InvalidPosition {
                row,
                position,
                row_len,
            } => {
                write!(
                    f,
                    "Position index {} out of range in row {}, row has {} positions",
                    position, row, row_len
                )
            }
            GridError::WeightOutOfRange { weight, min, max } => {
                write!(f, "Weight {:.1} outside {:.1} to {:.1}", weight, min, max)
            }
            GridError::PositionOccupied { .. } => write!(f, "There is already a musician there."),
            GridError::PositionVacant { .. } => write!(f, "That position is vacant."),
            GridError::RowWeightExceeded { .. } => {
                write!(f, "That would exceed the average weight limit.")
            }
            GridError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// Common trait for jagged placement grids
pub trait GridTrait {
    /// Get the placement limits
    fn limits(&self) -> &PlacementLimits;

    /// Number of rows fixed at creation
    fn row_count(&self) -> usize;

    /// Number of positions in a row, `None` if the row does not exist
    fn row_len(&self, row: usize) -> Option<usize>;

    /// Get the number of occupied positions across all rows
    fn occupied_cells(&self) -> usize;

    /// Check if a position is occupied
    fn is_cell_occupied(&self, row: usize, position: usize) -> GridResult<bool>;

    /// Validate a row index and a position index within that row
    fn validate_coordinates(&self, row: usize, position: usize) -> GridResult<()> {
        let row_len = self.row_len(row).ok_or(GridError::InvalidRow {
            row,
            row_count: self.row_count(),
        })?;
        if position >= row_len {
            return Err(GridError::InvalidPosition {
                row,
                position,
                row_len,
            });
        }
        Ok(())
    }
}
