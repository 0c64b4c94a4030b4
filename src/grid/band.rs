// Band Grid - jagged rows of positions holding musician weights
// Row lengths are fixed when the grid is built and never change

use crate::config::PlacementLimits;
use crate::grid::traits::{GridError, GridResult, GridTrait};
use log::{debug, info};

pub struct BandGrid {
    limits: PlacementLimits,
    rows: Vec<Vec<Option<f64>>>,
}

impl BandGrid {
    /// Build an all-vacant grid with one entry of `row_lengths` per row
    pub fn new(row_lengths: &[usize], limits: PlacementLimits) -> GridResult<Self> {
        limits.validate().map_err(GridError::ConfigurationError)?;

        if row_lengths.is_empty() || row_lengths.len() > limits.max_rows {
            return Err(GridError::ConfigurationError(format!(
                "row count {} outside 1 to {}",
                row_lengths.len(),
                limits.max_rows
            )));
        }
        if let Some((row, &len)) = row_lengths
            .iter()
            .enumerate()
            .find(|&(_, &len)| len == 0 || len > limits.max_positions)
        {
            return Err(GridError::ConfigurationError(format!(
                "row {} has {} positions, expected 1 to {}",
                row, len, limits.max_positions
            )));
        }

        let rows = row_lengths.iter().map(|&len| vec![None; len]).collect();
        debug!("Created band grid with row lengths {:?}", row_lengths);

        Ok(Self { limits, rows })
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    /// Weight at a position, `None` when vacant
    pub fn weight_at(&self, row: usize, position: usize) -> GridResult<Option<f64>> {
        self.validate_coordinates(row, position)?;
        Ok(self.rows[row][position])
    }

    /// Sum of the occupied weights in a row
    pub fn row_total(&self, row: usize) -> GridResult<f64> {
        let positions = self.row(row)?;
        // Float `sum` of nothing is -0.0, which would print as "-0.0"
        Ok(positions.iter().flatten().fold(0.0_f64, |total, &weight| total + weight))
    }

    /// Row total divided by the row's own length
    pub fn row_average(&self, row: usize) -> GridResult<f64> {
        let len = self.row(row)?.len();
        if len == 0 {
            return Ok(0.0);
        }
        Ok(self.row_total(row)? / len as f64)
    }

    /// Length of the longest row
    pub fn widest_row(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check whether a position is free to take a musician, ignoring weight
    pub fn check_vacant(&self, row: usize, position: usize) -> GridResult<()> {
        match self.weight_at(row, position)? {
            Some(weight) => Err(GridError::PositionOccupied {
                row,
                position,
                weight,
            }),
            None => Ok(()),
        }
    }

    /// Check every add precondition without touching the grid
    pub fn can_add(&self, row: usize, position: usize, weight: f64) -> GridResult<()> {
        self.check_vacant(row, position)?;

        if !self.limits.weight_in_range(weight) {
            return Err(GridError::WeightOutOfRange {
                weight,
                min: self.limits.min_weight,
                max: self.limits.max_weight,
            });
        }

        let total = self.row_total(row)? + weight;
        if total > self.limits.max_row_weight {
            return Err(GridError::RowWeightExceeded {
                row,
                total,
                limit: self.limits.max_row_weight,
            });
        }
        Ok(())
    }

    /// Seat a musician; the grid is unchanged on any error
    pub fn add_musician(&mut self, row: usize, position: usize, weight: f64) -> GridResult<()> {
        if let Err(e) = self.can_add(row, position, weight) {
            debug!("Rejected add at row {} position {}: {}", row, position, e);
            return Err(e);
        }

        self.rows[row][position] = Some(weight);
        info!(
            "Added musician ({:.1}) at row {} position {}",
            weight, row, position
        );
        Ok(())
    }

    /// Vacate a position, returning the weight that was there
    pub fn remove_musician(&mut self, row: usize, position: usize) -> GridResult<f64> {
        self.validate_coordinates(row, position)?;

        match self.rows[row][position].take() {
            Some(weight) => {
                info!(
                    "Removed musician ({:.1}) from row {} position {}",
                    weight, row, position
                );
                Ok(weight)
            }
            None => {
                debug!("Rejected remove at row {} position {}: vacant", row, position);
                Err(GridError::PositionVacant { row, position })
            }
        }
    }

    fn row(&self, row: usize) -> GridResult<&Vec<Option<f64>>> {
        self.rows.get(row).ok_or(GridError::InvalidRow {
            row,
            row_count: self.rows.len(),
        })
    }
}

impl GridTrait for BandGrid {
    fn limits(&self) -> &PlacementLimits {
        &self.limits
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    fn is_cell_occupied(&self, row: usize, position: usize) -> GridResult<bool> {
        Ok(self.weight_at(row, position)?.is_some())
    }
}
