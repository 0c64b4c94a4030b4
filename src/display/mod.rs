// Display module for grid formatting and console messages
pub mod formatters;

// Re-export main functions
pub use formatters::{
    format_blank_cell, format_row_label, format_row_summary, format_weight_cell, print_confirmation,
    print_error_line, print_grid, print_retry_prompt, render_grid, ColumnWidths,
};

/// Trait for displaying grid cells
pub trait CellDisplay {
    /// Get the display string for this cell
    fn display_cell(&self) -> String;

    /// Get the weight if this cell holds a musician
    fn weight(&self) -> Option<f64>;
}

impl CellDisplay for Option<f64> {
    fn display_cell(&self) -> String {
        format!("{:.1}", self.weight().unwrap_or(0.0))
    }

    fn weight(&self) -> Option<f64> {
        *self
    }
}
