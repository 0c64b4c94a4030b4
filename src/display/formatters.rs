// Display formatting utilities for the band grid

use crate::display::CellDisplay;
use crate::config::PlacementLimits;
use crate::grid::{BandGrid, GridTrait, RowId};
use crate::prompt::LABEL_WIDTH;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, Write};

/// Narrowest field used for weights, fits `200.0`
const MIN_FIELD_WIDTH: usize = 5;

/// Field widths for one printed grid, wide enough for the largest allowed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub cell: usize,
    pub summary: usize,
}

impl ColumnWidths {
    pub fn for_limits(limits: &PlacementLimits) -> Self {
        let width_of = |value: f64| format!("{:.1}", value).len().max(MIN_FIELD_WIDTH);
        Self {
            cell: width_of(limits.max_weight),
            summary: width_of(limits.max_row_weight),
        }
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::for_limits(&PlacementLimits::default())
    }
}

/// Format one position: weight to one decimal place, right-aligned
pub fn format_weight_cell(cell: &Option<f64>, widths: ColumnWidths) -> String {
    format!("{:>width$} ", cell.display_cell(), width = widths.cell)
}

/// Placeholder for a column past the end of a shorter row
pub fn format_blank_cell(widths: ColumnWidths) -> String {
    " ".repeat(widths.cell + 1)
}

pub fn format_row_label(row: RowId) -> String {
    format!("{}: ", row.letter())
}

/// Trailing `[ total, average ]` block of a printed row
pub fn format_row_summary(total: f64, average: f64, widths: ColumnWidths) -> String {
    format!(
        " [ {:>w$.1}, {:>w$.1} ]",
        total,
        average,
        w = widths.summary
    )
}

/// Render every row of the grid, aligned to the widest row
pub fn render_grid(grid: &BandGrid) -> Vec<String> {
    let width = grid.widest_row();
    let widths = ColumnWidths::for_limits(grid.limits());

    grid.rows()
        .iter()
        .enumerate()
        .filter_map(|(index, positions)| {
            let row = RowId::from_index(index)?;
            let mut line = format_row_label(row);

            for column in 0..width {
                match positions.get(column) {
                    Some(cell) => line.push_str(&format_weight_cell(cell, widths)),
                    None => line.push_str(&format_blank_cell(widths)),
                }
            }

            let total = grid.row_total(index).unwrap_or(0.0);
            let average = grid.row_average(index).unwrap_or(0.0);
            line.push_str(&format_row_summary(total, average, widths));
            Some(line)
        })
        .collect()
}

/// Print the grid, one line per row
pub fn print_grid<W: Write>(out: &mut W, grid: &BandGrid) -> io::Result<()> {
    for line in render_grid(grid) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write text in the given colour, or plain when colour is off
fn write_styled<W: Write>(
    out: &mut W,
    text: &str,
    color: Color,
    use_color: bool,
) -> io::Result<()> {
    if use_color {
        queue!(out, SetForegroundColor(color), Print(text), ResetColor)
    } else {
        out.write_all(text.as_bytes())
    }
}

/// `ERROR: ...` line ending the current operation
pub fn print_error_line<W: Write>(out: &mut W, message: &str, use_color: bool) -> io::Result<()> {
    write_styled(out, &format!("ERROR: {}", message), Color::Red, use_color)?;
    writeln!(out)
}

/// `ERROR: ...` re-prompt left open for the next answer
pub fn print_retry_prompt<W: Write>(out: &mut W, message: &str, use_color: bool) -> io::Result<()> {
    let text = format!("{:<width$}", format!("ERROR: {}", message), width = LABEL_WIDTH);
    write_styled(out, &text, Color::Red, use_color)?;
    write!(out, ": ")?;
    out.flush()
}

/// `****** ...` confirmation after a successful change
pub fn print_confirmation<W: Write>(out: &mut W, message: &str, use_color: bool) -> io::Result<()> {
    write_styled(out, &format!("****** {}", message), Color::Green, use_color)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_share_one_width() {
        let widths = ColumnWidths::default();
        assert_eq!(widths, ColumnWidths { cell: 5, summary: 5 });
        assert_eq!(format_weight_cell(&Some(60.0), widths), " 60.0 ");
        assert_eq!(format_weight_cell(&Some(200.0), widths), "200.0 ");
        assert_eq!(format_weight_cell(&None, widths), "  0.0 ");
        assert_eq!(
            format_blank_cell(widths).len(),
            format_weight_cell(&Some(45.0), widths).len()
        );
    }

    #[test]
    fn test_row_summary() {
        let widths = ColumnWidths::default();
        assert_eq!(format_row_summary(60.0, 30.0, widths), " [  60.0,  30.0 ]");
        assert_eq!(format_row_summary(500.0, 62.5, widths), " [ 500.0,  62.5 ]");
    }

    #[test]
    fn test_heavy_limits_widen_columns() {
        let limits = PlacementLimits {
            max_weight: 1500.0,
            max_row_weight: 3000.0,
            ..PlacementLimits::default()
        };
        let mut grid = BandGrid::new(&[2, 2], limits).unwrap();
        grid.add_musician(0, 0, 1500.0).unwrap();
        grid.add_musician(1, 1, 60.0).unwrap();

        let lines = render_grid(&grid);
        assert_eq!(
            lines,
            vec![
                "A: 1500.0    0.0  [ 1500.0,  750.0 ]".to_string(),
                "B:    0.0   60.0  [   60.0,   30.0 ]".to_string(),
            ]
        );
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_render_aligns_short_rows() {
        let mut grid = BandGrid::new(&[2, 1], PlacementLimits::default()).unwrap();
        grid.add_musician(0, 0, 60.0).unwrap();

        let lines = render_grid(&grid);
        assert_eq!(
            lines,
            vec![
                "A:  60.0   0.0  [  60.0,  30.0 ]".to_string(),
                "B:   0.0        [   0.0,   0.0 ]".to_string(),
            ]
        );
    }

    #[test]
    fn test_average_uses_own_row_length() {
        let mut grid = BandGrid::new(&[4, 1], PlacementLimits::default()).unwrap();
        grid.add_musician(1, 0, 100.0).unwrap();

        let lines = render_grid(&grid);
        assert!(lines[1].ends_with("[ 100.0, 100.0 ]"));
        assert!(lines[0].ends_with("[   0.0,   0.0 ]"));
    }

    #[test]
    fn test_plain_retry_prompt() {
        let mut out = Vec::new();
        print_retry_prompt(&mut out, "Out of range, try again", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ERROR: Out of range, try again            : "
        );
    }

    #[test]
    fn test_colored_error_keeps_text() {
        let mut out = Vec::new();
        print_error_line(&mut out, "That position is vacant.", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ERROR: That position is vacant."));
        assert!(text.starts_with('\u{1b}'));
    }
}
