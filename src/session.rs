// Band session - builds the grid from console answers and runs the command loop

use crate::config::BandConfig;
use crate::display::print_grid;
use crate::grid::{BandGrid, GridError, GridTrait, PositionId, RowId};
use crate::input::{parse_float_in_range, parse_int_in_range};
use crate::prompt::Prompter;
use crate::session_errors::{SessionError, SessionResult};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

pub const BANNER: &str = "Welcome to the Band of the Hour";
pub const MENU_LABEL: &str = "(A)dd, (R)emove, (P)rint,          e(X)it";

/// Menu commands, chosen by the first letter typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Print,
    Add,
    Remove,
    Exit,
}

impl Command {
    pub fn parse(token: &str) -> Option<Self> {
        match token.chars().next()?.to_ascii_uppercase() {
            'P' => Some(Command::Print),
            'A' => Some(Command::Add),
            'R' => Some(Command::Remove),
            'X' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// What one pass through the command loop did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Printed,
    Added {
        row: RowId,
        position: PositionId,
        weight: f64,
    },
    Removed {
        row: RowId,
        position: PositionId,
        weight: f64,
    },
    /// The operation was abandoned and the grid left untouched
    Rejected(GridError),
    InvalidOption,
    Exited,
}

pub struct Session<R, W> {
    grid: BandGrid,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Greet the user and ask for the band's dimensions
    pub fn initialize(source: R, out: W, config: BandConfig) -> SessionResult<Self> {
        config.limits.validate().map_err(SessionError::Config)?;

        let mut prompter = Prompter::new(source, out, config.display.use_color);
        prompter.line(BANNER)?;
        prompter.line(&"-".repeat(BANNER.len()))?;

        let limits = config.limits;
        let row_count = prompter.read_valid("Please enter number of rows", |t| {
            parse_int_in_range(t, 1, limits.max_rows as i64)
        })? as usize;

        let mut row_lengths = Vec::with_capacity(row_count);
        for index in 0..row_count {
            let row = RowId::from_index(index)
                .ok_or_else(|| SessionError::Config(format!("no row letter for index {}", index)))?;
            let label = format!("Please enter number of positions in row {}", row);
            let positions = prompter.read_valid(&label, |t| {
                parse_int_in_range(t, 1, limits.max_positions as i64)
            })?;
            row_lengths.push(positions as usize);
        }

        let grid = BandGrid::new(&row_lengths, limits)?;
        info!("Band configured with row lengths {:?}", row_lengths);

        Ok(Self { grid, prompter })
    }

    /// Run commands until the user exits or input runs out
    pub fn run(&mut self) -> SessionResult<()> {
        loop {
            match self.step() {
                Ok(Outcome::Exited) => {
                    info!("Session ended by user");
                    return Ok(());
                }
                Ok(outcome) => debug!("Command finished: {:?}", outcome),
                Err(SessionError::InputClosed) => {
                    warn!("Input closed before exit, ending session");
                    self.prompter.line("")?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu once and carry out the chosen command
    pub fn step(&mut self) -> SessionResult<Outcome> {
        self.prompter.line("")?;
        let token = self.prompter.read_token(MENU_LABEL)?;

        match Command::parse(&token) {
            Some(Command::Print) => self.print_positions(),
            Some(Command::Add) => self.add_musician(),
            Some(Command::Remove) => self.remove_musician(),
            Some(Command::Exit) => Ok(Outcome::Exited),
            None => {
                debug!("Unknown menu option '{}'", token);
                self.prompter.retry_with("Invalid option, try again")?;
                Ok(Outcome::InvalidOption)
            }
        }
    }

    /// Print every row with its total and average weight
    pub fn print_positions(&mut self) -> SessionResult<Outcome> {
        print_grid(self.prompter.out_mut(), &self.grid)?;
        Ok(Outcome::Printed)
    }

    pub fn add_musician(&mut self) -> SessionResult<Outcome> {
        let row = self.prompt_row()?;
        let position = self.prompt_position(row)?;

        if let Err(e) = self.grid.check_vacant(row.index(), position.index()) {
            return self.reject(e);
        }

        let weight = self.prompt_weight()?;
        match self.grid.add_musician(row.index(), position.index(), weight) {
            Ok(()) => {
                debug!("Seated {:.1} at {}{}", weight, row, position);
                self.prompter.confirm("Musician added.")?;
                Ok(Outcome::Added {
                    row,
                    position,
                    weight,
                })
            }
            Err(e) => self.reject(e),
        }
    }

    pub fn remove_musician(&mut self) -> SessionResult<Outcome> {
        let row = self.prompt_row()?;
        let position = self.prompt_position(row)?;

        match self.grid.remove_musician(row.index(), position.index()) {
            Ok(weight) => {
                debug!("Vacated {}{} ({:.1})", row, position, weight);
                self.prompter.confirm("Musician removed.")?;
                Ok(Outcome::Removed {
                    row,
                    position,
                    weight,
                })
            }
            Err(e) => self.reject(e),
        }
    }

    fn prompt_row(&mut self) -> SessionResult<RowId> {
        let row_count = self.grid.row_count();
        self.prompter
            .read_valid("Please enter row letter", |t| RowId::parse(t, row_count))
    }

    fn prompt_position(&mut self, row: RowId) -> SessionResult<PositionId> {
        let row_len = self.grid.row_len(row.index()).unwrap_or(0);
        let label = format!("Please enter position number (1 to {})", row_len);
        self.prompter
            .read_valid(&label, |t| PositionId::parse(t, row_len))
    }

    fn prompt_weight(&mut self) -> SessionResult<f64> {
        let limits = self.grid.limits();
        let (min, max) = (limits.min_weight, limits.max_weight);
        let label = format!("Please enter weight ({:.1} to {:.1})", min, max);
        self.prompter
            .read_valid(&label, |t| parse_float_in_range(t, min, max))
    }

    fn reject(&mut self, error: GridError) -> SessionResult<Outcome> {
        self.prompter.error(&error.to_string())?;
        Ok(Outcome::Rejected(error))
    }

    pub fn grid(&self) -> &BandGrid {
        &self.grid
    }

    pub fn into_output(self) -> W {
        self.prompter.into_out()
    }
}
