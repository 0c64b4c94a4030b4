// Band Grid: musician placement for the Band of the Hour
// Rows of positions hold musician weights, checked against per-row weight limits

// Modular structure
pub mod config;
pub mod display;
pub mod grid;
pub mod input;
pub mod prompt;
pub mod session;

// Import our error handling module
pub mod session_errors;
pub use session_errors::{SessionError, SessionResult};

// Re-export main types for convenience
pub use config::{BandConfig, DisplayConfig, PlacementLimits};
pub use grid::{BandGrid, GridError, GridResult, GridTrait, PositionId, RowId};
pub use session::{Command, Outcome, Session};
