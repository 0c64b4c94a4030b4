// Grid module - the jagged band grid and how rows and positions are named

pub mod addressing;
pub mod band;
pub mod traits;

// Re-export the main grid types for easy access
pub use addressing::{PositionId, RowId};
pub use band::BandGrid;
pub use traits::{GridError, GridResult, GridTrait};

// Re-export common types used by the grid
pub use crate::config::PlacementLimits;
