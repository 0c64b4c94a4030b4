// Band grid configuration
// Defaults reproduce the classic Band of the Hour limits

use serde::{Deserialize, Serialize};

/// Row letters run from 'A' to 'J', so a band never has more than ten rows
pub const ROW_LETTER_LIMIT: usize = 10;

/// Placement limits enforced by the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementLimits {
    /// Maximum number of rows a session may configure
    pub max_rows: usize,
    /// Maximum number of positions in a single row
    pub max_positions: usize,
    /// Lightest musician accepted (inclusive)
    pub min_weight: f64,
    /// Heaviest musician accepted (inclusive)
    pub max_weight: f64,
    /// Upper bound on the summed weight of one row (inclusive)
    pub max_row_weight: f64,
}

impl Default for PlacementLimits {
    fn default() -> Self {
        Self {
            max_rows: 10,
            max_positions: 8,
            min_weight: 45.0,
            max_weight: 200.0,
            max_row_weight: 500.0,
        }
    }
}

impl PlacementLimits {
    pub fn weight_in_range(&self, weight: f64) -> bool {
        weight >= self.min_weight && weight <= self.max_weight
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_rows == 0 || self.max_rows > ROW_LETTER_LIMIT {
            return Err(format!(
                "max_rows must be between 1 and {}, got {}",
                ROW_LETTER_LIMIT, self.max_rows
            ));
        }
        if self.max_positions == 0 {
            return Err("max_positions must be at least 1".to_string());
        }
        if !(self.min_weight > 0.0) || !self.max_weight.is_finite() {
            return Err(format!(
                "weights must be positive and finite, got {} to {}",
                self.min_weight, self.max_weight
            ));
        }
        if self.min_weight > self.max_weight {
            return Err(format!(
                "min_weight {} is above max_weight {}",
                self.min_weight, self.max_weight
            ));
        }
        if !(self.max_row_weight > 0.0) {
            return Err(format!(
                "max_row_weight must be positive, got {}",
                self.max_row_weight
            ));
        }
        Ok(())
    }
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colour error and confirmation lines
    pub use_color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

/// Complete configuration for a band session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    pub limits: PlacementLimits,
    pub display: DisplayConfig,
}

impl BandConfig {
    /// Configuration with default limits and no terminal colours
    pub fn plain() -> Self {
        Self {
            limits: PlacementLimits::default(),
            display: DisplayConfig { use_color: false },
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: BandConfig = serde_json::from_str(&contents)?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    ///
    /// `BAND_GRID_CONFIG` names a JSON file to start from and
    /// `BAND_GRID_COLOR` overrides colour output (`true`/`1`/`yes`/`on` enable it).
    /// A config file that cannot be read or parsed is an error, not a fallback.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = match std::env::var("BAND_GRID_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(path.trim())?,
            _ => Self::default(),
        };

        if let Ok(color) = std::env::var("BAND_GRID_COLOR") {
            config.display.use_color = parse_flag(&color);
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
