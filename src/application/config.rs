use clap::Parser;

use super::controller::clamp_speed;
use crate::domain::{EngineError, Result, seeding};

/// Command-line options for the interactive binary
#[derive(Parser, Debug, Clone)]
#[command(name = "life-canvas")]
#[command(about = "Conway's Game of Life with pattern seeding and live resizing")]
pub struct Args {
    /// Cell edge length in pixels
    #[arg(long = "cell-size", default_value = "15")]
    pub cell_size: f32,

    /// Lower bound on rows when sizing from the window
    #[arg(long = "min-rows", default_value = "20")]
    pub min_rows: usize,

    /// Lower bound on columns when sizing from the window
    #[arg(long = "min-cols", default_value = "20")]
    pub min_cols: usize,

    /// Fixed row count (with --cols, disables window-based sizing)
    #[arg(long, requires = "cols")]
    pub rows: Option<usize>,

    /// Fixed column count (with --rows, disables window-based sizing)
    #[arg(long, requires = "rows")]
    pub cols: Option<usize>,

    /// Chance each cell starts alive when randomizing (0.0-1.0)
    #[arg(short = 'p', long = "alive-probability", default_value = "0.3")]
    pub alive_probability: f64,

    /// Initial tick interval in milliseconds (50-500)
    #[arg(short = 's', long, default_value = "100")]
    pub speed: u32,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cell count from which stepping runs in parallel (0 = never)
    #[arg(long = "parallel-threshold", default_value = "250000")]
    pub parallel_threshold: usize,
}

/// Validated engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub cell_size: f32,
    pub min_rows: usize,
    pub min_cols: usize,
    /// Fixed (rows, cols); `None` sizes the grid from the viewport
    pub fixed_size: Option<(usize, usize)>,
    pub alive_probability: f64,
    pub speed_ms: u32,
    pub seed: Option<u64>,
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            min_rows: 20,
            min_cols: 20,
            fixed_size: None,
            alive_probability: seeding::DEFAULT_ALIVE_PROBABILITY,
            speed_ms: 100,
            seed: None,
            parallel_threshold: 250_000,
        }
    }
}

impl EngineConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let config = Self {
            cell_size: args.cell_size,
            min_rows: args.min_rows,
            min_cols: args.min_cols,
            fixed_size: args.rows.zip(args.cols),
            alive_probability: args.alive_probability,
            speed_ms: clamp_speed(i64::from(args.speed)),
            seed: args.seed,
            parallel_threshold: args.parallel_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.min_rows == 0 || self.min_cols == 0 {
            return Err(EngineError::InvalidDimension {
                rows: self.min_rows,
                cols: self.min_cols,
            });
        }
        if let Some((rows, cols)) = self.fixed_size {
            if rows == 0 || cols == 0 {
                return Err(EngineError::InvalidDimension { rows, cols });
            }
        }
        seeding::validate_probability(self.alive_probability)
    }
}

impl TryFrom<Args> for EngineConfig {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self> {
        Self::from_args(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("life-canvas").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_defaults_match_default_config() {
        let config = EngineConfig::from_args(parse(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_fixed_size_and_seed() {
        let config = EngineConfig::from_args(parse(&["--rows", "50", "--cols", "100", "--seed", "9"])).unwrap();
        assert_eq!(config.fixed_size, Some((50, 100)));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rows_require_cols() {
        let argv = ["life-canvas", "--rows", "50"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_speed_is_clamped() {
        assert_eq!(EngineConfig::from_args(parse(&["--speed", "10"])).unwrap().speed_ms, 50);
        assert_eq!(EngineConfig::from_args(parse(&["-s", "9000"])).unwrap().speed_ms, 500);
        // Off-step values snap to the nearest 50 ms
        assert_eq!(EngineConfig::from_args(parse(&["--speed", "123"])).unwrap().speed_ms, 100);
        assert_eq!(EngineConfig::from_args(parse(&["--speed", "130"])).unwrap().speed_ms, 150);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            EngineConfig::from_args(parse(&["-p", "1.2"])),
            Err(EngineError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_args(parse(&["--min-rows", "0"])),
            Err(EngineError::InvalidDimension { .. })
        ));
        assert!(EngineConfig::from_args(parse(&["--cell-size", "0"])).is_err());
        assert!(EngineConfig::from_args(parse(&["--rows", "0", "--cols", "4"])).is_err());
    }
}
