//! Showcase configuration
//!
//! Optional `~/.config/vietnum/showcase.toml` overriding the numbers
//! the demo driver prints.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vietnum_core::{VietnumError, VietnumResult};

/// Demo showcase configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Hand-picked sample magnitudes
    pub samples: Vec<i64>,
    /// Whether to append the i64::MAX and i64::MIN lines
    pub include_extremes: bool,
    /// Stepped range appended after the samples
    pub range: RangeConfig,
}

/// Inclusive stepped range of magnitudes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// First magnitude of the range
    pub start: i64,
    /// Last magnitude of the range (inclusive)
    pub end: i64,
    /// Step between magnitudes; a non-positive step disables the range
    pub step: i64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            samples: vec![
                -55,
                -1_055,
                101_002_101_000_000_000,
                100_000_000_000,
                1_000_000_000_000,
                1_000_000_000_000_000,
                1_000_000_000_000_000_000,
                1_000_000_234_000_000_000,
                1_000_000_000_222_000_000,
                1_009,
                9,
                90,
                900,
                1_000_000,
                1_090_000,
                1_090_010,
                1_000_010,
                10,
                100,
                55,
                20_000,
            ],
            include_extremes: true,
            range: RangeConfig {
                start: 100_000,
                end: 2_000_000,
                step: 10_000,
            },
        }
    }
}

impl ShowcaseConfig {
    /// Load the showcase config, falling back to the built-in samples
    /// when no config file exists.
    pub fn load() -> VietnumResult<Self> {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no user config directory, using built-in showcase");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no showcase config, using built-in showcase");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content).map_err(|e| VietnumError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), "loaded showcase config");
        Ok(config)
    }

    /// Configuration file path under the user config directory.
    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("vietnum").join("showcase.toml"))
    }

    /// All numbers the showcase prints, in order.
    pub fn numbers(&self) -> Vec<i64> {
        let mut numbers = self.samples.clone();

        if self.include_extremes {
            numbers.push(i64::MAX);
            numbers.push(i64::MIN);
        }

        if self.range.step > 0 {
            let mut n = self.range.start;
            while n <= self.range.end {
                numbers.push(n);
                n = match n.checked_add(self.range.step) {
                    Some(next) => next,
                    None => break,
                };
            }
        }

        numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_showcase() {
        let config = ShowcaseConfig::default();
        assert!(config.samples.contains(&-1_055));
        assert!(config.samples.contains(&101_002_101_000_000_000));
        assert!(config.include_extremes);
    }

    #[test]
    fn test_numbers_includes_range() {
        let config = ShowcaseConfig {
            samples: vec![7],
            include_extremes: false,
            range: RangeConfig {
                start: 10,
                end: 30,
                step: 10,
            },
        };
        assert_eq!(config.numbers(), vec![7, 10, 20, 30]);
    }

    #[test]
    fn test_non_positive_step_disables_range() {
        let config = ShowcaseConfig {
            samples: vec![1],
            include_extremes: false,
            range: RangeConfig {
                start: 10,
                end: 30,
                step: 0,
            },
        };
        assert_eq!(config.numbers(), vec![1]);
    }

    #[test]
    fn test_extremes_appended() {
        let config = ShowcaseConfig {
            samples: vec![],
            include_extremes: true,
            range: RangeConfig {
                start: 0,
                end: -1,
                step: 1,
            },
        };
        assert_eq!(config.numbers(), vec![i64::MAX, i64::MIN]);
    }

    #[test]
    fn test_parse_toml() {
        let config: ShowcaseConfig = toml::from_str(
            r#"
            samples = [1, -2, 3]
            include_extremes = false

            [range]
            start = 5
            end = 10
            step = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.samples, vec![1, -2, 3]);
        assert!(!config.include_extremes);
        assert_eq!(config.numbers(), vec![1, -2, 3, 5, 10]);
    }
}
