//! Runtime configuration: environment first, then command-line flags.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::{standard_scenes, Deck};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    pub seed: u64,
    pub start_slide: usize,
    pub log_path: Option<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            start_slide: 0,
            log_path: None,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

impl DeckConfig {
    /// Read `NEON_DECK_SEED`, `NEON_DECK_START` and `NEON_DECK_LOG_PATH`.
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let seed = env::var("NEON_DECK_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let start_slide = env::var("NEON_DECK_START")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.start_slide);

        let log_path = env::var("NEON_DECK_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            start_slide,
            log_path,
        }
    }

    /// Overlay `--seed N`, `--start N` and `--log PATH` (program name
    /// already stripped).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u64>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--start" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --start"))?;
                    self.start_slide = v
                        .parse::<usize>()
                        .map_err(|_| anyhow!("invalid --start value: {}", v))?;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }
}

/// Environment configuration with command-line flags on top.
pub fn parse_args(args: &[String]) -> Result<DeckConfig> {
    DeckConfig::from_env().apply_args(args)
}

/// The standard deck for `config`, starting at its (clamped) slide.
pub fn build_default_deck(config: &DeckConfig) -> Deck {
    Deck::new(standard_scenes(config.seed, GRID_WIDTH, GRID_HEIGHT)).with_start(config.start_slide)
}
