//! Console settings: an optional TOML file overridden by command-line flags.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chess_ai::Difficulty;
use chess_core::Color;
use serde::{Deserialize, Serialize};

/// Who sits on the other side of the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two humans share the console
    Human,
    /// Human against the engine
    #[default]
    Engine,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Human => f.write_str("human"),
            Mode::Engine => f.write_str("engine"),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Mode::Human),
            "engine" => Ok(Mode::Engine),
            _ => bail!("unknown mode '{s}' (expected human or engine)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub mode: Mode,
    pub difficulty: Difficulty,
    /// Color played by the engine in engine mode
    pub engine_color: Color,
    /// Pause before the engine answers, so its move is visible as a reply
    pub engine_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Engine,
            difficulty: Difficulty::Medium,
            engine_color: Color::Black,
            engine_delay_ms: 100,
        }
    }
}

/// Flag values before they are layered over the file.
#[derive(Debug, Default)]
struct Overrides {
    config: Option<PathBuf>,
    mode: Option<Mode>,
    difficulty: Option<Difficulty>,
    engine_color: Option<Color>,
    delay_ms: Option<u64>,
}

impl ConsoleConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid console config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Builds the settings from command-line arguments (program name
    /// excluded). `--config` names the base file; every other flag wins over
    /// the file.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let overrides = parse_flags(args)?;

        let mut config = match &overrides.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(mode) = overrides.mode {
            config.mode = mode;
        }
        if let Some(difficulty) = overrides.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(color) = overrides.engine_color {
            config.engine_color = color;
        }
        if let Some(ms) = overrides.delay_ms {
            config.engine_delay_ms = ms;
        }
        Ok(config)
    }

    /// Color the engine plays, if any.
    pub fn engine_side(&self) -> Option<Color> {
        match self.mode {
            Mode::Human => None,
            Mode::Engine => Some(self.engine_color),
        }
    }

    pub fn engine_delay(&self) -> Duration {
        Duration::from_millis(self.engine_delay_ms)
    }
}

fn parse_flags<I, S>(args: I) -> Result<Overrides>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut overrides = Overrides::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let flag = flag.as_ref();
        let mut value = || {
            args.next()
                .map(|v| v.as_ref().to_string())
                .ok_or_else(|| anyhow!("{flag} needs a value"))
        };
        match flag {
            "--config" | "-c" => overrides.config = Some(PathBuf::from(value()?)),
            "--mode" | "-m" => overrides.mode = Some(value()?.parse()?),
            "--difficulty" | "-d" => overrides.difficulty = Some(value()?.parse()?),
            "--engine-color" => overrides.engine_color = Some(value()?.parse()?),
            "--delay" => {
                let raw = value()?;
                let ms = raw
                    .parse()
                    .with_context(|| format!("--delay expects milliseconds, got '{raw}'"))?;
                overrides.delay_ms = Some(ms);
            }
            other => bail!("unknown argument '{other}'"),
        }
    }

    Ok(overrides)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
