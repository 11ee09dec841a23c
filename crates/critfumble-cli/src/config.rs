//! CLI configuration, read from the environment.

use std::path::{Path, PathBuf};

use critfumble_hexgrid::{BlockedSet, HexLayout, PathfindOptions};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CliError, Result};

/// Board file contents: the blocked cells as `"col,row"` keys.
#[derive(Debug, Default, Deserialize)]
pub struct BoardFile {
    #[serde(default)]
    pub blocked: Vec<String>,
}

/// Settings for a single CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Board file with blocked cells; no file means nothing is blocked
    pub board: Option<PathBuf>,

    /// Pixel layout for `to-pixel`, `from-pixel` and `corners`
    pub layout: HexLayout,

    /// Budget for `path`
    pub pathfind: PathfindOptions,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            board: None,
            layout: HexLayout::default(),
            pathfind: PathfindOptions::unbounded(),
        }
    }
}

impl CliConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let board = lookup("HEXGRID_BOARD")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let size = parse_var(&lookup, "HEXGRID_HEX_SIZE")?.unwrap_or(HexLayout::DEFAULT_SIZE);
        let origin_x = parse_var(&lookup, "HEXGRID_ORIGIN_X")?.unwrap_or(0.0);
        let origin_y = parse_var(&lookup, "HEXGRID_ORIGIN_Y")?.unwrap_or(0.0);
        let layout = HexLayout::new(size, origin_x, origin_y)?;

        let pathfind = PathfindOptions {
            max_expansions: parse_var(&lookup, "HEXGRID_MAX_EXPANSIONS")?,
        };

        Ok(Self {
            board,
            layout,
            pathfind,
        })
    }

    /// Load the configured board, or an empty one.
    pub fn load_blocked(&self) -> Result<BlockedSet> {
        match &self.board {
            Some(path) => load_board(path),
            None => Ok(BlockedSet::new()),
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidEnv { var, value }),
    }
}

/// Read a board file and parse its blocked keys.
pub fn load_board(path: &Path) -> Result<BlockedSet> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::BoardIo {
        path: path.to_path_buf(),
        source,
    })?;
    let board: BoardFile = serde_json::from_str(&text)?;
    let blocked = BlockedSet::from_keys(&board.blocked)?;

    if blocked.len() < board.blocked.len() {
        debug!(
            "Board {:?} lists {} duplicate cells",
            path,
            board.blocked.len() - blocked.len()
        );
    }
    info!("Loaded board {:?} with {} blocked cells", path, blocked.len());

    Ok(blocked)
}
