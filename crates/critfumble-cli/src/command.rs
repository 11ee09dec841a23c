//! Command parsing and execution.

use critfumble_hexgrid::{
    has_line_of_sight, hex_corners, hex_distance, hex_field_of_view, hex_line, hex_neighbors,
    hex_pathfind_with, hex_range, hex_ring, hex_to_pixel, pixel_to_hex, BlockedSet, Error,
    OffsetCoord,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, Result};

/// A single query against the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Distance(OffsetCoord, OffsetCoord),
    Neighbors(OffsetCoord),
    Range(OffsetCoord, u32),
    Ring(OffsetCoord, u32),
    Line(OffsetCoord, OffsetCoord),
    LineOfSight(OffsetCoord, OffsetCoord),
    FieldOfView(OffsetCoord, u32),
    Path(OffsetCoord, OffsetCoord),
    ToPixel(OffsetCoord),
    FromPixel(f64, f64),
    Corners(OffsetCoord),
}

impl Command {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| CliError::Usage("missing command".to_string()))?;

        let expect = |n: usize| -> Result<()> {
            if rest.len() == n {
                Ok(())
            } else {
                Err(CliError::Usage(format!(
                    "{} takes {} argument(s), got {}",
                    name,
                    n,
                    rest.len()
                )))
            }
        };

        let cmd = match name.as_str() {
            "distance" => {
                expect(2)?;
                Self::Distance(cell(&rest[0])?, cell(&rest[1])?)
            }
            "neighbors" => {
                expect(1)?;
                Self::Neighbors(cell(&rest[0])?)
            }
            "range" => {
                expect(2)?;
                Self::Range(cell(&rest[0])?, range(&rest[1])?)
            }
            "ring" => {
                expect(2)?;
                Self::Ring(cell(&rest[0])?, range(&rest[1])?)
            }
            "line" => {
                expect(2)?;
                Self::Line(cell(&rest[0])?, cell(&rest[1])?)
            }
            "los" => {
                expect(2)?;
                Self::LineOfSight(cell(&rest[0])?, cell(&rest[1])?)
            }
            "fov" => {
                expect(2)?;
                Self::FieldOfView(cell(&rest[0])?, range(&rest[1])?)
            }
            "path" => {
                expect(2)?;
                Self::Path(cell(&rest[0])?, cell(&rest[1])?)
            }
            "to-pixel" => {
                expect(1)?;
                Self::ToPixel(cell(&rest[0])?)
            }
            "from-pixel" => {
                expect(2)?;
                Self::FromPixel(number(&rest[0])?, number(&rest[1])?)
            }
            "corners" => {
                expect(1)?;
                Self::Corners(cell(&rest[0])?)
            }
            other => return Err(CliError::Usage(format!("unknown command: {}", other))),
        };

        Ok(cmd)
    }

    /// Whether the command consults the blocked set.
    pub fn needs_board(&self) -> bool {
        matches!(
            self,
            Self::LineOfSight(..) | Self::FieldOfView(..) | Self::Path(..)
        )
    }

    /// Run the query and render its answer as JSON.
    pub fn run(&self, config: &CliConfig, blocked: &BlockedSet) -> Result<Value> {
        debug!("Running {:?}", self);

        let value = match *self {
            Self::Distance(a, b) => json!({ "distance": hex_distance(a, b) }),
            Self::Neighbors(h) => json!({ "neighbors": hex_neighbors(h) }),
            Self::Range(h, n) => json!({ "cells": hex_range(h, n) }),
            Self::Ring(h, n) => json!({ "cells": hex_ring(h, n) }),
            Self::Line(a, b) => json!({ "cells": hex_line(a, b) }),
            Self::LineOfSight(a, b) => json!({ "visible": has_line_of_sight(a, b, blocked) }),
            Self::FieldOfView(h, n) => json!({ "cells": hex_field_of_view(h, n, blocked) }),
            Self::Path(a, b) => {
                let path = hex_pathfind_with(a, b, blocked, &config.pathfind)?;
                json!({ "path": path })
            }
            Self::ToPixel(h) => json!(hex_to_pixel(h, &config.layout)),
            Self::FromPixel(x, y) => json!(pixel_to_hex(x, y, &config.layout)),
            Self::Corners(h) => json!({ "corners": hex_corners(h, &config.layout) }),
        };

        Ok(value)
    }
}

fn cell(arg: &str) -> Result<OffsetCoord> {
    Ok(arg.parse::<OffsetCoord>()?)
}

fn range(arg: &str) -> Result<u32> {
    let n: i64 = arg
        .trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("range must be an integer, got {:?}", arg)))?;
    if n < 0 {
        return Err(Error::NegativeRange(n).into());
    }
    u32::try_from(n).map_err(|_| CliError::Usage(format!("range {} is too large", n)))
}

fn number(arg: &str) -> Result<f64> {
    arg.trim()
        .parse()
        .map_err(|_| CliError::Usage(format!("expected a number, got {:?}", arg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(list: &[&str], blocked: &BlockedSet) -> Value {
        Command::parse(&args(list))
            .unwrap()
            .run(&CliConfig::default(), blocked)
            .unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse(&args(&["distance", "0,0", "3,0"])).unwrap(),
            Command::Distance(OffsetCoord::new(0, 0), OffsetCoord::new(3, 0))
        );
        assert_eq!(
            Command::parse(&args(&["fov", "1,-2", "4"])).unwrap(),
            Command::FieldOfView(OffsetCoord::new(1, -2), 4)
        );
        assert_eq!(
            Command::parse(&args(&["from-pixel", "15", "8.5"])).unwrap(),
            Command::FromPixel(15.0, 8.5)
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(Command::parse(&[]), Err(CliError::Usage(_))));
        assert!(matches!(
            Command::parse(&args(&["teleport", "0,0"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["distance", "0,0"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Command::parse(&args(&["neighbors", "zero"])),
            Err(CliError::Grid(Error::InvalidKey(_)))
        ));
        assert!(matches!(
            Command::parse(&args(&["neighbors", "2147483647,0"])),
            Err(CliError::Grid(Error::OutOfRange(_)))
        ));
    }

    #[test]
    fn negative_range_is_rejected() {
        assert!(matches!(
            Command::parse(&args(&["range", "0,0", "-1"])),
            Err(CliError::Grid(Error::NegativeRange(-1)))
        ));
    }

    #[test]
    fn distance_output() {
        let out = run(&["distance", "0,0", "0,4"], &BlockedSet::new());
        assert_eq!(out, json!({ "distance": 4 }));
    }

    #[test]
    fn range_output_counts_cells() {
        let out = run(&["range", "0,0", "2"], &BlockedSet::new());
        assert_eq!(out["cells"].as_array().map(Vec::len), Some(19));
    }

    #[test]
    fn line_of_sight_uses_board() {
        let wall = BlockedSet::from_keys(["0,2"]).unwrap();
        assert_eq!(run(&["los", "0,0", "0,4"], &wall), json!({ "visible": false }));
        assert_eq!(run(&["los", "0,0", "0,4"], &BlockedSet::new()), json!({ "visible": true }));
    }

    #[test]
    fn path_output() {
        let out = run(&["path", "0,0", "2,0"], &BlockedSet::new());
        assert_eq!(
            out,
            json!({ "path": [
                { "col": 0, "row": 0 },
                { "col": 1, "row": 0 },
                { "col": 2, "row": 0 },
            ] })
        );

        let goal_blocked = BlockedSet::from_keys(["2,0"]).unwrap();
        assert_eq!(run(&["path", "0,0", "2,0"], &goal_blocked), json!({ "path": null }));
    }

    #[test]
    fn path_budget_is_enforced() {
        let config = CliConfig {
            pathfind: critfumble_hexgrid::PathfindOptions::with_max_expansions(2),
            ..CliConfig::default()
        };
        let err = Command::parse(&args(&["path", "0,0", "30,0"]))
            .unwrap()
            .run(&config, &BlockedSet::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Grid(Error::SearchLimitExceeded { expansions: 2 })
        ));
    }

    #[test]
    fn pixel_round_trip_through_commands() {
        let p = run(&["to-pixel", "3,1"], &BlockedSet::new());
        let x = p["x"].as_f64().unwrap().to_string();
        let y = p["y"].as_f64().unwrap().to_string();
        let back = run(&["from-pixel", &x, &y], &BlockedSet::new());
        assert_eq!(back, json!({ "col": 3, "row": 1 }));
    }

    #[test]
    fn only_blocking_queries_need_a_board() {
        assert!(Command::Path(OffsetCoord::ORIGIN, OffsetCoord::ORIGIN).needs_board());
        assert!(!Command::Distance(OffsetCoord::ORIGIN, OffsetCoord::ORIGIN).needs_board());
    }
}
