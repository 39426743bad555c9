//! Renderer intents.
//!
//! An intent is what a front-end asks the game to do in response to user
//! input. Intents are plain values so scripts and tests can replay them.

use super::error::ParseIntentError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A request from the renderer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum Intent {
    /// Place the next mark on a cell (0-8).
    #[display("place:{}", _0)]
    Place(usize),
    /// Jump to a move in the history list.
    #[display("jump:{}", _0)]
    JumpTo(usize),
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses `place:N`, `jump:N`, or a bare `N` (place).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (kind, number) = match trimmed.split_once(':') {
            Some((kind, number)) => (kind.trim(), number.trim()),
            None => ("place", trimmed),
        };

        let index = number
            .parse::<usize>()
            .map_err(|_| ParseIntentError::new(s, "expected a non-negative number"))?;

        match kind.to_ascii_lowercase().as_str() {
            "place" | "p" => Ok(Intent::Place(index)),
            "jump" | "j" => Ok(Intent::JumpTo(index)),
            _ => Err(ParseIntentError::new(s, "expected 'place' or 'jump'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("4".parse::<Intent>(), Ok(Intent::Place(4)));
        assert_eq!("place:8".parse::<Intent>(), Ok(Intent::Place(8)));
        assert_eq!(" jump: 1 ".parse::<Intent>(), Ok(Intent::JumpTo(1)));
        assert_eq!("J:0".parse::<Intent>(), Ok(Intent::JumpTo(0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("undo:1".parse::<Intent>().is_err());
        assert!("place:-1".parse::<Intent>().is_err());
        assert!("".parse::<Intent>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let intent = Intent::JumpTo(3);
        assert_eq!(intent.to_string().parse::<Intent>(), Ok(intent));
    }
}
