use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::{GameStatus, LifecycleEvent};

/// Failures raised by the simulation core.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// Food placement found no unoccupied cell.
    #[error("no free cell left for food on a {cells}-cell grid")]
    ExhaustedGrid { cells: usize },

    /// A lifecycle event arrived in a state that has no transition for it.
    #[error("no transition from {from:?} on {event:?}")]
    InvalidTransition {
        from: GameStatus,
        event: LifecycleEvent,
    },
}

/// Failures loading the presentation assets at startup.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read asset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognised color {value:?} for {token}")]
    Color { token: &'static str, value: String },

    #[error("glyph {glyph:?} for {token} is {width} columns wide, expected {expected}")]
    GlyphWidth {
        token: &'static str,
        glyph: String,
        width: usize,
        expected: usize,
    },
}
