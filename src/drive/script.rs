use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{ScrollframeError, ScrollframeResult};

/// Timed list of page interactions to replay against a [`PageSession`](crate::PageSession).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollScript {
    /// Events in non-decreasing `at_ms` order.
    pub events: Vec<ScriptEvent>,
}

/// One scripted interaction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptEvent {
    /// Milliseconds since the page became ready.
    pub at_ms: u64,
    /// What happens.
    #[serde(flatten)]
    pub action: ScriptAction,
}

/// Scripted interaction kinds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Scroll the page to `offset`.
    Scroll {
        /// Page scroll offset in pixels.
        offset: f64,
    },
    /// Resize the viewport (debounced).
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// Record what the page presents under `name`.
    Capture {
        /// Capture label, used as the output file stem.
        name: String,
    },
}

impl ScrollScript {
    /// Parse a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollframeResult<Self> {
        let script: Self = serde_json::from_reader(r)
            .map_err(|e| ScrollframeError::config(format!("parse scroll script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    /// Parse a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrollframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollframeError::config(format!("open scroll script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check event ordering and capture names.
    pub fn validate(&self) -> ScrollframeResult<()> {
        for pair in self.events.windows(2) {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(ScrollframeError::config(format!(
                    "scroll script events must be ordered by at_ms ({} after {})",
                    pair[1].at_ms, pair[0].at_ms
                )));
            }
        }
        for ev in &self.events {
            match &ev.action {
                ScriptAction::Capture { name }
                    if name.is_empty() || name.contains(['/', '\\']) || name == ".." =>
                {
                    return Err(ScrollframeError::config(format!(
                        "capture name must be a plain file stem: '{name}'"
                    )));
                }
                ScriptAction::Scroll { offset } if !offset.is_finite() => {
                    return Err(ScrollframeError::config("scroll offset must be finite"));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drive/script.rs"]
mod tests;
