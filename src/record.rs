//! Corpus record model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One line of a newline-delimited JSON corpus file.
///
/// `text` carries the transcription with its Aozora Bunko markup on input and
/// the cleaned body on output. `footnote` is absent on input and populated
/// exactly once when the colophon block is split off. `meta` holds the index
/// row for the work and passes through the pipeline untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Body text.
    pub text: String,
    /// Colophon block split off the body, if one was found.
    #[serde(default)]
    pub footnote: Option<String>,
    /// Bibliographic metadata from the Aozora index, passed through verbatim.
    pub meta: Map<String, Value>,
}

impl Record {
    /// Extracts the identifier used to select per-record override behavior.
    pub fn id(&self) -> RecordId {
        RecordId {
            work: meta_str(&self.meta, "作品ID"),
            author: meta_str(&self.meta, "人物ID"),
        }
    }
}

fn meta_str(meta: &Map<String, Value>, key: &str) -> Option<String> {
    meta.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Stable identifier for a record, read from its metadata.
///
/// The work identifier selects override behavior; the author identifier only
/// disambiguates error reports. Neither participates in ordering or
/// deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordId {
    /// 作品ID — the work identifier.
    pub work: Option<String>,
    /// 人物ID — the author identifier.
    pub author: Option<String>,
}

impl RecordId {
    /// True when the work identifier is one of `works`.
    pub fn work_in(&self, works: &[&str]) -> bool {
        self.work.as_deref().is_some_and(|w| works.contains(&w))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.work, &self.author) {
            (Some(work), Some(author)) => write!(f, "{}/{}", work, author),
            (Some(work), None) => write!(f, "{}", work),
            (None, Some(author)) => write!(f, "?/{}", author),
            (None, None) => write!(f, "<unidentified>"),
        }
    }
}
