//! Core types for corpora-cuts

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Labeled segment of a recording.
///
/// Only the fields needed to inspect a manifest are typed; everything else in
/// the record (recording, features, custom fields) is kept in `extra` so a
/// cut survives a read/write cycle unchanged.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Cut {
    /// Unique cut identifier
    pub id: String,
    /// Start time in seconds within the recording, absent on mixed cuts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Duration in seconds, absent on mixed cuts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Channel index or indices
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Value>,
    /// Transcribed supervision segments
    #[serde(default)]
    pub supervisions: Vec<Supervision>,
    /// Remaining fields, kept opaque
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Supervision segment attached to a cut.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Supervision {
    pub id: String,
    pub recording_id: String,
    pub start: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cut {
    /// Create a cut without supervisions.
    pub fn new(id: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            id: id.into(),
            start: Some(start),
            duration: Some(duration),
            channel: None,
            supervisions: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Attach a single supervision spanning the whole cut.
    pub fn with_text(mut self, recording_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.supervisions.push(Supervision {
            id: self.id.clone(),
            recording_id: recording_id.into(),
            start: 0.0,
            duration: self.duration(),
            channel: None,
            text: Some(text.into()),
            language: None,
            speaker: None,
            extra: Map::new(),
        });
        self
    }

    pub fn num_supervisions(&self) -> usize {
        self.supervisions.len()
    }

    /// Concatenated supervision text, space separated.
    pub fn text(&self) -> String {
        self.supervisions
            .iter()
            .filter_map(|s| s.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn start(&self) -> f64 {
        self.start.unwrap_or(0.0)
    }

    /// Duration in seconds.
    ///
    /// Mixed cuts carry no duration of their own; it is the latest end of
    /// their tracks.
    pub fn duration(&self) -> f64 {
        self.duration
            .or_else(|| self.tracks_duration())
            .unwrap_or(0.0)
    }

    /// End time in seconds within the recording.
    pub fn end(&self) -> f64 {
        self.start() + self.duration()
    }

    fn tracks_duration(&self) -> Option<f64> {
        self.extra
            .get("tracks")?
            .as_array()?
            .iter()
            .filter_map(|track| {
                let offset = track.get("offset").and_then(Value::as_f64).unwrap_or(0.0);
                let duration = track.get("cut")?.get("duration")?.as_f64()?;
                Some(offset + duration)
            })
            .reduce(f64::max)
    }
}
