//! Recognition results and the recognizer control trait.

use serde::{Deserialize, Serialize};

use super::SpeechError;

// ---------------------------------------------------------------------------
// RecognitionConfig
// ---------------------------------------------------------------------------

/// Settings handed to the platform recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionConfig {
    /// Recognition language, e.g. `"en-US"`.
    pub language: String,
    /// Keep listening across pauses instead of stopping after one phrase.
    pub continuous: bool,
    /// Deliver partial hypotheses as well as final results.
    pub interim_results: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
            continuous: true,
            interim_results: true,
        }
    }
}

// ---------------------------------------------------------------------------
// RecognitionBatch
// ---------------------------------------------------------------------------

/// One result slot from the recognizer (best alternative only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionAlternative {
    pub transcript: String,
    /// `true` once the platform will no longer revise this segment.
    pub is_final: bool,
}

impl RecognitionAlternative {
    pub fn final_text(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }

    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }
}

/// A result event: the full result list plus the index of the first entry
/// that changed.  Entries before `result_index` were already delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionBatch {
    pub results: Vec<RecognitionAlternative>,
    pub result_index: usize,
}

impl RecognitionBatch {
    pub fn new(results: Vec<RecognitionAlternative>, result_index: usize) -> Self {
        Self {
            results,
            result_index,
        }
    }

    /// Split the new entries into `(final_text, interim_text)`.
    ///
    /// Final transcripts are joined with single spaces; interim transcripts
    /// are concatenated as delivered.  Both are empty when nothing new
    /// arrived.
    pub fn split(&self) -> (String, String) {
        let mut finals = Vec::new();
        let mut interim = String::new();
        for res in self.results.iter().skip(self.result_index) {
            if res.is_final {
                finals.push(res.transcript.trim());
            } else {
                interim.push_str(&res.transcript);
            }
        }
        (finals.join(" "), interim)
    }
}

// ---------------------------------------------------------------------------
// Recognizer
// ---------------------------------------------------------------------------

/// Control surface of the platform recognizer.
///
/// Start/end/error/result notifications flow back asynchronously as
/// session events, not as return values.
pub trait Recognizer: Send {
    /// Begin listening.  May return [`SpeechError::TransientRecognition`] if
    /// the platform is already listening.
    fn start(&mut self, config: &RecognitionConfig) -> Result<(), SpeechError>;

    /// Stop listening.
    fn stop(&mut self);
}

// ---------------------------------------------------------------------------
// MockRecognizer
// ---------------------------------------------------------------------------

/// Records start/stop calls; fails every start with `start_error` when set.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MockRecognizer {
    pub starts: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    pub stops: std::sync::Arc<std::sync::atomic::AtomicUsize>,
    pub start_error: Option<SpeechError>,
}

#[cfg(test)]
impl Recognizer for MockRecognizer {
    fn start(&mut self, _config: &RecognitionConfig) -> Result<(), SpeechError> {
        self.starts
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match &self.start_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_separates_final_and_interim() {
        let batch = RecognitionBatch::new(
            vec![
                RecognitionAlternative::final_text("hello"),
                RecognitionAlternative::interim("wor"),
            ],
            0,
        );
        assert_eq!(batch.split(), ("hello".to_string(), "wor".to_string()));
    }

    #[test]
    fn split_skips_entries_before_result_index() {
        let batch = RecognitionBatch::new(
            vec![
                RecognitionAlternative::final_text("already seen"),
                RecognitionAlternative::final_text("set rate to 1.5"),
            ],
            1,
        );
        assert_eq!(batch.split().0, "set rate to 1.5");
    }

    #[test]
    fn split_joins_multiple_finals_with_spaces() {
        let batch = RecognitionBatch::new(
            vec![
                RecognitionAlternative::final_text("hello "),
                RecognitionAlternative::final_text(" there"),
            ],
            0,
        );
        assert_eq!(batch.split().0, "hello there");
    }

    #[test]
    fn split_of_interim_only_has_empty_final() {
        let batch = RecognitionBatch::new(vec![RecognitionAlternative::interim("stop")], 0);
        let (finals, interim) = batch.split();
        assert!(finals.is_empty());
        assert_eq!(interim, "stop");
    }

    #[test]
    fn result_index_past_end_is_empty() {
        let batch = RecognitionBatch::new(vec![RecognitionAlternative::final_text("x")], 5);
        assert_eq!(batch.split(), (String::new(), String::new()));
    }

    #[test]
    fn default_recognition_config() {
        let cfg = RecognitionConfig::default();
        assert_eq!(cfg.language, "en-US");
        assert!(cfg.continuous);
        assert!(cfg.interim_results);
    }
}
