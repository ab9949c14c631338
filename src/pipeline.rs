//! Per-file pipeline tying detection, transform and revert together.
//!
//! Everything here is pure over text; the walker owns all I/O.

use crate::config::Config;
use crate::declaration::EnumDeclaration;
use crate::detector::FieldDetector;
use crate::models::{Detection, Direction, FileOutcome, Marker, NoOpReason};
use crate::revert::RevertEngine;
use crate::rules::HeuristicSet;
use crate::transform::TransformEngine;

/// New text for one file together with what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutcome {
    pub text: String,
    pub outcome: FileOutcome,
    pub detection: Option<Detection>,
}

impl TextOutcome {
    fn unchanged(text: &str, reason: NoOpReason) -> Self {
        Self {
            text: text.to_string(),
            outcome: FileOutcome::Unchanged { reason },
            detection: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Retrofitter {
    detector: FieldDetector,
    transform: TransformEngine,
    revert: RevertEngine,
}

impl Retrofitter {
    pub fn new(marker: Marker, heuristics: &HeuristicSet) -> crate::Result<Self> {
        Ok(Self {
            detector: FieldDetector::new(heuristics)?,
            transform: TransformEngine::new(marker.clone())?,
            revert: RevertEngine::new(marker)?,
        })
    }

    pub fn from_config(config: &Config) -> crate::Result<Self> {
        Self::new(config.marker.clone(), &config.heuristics.to_heuristic_set())
    }

    pub fn detector(&self) -> &FieldDetector {
        &self.detector
    }

    pub fn run(&self, direction: Direction, text: &str) -> TextOutcome {
        match direction {
            Direction::Apply => self.apply_text(text),
            Direction::Revert => self.revert_text(text),
        }
    }

    pub fn apply_text(&self, text: &str) -> TextOutcome {
        if self.transform.is_transformed(text) {
            return TextOutcome::unchanged(text, NoOpReason::AlreadyTransformed);
        }
        if EnumDeclaration::parse(text).is_none() {
            return TextOutcome::unchanged(text, NoOpReason::NotAnEnum);
        }

        let detection = self.detector.detect(text);
        match detection.clone().into_fields() {
            Err(missing) => TextOutcome {
                text: text.to_string(),
                outcome: FileOutcome::Skipped { missing },
                detection: Some(detection),
            },
            Ok(fields) => {
                let new_text = self.transform.apply(text, &fields);
                let outcome = if new_text == text {
                    FileOutcome::Unchanged { reason: NoOpReason::AlreadyTransformed }
                } else {
                    FileOutcome::Rewritten
                };
                TextOutcome {
                    text: new_text,
                    outcome,
                    detection: Some(detection),
                }
            }
        }
    }

    pub fn revert_text(&self, text: &str) -> TextOutcome {
        let new_text = self.revert.revert(text);
        if new_text == text {
            return TextOutcome::unchanged(text, NoOpReason::NothingToRevert);
        }
        TextOutcome {
            text: new_text,
            outcome: FileOutcome::Rewritten,
            detection: None,
        }
    }

    /// Field detection only; `None` for files without an enum declaration.
    pub fn detect_text(&self, text: &str) -> Option<Detection> {
        EnumDeclaration::parse(text)?;
        Some(self.detector.detect(text))
    }
}
