//! Retrofit Java enums with a shared labeling interface, and strip it again.
//!
//! [`detector::FieldDetector`] finds the code and description fields,
//! [`transform::TransformEngine`] inserts the marker import, interface and
//! accessors, and [`revert::RevertEngine`] removes them by structural
//! pattern. [`walker::FileWalker`] drives either direction over a tree.

pub mod config;
pub mod declaration;
pub mod detector;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod revert;
pub mod rules;
pub mod transform;
pub mod walker;

pub use config::Config;
pub use declaration::EnumDeclaration;
pub use detector::FieldDetector;
pub use error::{Result, RetrofitError};
pub use models::{
    BatchReport, BatchStats, DetectedFields, Detection, Direction, FieldDescriptor, FileOutcome,
    FileReport, Marker, MissingField, NoOpReason, SemanticType,
};
pub use pipeline::{Retrofitter, TextOutcome};
pub use revert::RevertEngine;
pub use rules::{FieldRule, HeuristicSet};
pub use transform::TransformEngine;
pub use walker::FileWalker;
