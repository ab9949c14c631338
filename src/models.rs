use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Interface every retrofitted enum implements
pub const MARKER_INTERFACE: &str = "BaseEnum";
/// Import path of [`MARKER_INTERFACE`]
pub const MARKER_IMPORT: &str = "com.luohuo.basic.interfaces.BaseEnum";

/// Name of the synthesized code accessor (`public String getCode()`)
pub const CODE_ACCESSOR: &str = "getCode";
/// Name of the synthesized description accessor (`public String getDesc()`)
pub const DESC_ACCESSOR: &str = "getDesc";

/// The literal interface name and import path that mark a file as transformed.
///
/// Apply and revert must share one `Marker` for round-tripping to work.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub interface: String,
    pub import: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            interface: MARKER_INTERFACE.to_string(),
            import: MARKER_IMPORT.to_string(),
        }
    }
}

impl Marker {
    pub fn new(interface: impl Into<String>, import: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            import: import.into(),
        }
    }

    /// The full import statement, e.g. `import com.example.BaseEnum;`
    pub fn import_line(&self) -> String {
        format!("import {};", self.import)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.interface.trim().is_empty() {
            return Err(crate::RetrofitError::Configuration("Marker interface cannot be empty".to_string()));
        }
        if self.import.trim().is_empty() {
            return Err(crate::RetrofitError::Configuration("Marker import cannot be empty".to_string()));
        }
        if self.import.rsplit('.').next() != Some(self.interface.as_str()) {
            return Err(crate::RetrofitError::Configuration(format!(
                "Marker import '{}' does not name interface '{}'",
                self.import, self.interface
            )));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Textual,    // String, no conversion needed
    NonTextual, // Needs String.valueOf(..)
}

impl SemanticType {
    pub fn of_declared(declared_type: &str) -> Self {
        match declared_type {
            "String" | "java.lang.String" => SemanticType::Textual,
            _ => SemanticType::NonTextual,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    pub semantic_type: SemanticType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        let declared_type = declared_type.into();
        Self {
            name: name.into(),
            semantic_type: SemanticType::of_declared(&declared_type),
            declared_type,
        }
    }

    pub fn is_textual(&self) -> bool {
        self.semantic_type == SemanticType::Textual
    }
}

/// Both fields an accessor pair is synthesized from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DetectedFields {
    pub code: FieldDescriptor,
    pub desc: FieldDescriptor,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MissingField {
    Code,
    Description,
    Both,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Code => write!(f, "no code field found"),
            MissingField::Description => write!(f, "no description field found"),
            MissingField::Both => write!(f, "neither code nor description field found"),
        }
    }
}

/// Result of field detection over one file; either field may be absent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub code: Option<FieldDescriptor>,
    pub desc: Option<FieldDescriptor>,
}

impl Detection {
    pub fn missing(&self) -> Option<MissingField> {
        match (&self.code, &self.desc) {
            (Some(_), Some(_)) => None,
            (None, Some(_)) => Some(MissingField::Code),
            (Some(_), None) => Some(MissingField::Description),
            (None, None) => Some(MissingField::Both),
        }
    }

    pub fn into_fields(self) -> std::result::Result<DetectedFields, MissingField> {
        match (self.code, self.desc) {
            (Some(code), Some(desc)) => Ok(DetectedFields { code, desc }),
            (None, Some(_)) => Err(MissingField::Code),
            (Some(_), None) => Err(MissingField::Description),
            (None, None) => Err(MissingField::Both),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Apply,
    Revert,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Apply => write!(f, "apply"),
            Direction::Revert => write!(f, "revert"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    AlreadyTransformed,
    NothingToRevert,
    NotAnEnum,
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOpReason::AlreadyTransformed => write!(f, "already transformed"),
            NoOpReason::NothingToRevert => write!(f, "nothing to revert"),
            NoOpReason::NotAnEnum => write!(f, "no enum declaration"),
        }
    }
}

/// What happened to one file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Rewritten,
    Unchanged { reason: NoOpReason },
    Skipped { missing: MissingField },
}

impl FileOutcome {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, FileOutcome::Rewritten)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection: Option<Detection>,
}

impl FileReport {
    pub fn new(path: PathBuf, outcome: FileOutcome) -> Self {
        Self {
            path,
            outcome,
            detection: None,
        }
    }

    pub fn with_detection(mut self, detection: Detection) -> Self {
        self.detection = Some(detection);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BatchReport {
    pub direction: Direction,
    pub root: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub scanned: usize,
    pub rewritten: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn new(direction: Direction, root: PathBuf, dry_run: bool) -> Self {
        Self {
            direction,
            root,
            dry_run,
            files: Vec::new(),
        }
    }

    pub fn stats(&self) -> BatchStats {
        let mut stats = BatchStats {
            scanned: self.files.len(),
            ..BatchStats::default()
        };
        for file in &self.files {
            match file.outcome {
                FileOutcome::Rewritten => stats.rewritten += 1,
                FileOutcome::Unchanged { .. } => stats.unchanged += 1,
                FileOutcome::Skipped { .. } => stats.skipped += 1,
            }
        }
        stats
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, MissingField)> {
        self.files.iter().filter_map(|f| match f.outcome {
            FileOutcome::Skipped { missing } => Some((&f.path, missing)),
            _ => None,
        })
    }
}
