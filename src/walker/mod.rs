//! Batch driver: finds source files, runs the pipeline over each and writes
//! back whatever changed.
//!
//! Detection gaps are file-local and only reported. Read/write failures stop
//! the batch and name the file and direction.

pub mod discovery;

pub use discovery::SourceDiscovery;

use crate::config::Config;
use crate::models::{BatchReport, Direction, FileOutcome, FileReport};
use crate::pipeline::Retrofitter;
use crate::{Result, RetrofitError};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct FileWalker {
    root: PathBuf,
    discovery: SourceDiscovery,
    retrofitter: Retrofitter,
    dry_run: bool,
    parallel: bool,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>, retrofitter: Retrofitter) -> Self {
        Self {
            root: root.into(),
            discovery: SourceDiscovery::default(),
            retrofitter,
            dry_run: false,
            parallel: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let retrofitter = Retrofitter::from_config(config)?;
        Ok(Self::new(&config.walker.root, retrofitter)
            .with_discovery(
                SourceDiscovery::new(config.walker.extension.as_str())
                    .follow_links(config.walker.follow_links),
            )
            .dry_run(config.runtime.dry_run)
            .parallel(config.runtime.parallel))
    }

    pub fn with_discovery(mut self, discovery: SourceDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run one direction over every source file under the root.
    pub fn run(&self, direction: Direction) -> Result<BatchReport> {
        let files = self.discovery.find_source_files(&self.root)?;
        info!(
            root = %self.root.display(),
            %direction,
            files = files.len(),
            dry_run = self.dry_run,
            "starting batch"
        );

        let reports: Vec<FileReport> = if self.parallel {
            files
                .par_iter()
                .map(|path| self.process_file(path, direction))
                .collect::<Result<_>>()?
        } else {
            files
                .iter()
                .map(|path| self.process_file(path, direction))
                .collect::<Result<_>>()?
        };

        let mut report = BatchReport::new(direction, self.root.clone(), self.dry_run);
        report.files = reports;
        Ok(report)
    }

    /// Report detected fields for every file without writing anything.
    pub fn detect(&self) -> Result<BatchReport> {
        let files = self.discovery.find_source_files(&self.root)?;
        let mut report = BatchReport::new(Direction::Apply, self.root.clone(), true);

        for path in files {
            let text = read_source(&path, Direction::Apply)?;
            let outcome = self.retrofitter.apply_text(&text).outcome;
            let mut file_report = FileReport::new(path, outcome);
            if let Some(detection) = self.retrofitter.detect_text(&text) {
                file_report = file_report.with_detection(detection);
            }
            report.files.push(file_report);
        }

        Ok(report)
    }

    /// Read, transform and (unless dry-running) write back a single file.
    pub fn process_file(&self, path: &Path, direction: Direction) -> Result<FileReport> {
        let text = read_source(path, direction)?;
        let result = self.retrofitter.run(direction, &text);

        match &result.outcome {
            FileOutcome::Rewritten => {
                if !self.dry_run {
                    write_atomic(path, &result.text)
                        .map_err(|e| RetrofitError::file_io(path, direction, e))?;
                }
                info!(path = %path.display(), %direction, dry_run = self.dry_run, "rewrote file");
            }
            FileOutcome::Skipped { missing } => {
                warn!(path = %path.display(), %missing, "skipping file, fields not detected");
            }
            FileOutcome::Unchanged { reason } => {
                debug!(path = %path.display(), %reason, "unchanged");
            }
        }

        let mut report = FileReport::new(path.to_path_buf(), result.outcome);
        if let Some(detection) = result.detection {
            report = report.with_detection(detection);
        }
        Ok(report)
    }
}

fn read_source(path: &Path, direction: Direction) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RetrofitError::file_io(path, direction, e))
}

/// Replace `path` with `contents` via a sibling temp file, so a failed write
/// never leaves a half-written source behind. Permissions are carried over.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
