//! Ordered field-name heuristics used by the detector.
//!
//! Each candidate name is its own [`FieldRule`] so the priority order is an
//! explicit, auditable list rather than a conditional chain. Earlier rules
//! always win over later ones.

use crate::models::FieldDescriptor;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CODE_CANDIDATES: [&str; 5] = ["code", "type", "value", "id", "status"];
pub const DEFAULT_DESC_CANDIDATES: [&str; 3] = ["desc", "description", "name"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: String,
    pub field: String,
    /// Only fields declared as `String` satisfy the rule
    pub textual_only: bool,
}

impl FieldRule {
    pub fn code_candidate(field: &str) -> Self {
        Self {
            name: format!("code-candidate:{}", field),
            field: field.to_string(),
            textual_only: false,
        }
    }

    pub fn desc_candidate(field: &str) -> Self {
        Self {
            name: format!("desc-candidate:{}", field),
            field: field.to_string(),
            textual_only: true,
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if !is_java_identifier(&self.field) {
            return Err(crate::RetrofitError::Configuration(format!(
                "Rule '{}' names an invalid field identifier '{}'",
                self.name, self.field
            )));
        }
        Ok(())
    }

    pub fn compile(&self) -> crate::Result<CompiledFieldRule> {
        self.validate()?;
        let pattern = format!(
            r"private\s+(?:final\s+)?(?P<ty>[\w.]+)\s+{}\s*;",
            regex::escape(&self.field)
        );
        Ok(CompiledFieldRule {
            rule: self.clone(),
            regex: Regex::new(&pattern)?,
        })
    }
}

/// A [`FieldRule`] with its declaration pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledFieldRule {
    pub rule: FieldRule,
    regex: Regex,
}

impl CompiledFieldRule {
    /// First declaration in `text` satisfying the rule
    pub fn find(&self, text: &str) -> Option<FieldDescriptor> {
        self.regex
            .captures_iter(text)
            .map(|caps| FieldDescriptor::new(self.rule.field.as_str(), &caps["ty"]))
            .find(|field| !self.rule.textual_only || field.is_textual())
    }
}

/// The two ordered candidate lists
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HeuristicSet {
    pub code_rules: Vec<FieldRule>,
    pub desc_rules: Vec<FieldRule>,
}

impl Default for HeuristicSet {
    fn default() -> Self {
        Self::from_candidates(&DEFAULT_CODE_CANDIDATES, &DEFAULT_DESC_CANDIDATES)
    }
}

impl HeuristicSet {
    pub fn from_candidates<S: AsRef<str>>(code: &[S], desc: &[S]) -> Self {
        Self {
            code_rules: code.iter().map(|f| FieldRule::code_candidate(f.as_ref())).collect(),
            desc_rules: desc.iter().map(|f| FieldRule::desc_candidate(f.as_ref())).collect(),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.code_rules.is_empty() {
            return Err(crate::RetrofitError::Configuration("Code candidate list cannot be empty".to_string()));
        }
        if self.desc_rules.is_empty() {
            return Err(crate::RetrofitError::Configuration("Description candidate list cannot be empty".to_string()));
        }
        for rule in self.code_rules.iter().chain(&self.desc_rules) {
            rule.validate()?;
        }
        Ok(())
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
