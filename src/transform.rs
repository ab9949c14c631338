//! The "apply" direction: import, interface and accessor synthesis.

use crate::declaration::EnumDeclaration;
use crate::models::{CODE_ACCESSOR, DESC_ACCESSOR, DetectedFields, FieldDescriptor, Marker};
use regex::Regex;

const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct TransformEngine {
    marker: Marker,
    import_present: Regex,
    code_accessor: Regex,
    desc_accessor: Regex,
}

impl TransformEngine {
    pub fn new(marker: Marker) -> crate::Result<Self> {
        marker.validate()?;
        Ok(Self {
            import_present: Regex::new(&format!(
                r"(?m)^[ \t]*import\s+{}\s*;",
                regex::escape(&marker.import)
            ))?,
            code_accessor: accessor_signature(CODE_ACCESSOR)?,
            desc_accessor: accessor_signature(DESC_ACCESSOR)?,
            marker,
        })
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// True when the enum header already lists the marker interface.
    pub fn is_transformed(&self, text: &str) -> bool {
        EnumDeclaration::parse(text).is_some_and(|decl| decl.implements(&self.marker.interface))
    }

    /// Retrofit one file's text. Returns the input unchanged when the marker
    /// interface is already implemented or no enum declaration is found.
    pub fn apply(&self, text: &str, fields: &DetectedFields) -> String {
        if self.is_transformed(text) || EnumDeclaration::parse(text).is_none() {
            return text.to_string();
        }
        let text = self.inject_import(text);
        let text = self.inject_interface(&text);
        self.synthesize_accessors(&text, fields)
    }

    /// Insert the marker import right after the package statement.
    pub fn inject_import(&self, text: &str) -> String {
        if self.import_present.is_match(text) {
            return text.to_string();
        }
        let Some(decl) = EnumDeclaration::parse(text) else {
            return text.to_string();
        };
        let nl = line_ending(text);
        let at = decl.package_span.end;
        let mut out = String::with_capacity(text.len() + self.marker.import.len() + 16);
        out.push_str(&text[..at]);
        out.push_str(nl);
        out.push_str(nl);
        out.push_str(&self.marker.import_line());
        out.push_str(&text[at..]);
        out
    }

    /// Append the marker to the enum's implements-list, creating the clause if needed.
    pub fn inject_interface(&self, text: &str) -> String {
        let Some(decl) = EnumDeclaration::parse(text) else {
            return text.to_string();
        };
        if decl.implements(&self.marker.interface) {
            return text.to_string();
        }
        let (at, insertion) = match decl.list_span {
            Some(list) => (list.end, format!(", {}", self.marker.interface)),
            None => (decl.name_span.end, format!(" implements {}", self.marker.interface)),
        };
        let mut out = text.to_string();
        out.insert_str(at, &insertion);
        out
    }

    /// Insert whichever accessors are missing before the file's final closing brace.
    /// Existing accessors are left alone, whatever they return.
    pub fn synthesize_accessors(&self, text: &str, fields: &DetectedFields) -> String {
        let nl = line_ending(text);
        let mut methods = String::new();
        if !self.code_accessor.is_match(text) {
            methods.push_str(&accessor_block(CODE_ACCESSOR, &code_expression(&fields.code), nl));
        }
        if !self.desc_accessor.is_match(text) {
            methods.push_str(&accessor_block(DESC_ACCESSOR, &fields.desc.name, nl));
        }
        if methods.is_empty() {
            return text.to_string();
        }
        let Some(last_brace) = text.rfind('}') else {
            return text.to_string();
        };
        let mut out = text.to_string();
        out.insert_str(last_brace, &methods);
        out
    }
}

fn accessor_signature(method: &str) -> crate::Result<Regex> {
    Ok(Regex::new(&format!(
        r"public\s+String\s+{}\s*\(\s*\)",
        regex::escape(method)
    ))?)
}

/// Non-textual code fields are converted with `String.valueOf`.
pub fn code_expression(field: &FieldDescriptor) -> String {
    if field.is_textual() {
        field.name.clone()
    } else {
        format!("String.valueOf({})", field.name)
    }
}

fn accessor_block(method: &str, expression: &str, nl: &str) -> String {
    format!(
        "{nl}{INDENT}@Override{nl}{INDENT}public String {method}() {{{nl}{INDENT}{INDENT}return {expression};{nl}{INDENT}}}{nl}"
    )
}

pub(crate) fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}
