//! The "revert" direction: strips the marker import, the marker interface
//! and any accessor block with the synthesized shape.
//!
//! Removal is purely structural. A hand-written `@Override public String
//! getCode() { return ...; }` is removed exactly like a synthesized one,
//! since nothing records which blocks `apply` produced.

use crate::declaration::EnumDeclaration;
use crate::models::{CODE_ACCESSOR, DESC_ACCESSOR, Marker};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct RevertEngine {
    marker: Marker,
    import_after_package: Regex,
    import_line: Regex,
    list_tail_entry: Regex,
    list_head_entry: Regex,
    code_block: Regex,
    desc_block: Regex,
    blank_run: Regex,
}

impl RevertEngine {
    pub fn new(marker: Marker) -> crate::Result<Self> {
        marker.validate()?;
        let import = regex::escape(&marker.import);
        let interface = regex::escape(&marker.interface);
        Ok(Self {
            // The exact shape apply inserts: a blank line, then the import
            import_after_package: Regex::new(&format!(
                r"(?P<pkg>package\s+[\w.]+\s*;)\r?\n\r?\nimport\s+{import}\s*;"
            ))?,
            import_line: Regex::new(&format!(r"(?m)^[ \t]*import\s+{import}\s*;[ \t]*(?:\r?\n)?"))?,
            list_tail_entry: Regex::new(&format!(r"\s*,\s*(?:\w+\.)*{interface}\b"))?,
            list_head_entry: Regex::new(&format!(r"^(?:\w+\.)*{interface}\s*,\s*"))?,
            code_block: accessor_block(CODE_ACCESSOR)?,
            desc_block: accessor_block(DESC_ACCESSOR)?,
            blank_run: Regex::new(r"(?P<nl>\r?\n)(?:[ \t]*\r?\n){3,}")?,
            marker,
        })
    }

    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// True when either the marker import or the marker interface appears.
    pub fn has_marker(&self, text: &str) -> bool {
        self.import_line.is_match(text)
            || EnumDeclaration::parse(text).is_some_and(|decl| decl.implements(&self.marker.interface))
    }

    pub fn revert(&self, text: &str) -> String {
        if !self.has_marker(text) {
            return text.to_string();
        }
        let text = self.remove_import(text);
        let text = self.remove_interface(&text);
        let text = self.remove_accessors(&text);
        self.collapse_blank_lines(&text)
    }

    pub fn remove_import(&self, text: &str) -> String {
        let text = self.import_after_package.replacen(text, 1, "${pkg}");
        self.import_line.replace_all(&text, "").into_owned()
    }

    /// Drop the marker from the implements-list; a sole entry takes the
    /// whole `implements` clause with it.
    pub fn remove_interface(&self, text: &str) -> String {
        let Some(decl) = EnumDeclaration::parse(text) else {
            return text.to_string();
        };
        if !decl.implements(&self.marker.interface) {
            return text.to_string();
        }
        let (Some(clause), Some(list_span)) = (decl.clause_span, decl.list_span) else {
            return text.to_string();
        };

        if decl.interfaces.len() == 1 {
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..clause.start]);
            out.push_str(&text[clause.end..]);
            return out;
        }

        let list = &text[list_span.clone()];
        let rewritten = if self.list_tail_entry.is_match(list) {
            self.list_tail_entry.replacen(list, 1, "")
        } else {
            self.list_head_entry.replacen(list, 1, "")
        };
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..list_span.start]);
        out.push_str(&rewritten);
        out.push_str(&text[list_span.end..]);
        out
    }

    pub fn remove_accessors(&self, text: &str) -> String {
        let text = self.code_block.replace_all(text, "");
        self.desc_block.replace_all(&text, "").into_owned()
    }

    /// Collapse runs of three or more blank lines down to two.
    pub fn collapse_blank_lines(&self, text: &str) -> String {
        self.blank_run.replace_all(text, "${nl}${nl}${nl}").into_owned()
    }
}

// `@Override` on its own line, the exact signature, a single return statement
fn accessor_block(method: &str) -> crate::Result<Regex> {
    Ok(Regex::new(&format!(
        r"\r?\n[ \t]*@Override[ \t]*\r?\n[ \t]*public\s+String\s+{}\s*\(\s*\)\s*\{{\s*return\s+[^;]+;\s*\}}[ \t]*(?:\r?\n)?",
        regex::escape(method)
    ))?)
}
