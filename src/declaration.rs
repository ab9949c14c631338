//! Transient view of the enum declaration inside one source file.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"package\s+(?P<name>[\w.]+)\s*;").expect("valid package pattern"));

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"public\s+enum\s+(?P<name>\w+)(?P<clause>\s+implements\s+(?P<list>[\w.<>,\s]+?))?\s*\{",
    )
    .expect("valid enum header pattern")
});

/// Package name, enum name and implements-list of the first public enum,
/// with the byte spans needed to rewrite the header in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub package: String,
    pub name: String,
    pub interfaces: Vec<String>,
    /// Span of the `package ...;` statement
    pub package_span: Range<usize>,
    /// Span of the enum's identifier
    pub name_span: Range<usize>,
    /// Span of `<ws>implements <list>`, when present
    pub clause_span: Option<Range<usize>>,
    /// Span of the comma-separated interface list, when present
    pub list_span: Option<Range<usize>>,
}

impl EnumDeclaration {
    /// Returns `None` when the text has no package statement or no public enum.
    pub fn parse(text: &str) -> Option<Self> {
        let package = PACKAGE_RE.captures(text)?;
        let header = HEADER_RE.captures(text)?;

        let package_span = package.get(0)?.range();
        let name = header.name("name")?;
        let list = header.name("list");
        let interfaces = list
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            package: package["name"].to_string(),
            name: name.as_str().to_string(),
            interfaces,
            package_span,
            name_span: name.range(),
            clause_span: header.name("clause").map(|m| m.range()),
            list_span: list.map(|m| m.range()),
        })
    }

    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| {
            i == interface || i.rsplit('.').next() == Some(interface)
        })
    }
}
