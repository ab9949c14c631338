//! Locates the code field and the description field of an enum.

use crate::models::{Detection, FieldDescriptor};
use crate::rules::{CompiledFieldRule, HeuristicSet};
use regex::Regex;
use tracing::debug;

// `@EnumValue` marks the persisted value; `@JsonValue` may sit on either side.
const TAGGED_FIELD_PATTERN: &str = r"(?:@JsonValue\s+)?@EnumValue\s+(?:@JsonValue\s+)?private\s+(?:final\s+)?(?P<ty>[\w.]+)\s+(?P<name>\w+)\s*;";

#[derive(Debug, Clone)]
pub struct FieldDetector {
    tagged_field: Regex,
    code_rules: Vec<CompiledFieldRule>,
    desc_rules: Vec<CompiledFieldRule>,
}

impl FieldDetector {
    pub fn new(heuristics: &HeuristicSet) -> crate::Result<Self> {
        heuristics.validate()?;
        Ok(Self {
            tagged_field: Regex::new(TAGGED_FIELD_PATTERN)?,
            code_rules: heuristics
                .code_rules
                .iter()
                .map(|r| r.compile())
                .collect::<crate::Result<_>>()?,
            desc_rules: heuristics
                .desc_rules
                .iter()
                .map(|r| r.compile())
                .collect::<crate::Result<_>>()?,
        })
    }

    pub fn with_defaults() -> crate::Result<Self> {
        Self::new(&HeuristicSet::default())
    }

    pub fn detect(&self, text: &str) -> Detection {
        Detection {
            code: self.detect_code_field(text),
            desc: self.detect_desc_field(text),
        }
    }

    /// The tagged field wins outright; otherwise candidates are tried in order.
    pub fn detect_code_field(&self, text: &str) -> Option<FieldDescriptor> {
        if let Some(caps) = self.tagged_field.captures(text) {
            debug!(field = &caps["name"], "code field tagged @EnumValue");
            return Some(FieldDescriptor::new(&caps["name"], &caps["ty"]));
        }
        first_match(&self.code_rules, text)
    }

    pub fn detect_desc_field(&self, text: &str) -> Option<FieldDescriptor> {
        first_match(&self.desc_rules, text)
    }
}

fn first_match(rules: &[CompiledFieldRule], text: &str) -> Option<FieldDescriptor> {
    rules.iter().find_map(|rule| {
        let field = rule.find(text)?;
        debug!(rule = %rule.rule.name, "field rule matched");
        Some(field)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MissingField, SemanticType};

    fn detector() -> FieldDetector {
        FieldDetector::with_defaults().unwrap()
    }

    #[test]
    fn test_tagged_field_beats_candidates() {
        let text = r#"
public enum KeyStatus {
    ACTIVE(1, "x");

    private final String code;

    @EnumValue
    @JsonValue
    private final Integer level;

    private final String description;
}
"#;
        let detection = detector().detect(text);
        let code = detection.code.unwrap();
        assert_eq!(code.name, "level");
        assert_eq!(code.semantic_type, SemanticType::NonTextual);
        assert_eq!(detection.desc.unwrap().name, "description");
    }

    #[test]
    fn test_json_value_before_enum_value() {
        let text = "@JsonValue @EnumValue private final String key;\nprivate final String desc;";
        let code = detector().detect_code_field(text).unwrap();
        assert_eq!(code.name, "key");
        assert!(code.is_textual());
    }

    #[test]
    fn test_code_beats_type() {
        let text = "private final Integer type;\nprivate final String code;\nprivate final String desc;";
        let detection = detector().detect(text);
        assert_eq!(detection.code.unwrap().name, "code");
    }

    #[test]
    fn test_falls_through_to_status() {
        let text = "private final Integer status;\nprivate final String name;";
        let detection = detector().detect(text);
        let code = detection.code.unwrap();
        assert_eq!(code.name, "status");
        assert_eq!(code.declared_type, "Integer");
        assert_eq!(detection.desc.unwrap().name, "name");
    }

    #[test]
    fn test_desc_priority_and_textual_restriction() {
        let text = "private final Integer desc;\nprivate final String name;\nprivate final String description;\nprivate final Integer code;";
        let desc = detector().detect_desc_field(text).unwrap();
        assert_eq!(desc.name, "description");
    }

    #[test]
    fn test_missing_code_field() {
        let text = "private final Integer level;\nprivate final String desc;";
        let detection = detector().detect(text);
        assert_eq!(detection.missing(), Some(MissingField::Code));
    }

    #[test]
    fn test_custom_heuristics() {
        let heuristics = HeuristicSet::from_candidates(&["level"], &["label"]);
        let detector = FieldDetector::new(&heuristics).unwrap();
        let text = "private final Integer level;\nprivate final String label;\nprivate final String desc;";
        let detection = detector.detect(text);
        assert_eq!(detection.code.unwrap().name, "level");
        assert_eq!(detection.desc.unwrap().name, "label");
    }
}
