// Transformation collaborator used by profiles that turn command text into payload bytes
// The host may plug in its own service; REGEX and MAP are built in

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Unknown transformation type: {0}")]
    UnknownKind(String),

    #[error("Invalid transformation expression: {0}")]
    InvalidExpression(String),

    #[error("Transformation does not match input {0:?}")]
    NoMatch(String),
}

/// External text transformation, identified by a kind (e.g. "REGEX") and an expression
pub trait TransformationService: Send + Sync + fmt::Debug {
    fn transform(&self, kind: &str, function: &str, input: &str) -> Result<String, TransformError>;
}

lazy_static! {
    /// s/pattern/replacement/flags with backslash-escaped slashes
    static ref SED_EXPRESSION: Regex =
        Regex::new(r"^s/((?:[^/\\]|\\.)*)/((?:[^/\\]|\\.)*)/([gi]*)$").unwrap();

    /// sed-style group reference (\1) in a replacement
    static ref SED_GROUP: Regex = Regex::new(r"\\(\d)").unwrap();
}

/// REGEX and MAP transformations
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTransformations;

impl BuiltinTransformations {
    fn regex(function: &str, input: &str) -> Result<String, TransformError> {
        if let Some(caps) = SED_EXPRESSION.captures(function) {
            let pattern = caps[1].replace("\\/", "/");
            let replacement = SED_GROUP
                .replace_all(&caps[2].replace("\\/", "/"), "$${$1}")
                .into_owned();
            let flags = &caps[3];

            let re = RegexBuilder::new(&pattern)
                .case_insensitive(flags.contains('i'))
                .build()
                .map_err(|e| TransformError::InvalidExpression(e.to_string()))?;

            let output = if flags.contains('g') {
                re.replace_all(input, replacement.as_str())
            } else {
                re.replace(input, replacement.as_str())
            };
            return Ok(output.into_owned());
        }

        // Bare pattern: return the first capture group, or the whole match
        let re =
            Regex::new(function).map_err(|e| TransformError::InvalidExpression(e.to_string()))?;
        let caps = re
            .captures(input)
            .ok_or_else(|| TransformError::NoMatch(input.to_string()))?;

        Ok(caps
            .get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default())
    }

    fn map(function: &str, input: &str) -> Result<String, TransformError> {
        let mut table = HashMap::new();
        for entry in function.split([';', '\n']).map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| TransformError::InvalidExpression(entry.to_string()))?;
            table.insert(key.trim(), value.trim());
        }

        table
            .get(input.trim())
            .map(|v| v.to_string())
            .ok_or_else(|| TransformError::NoMatch(input.to_string()))
    }
}

impl TransformationService for BuiltinTransformations {
    fn transform(&self, kind: &str, function: &str, input: &str) -> Result<String, TransformError> {
        match kind.to_ascii_uppercase().as_str() {
            "REGEX" => Self::regex(function, input),
            "MAP" => Self::map(function, input),
            _ => Err(TransformError::UnknownKind(kind.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sed_replace() {
        let t = BuiltinTransformations;
        assert_eq!(t.transform("REGEX", "s/ON/A5000009/", "ON").unwrap(), "A5000009");
        assert_eq!(t.transform("regex", "s/o/0/g", "foo").unwrap(), "f00");
        assert_eq!(t.transform("REGEX", "s/o/0/", "foo").unwrap(), "f0o");
        assert_eq!(t.transform("REGEX", "s/on/1/i", "ON").unwrap(), "1");
    }

    #[test]
    fn test_sed_groups_and_escapes() {
        let t = BuiltinTransformations;
        assert_eq!(
            t.transform("REGEX", r"s/(\d+)%/0200\1/", "64%").unwrap(),
            "020064"
        );
        assert_eq!(t.transform("REGEX", r"s/a\/b/c/", "a/b").unwrap(), "c");
    }

    #[test]
    fn test_bare_pattern() {
        let t = BuiltinTransformations;
        assert_eq!(t.transform("REGEX", r"value=(\w+)", "value=A5").unwrap(), "A5");
        assert_eq!(t.transform("REGEX", r"\d+", "abc123").unwrap(), "123");
        assert_eq!(
            t.transform("REGEX", r"\d+", "abc"),
            Err(TransformError::NoMatch("abc".to_string()))
        );
        assert!(matches!(
            t.transform("REGEX", "(", "abc"),
            Err(TransformError::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_map() {
        let t = BuiltinTransformations;
        let table = "ON=0100000009; OFF=0100000008\nREFRESH=";
        assert_eq!(t.transform("MAP", table, "ON").unwrap(), "0100000009");
        assert_eq!(t.transform("MAP", table, "OFF").unwrap(), "0100000008");
        assert_eq!(t.transform("MAP", table, "REFRESH").unwrap(), "");
        assert!(matches!(t.transform("MAP", table, "50"), Err(TransformError::NoMatch(_))));
        assert!(matches!(
            t.transform("MAP", "broken", "ON"),
            Err(TransformError::InvalidExpression(_))
        ));
    }

    #[test]
    fn test_unknown_kind() {
        let t = BuiltinTransformations;
        assert_eq!(
            t.transform("JS", "x.js", "ON"),
            Err(TransformError::UnknownKind("JS".to_string()))
        );
    }
}
