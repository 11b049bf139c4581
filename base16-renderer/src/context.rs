//! Scheme context — the flat `key -> value` mapping templates render against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use base16_core::SchemeDocument;

use crate::error::ValidationError;

/// Number of base colors every scheme defines.
pub const BASE_COLORS: usize = 16;

/// Name under which the scheme mapping is exposed to tera.
pub(crate) const CONTEXT_VAR: &str = "base16";

/// Validated rendering context built from one [`SchemeDocument`].
///
/// Holds exactly `scheme-name`, `scheme-author` and `base00-hex` ..
/// `base0F-hex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeContext {
    values: BTreeMap<String, String>,
}

/// Document key of base color `index`: `base00` .. `base0F`.
pub fn base_key(index: usize) -> String {
    format!("base{index:02X}")
}

/// Required document fields, in the order they are checked.
pub fn required_fields() -> Vec<String> {
    let mut fields = Vec::with_capacity(BASE_COLORS + 2);
    fields.push("scheme".to_string());
    fields.push("author".to_string());
    fields.extend((0..BASE_COLORS).map(base_key));
    fields
}

impl SchemeContext {
    /// Validate `doc` and build its context.
    ///
    /// Fails with the first missing field in [`required_fields`] order. Color
    /// values lose every leading `#`; nothing else is normalised.
    pub fn build(doc: &SchemeDocument) -> Result<Self, ValidationError> {
        let require = |key: &str| {
            doc.get(key)
                .ok_or_else(|| ValidationError::MissingField(key.to_string()))
        };

        let mut values = BTreeMap::new();
        values.insert("scheme-name".to_string(), require("scheme")?.clone());
        values.insert("scheme-author".to_string(), require("author")?.clone());
        for index in 0..BASE_COLORS {
            let key = base_key(index);
            let color = require(&key)?;
            values.insert(format!("{key}-hex"), strip_hash(color).to_string());
        }
        Ok(SchemeContext { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert(CONTEXT_VAR, &self.values);
        ctx
    }
}

/// Strip the whole run of leading `#` characters.
pub fn strip_hash(color: &str) -> &str {
    color.trim_start_matches('#')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn full_document() -> SchemeDocument {
        let mut doc = SchemeDocument::new();
        doc.insert("scheme".into(), "MyTheme".into());
        doc.insert("author".into(), "Jane".into());
        for i in 0..BASE_COLORS {
            doc.insert(base_key(i), format!("#{:02x}{:02x}{:02x}", i, i, i));
        }
        doc
    }

    #[test]
    fn base_keys_use_uppercase_hex() {
        assert_eq!(base_key(0), "base00");
        assert_eq!(base_key(10), "base0A");
        assert_eq!(base_key(15), "base0F");
    }

    #[test]
    fn full_document_builds_eighteen_entries() {
        let ctx = SchemeContext::build(&full_document()).expect("build");
        assert_eq!(ctx.len(), 18);
        assert_eq!(ctx.get("scheme-name"), Some("MyTheme"));
        assert_eq!(ctx.get("scheme-author"), Some("Jane"));
        assert_eq!(ctx.get("base00-hex"), Some("000000"));
        assert_eq!(ctx.get("base0F-hex"), Some("0f0f0f"));
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut doc = full_document();
        doc.insert("slug".into(), "my-theme".into());
        let ctx = SchemeContext::build(&doc).expect("build");
        assert_eq!(ctx.len(), 18);
        assert!(ctx.get("slug").is_none());
    }

    #[test]
    fn every_missing_field_fails_by_name() {
        for field in required_fields() {
            let mut doc = full_document();
            doc.remove(&field);
            let err = SchemeContext::build(&doc).unwrap_err();
            assert_eq!(err, ValidationError::MissingField(field.clone()));
        }
    }

    #[test]
    fn first_missing_field_wins() {
        let mut doc = full_document();
        doc.remove("author");
        doc.remove("base03");
        doc.remove("scheme");
        let err = SchemeContext::build(&doc).unwrap_err();
        assert_eq!(err.to_string(), "missing \"scheme\" in scheme");
    }

    #[rstest]
    #[case("#AABBCC", "AABBCC")]
    #[case("##AABBCC", "AABBCC")]
    #[case("AABBCC", "AABBCC")]
    #[case("AA#BBCC", "AA#BBCC")]
    #[case("#zz", "zz")]
    #[case("", "")]
    fn strips_only_the_leading_run(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_hash(input), expected);
        assert_eq!(strip_hash(strip_hash(input)), expected);
    }

    #[test]
    fn to_tera_context_nests_under_context_var() {
        let ctx = SchemeContext::build(&full_document()).expect("build");
        let tera_ctx = ctx.to_tera_context();
        let json = tera_ctx.into_json();
        assert_eq!(json[CONTEXT_VAR]["base0A-hex"], "0a0a0a");
    }
}
