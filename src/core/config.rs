//=========================================================================
// Inspector Configuration
//=========================================================================
//
// Tunables shared by every inspector operation. Loaded from TOML or built
// through `InspectorBuilder`.
//
// ```toml
// indent = "  "
// max_depth = 64
// equality = "containment"   # or "symmetric"
// absent_marker = "nil"      # optional
// ```
//
//=========================================================================

//=== External Crates =====================================================

use serde::{Deserialize, Serialize};

//=== Internal Imports ====================================================

use crate::core::error::Result;

//=== EqualityMode ========================================================

/// Which equality `equals` and `contains` apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualityMode {
    /// One-sided: every key of the left operand must match in the right
    /// operand; extra keys on the right are ignored.
    #[default]
    Containment,

    /// Both operands must have the same keys with equal values.
    Symmetric,
}

//=== InspectorConfig =====================================================

/// Default traversal budget (nesting levels below the root).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default indentation unit.
pub const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InspectorConfig {
    /// Text repeated once per indentation level.
    pub indent: String,

    /// Deepest nesting level any traversal may reach.
    pub max_depth: usize,

    /// Equality applied by `equals` and `contains`.
    pub equality: EqualityMode,

    /// Line emitted when an absent root is dumped. `None` emits nothing.
    pub absent_marker: Option<String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
            equality: EqualityMode::default(),
            absent_marker: None,
        }
    }
}

impl InspectorConfig {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::InspectError;

    #[test]
    fn empty_document_yields_defaults() {
        let config = InspectorConfig::from_toml_str("").unwrap();
        assert_eq!(config, InspectorConfig::default());
        assert_eq!(config.indent, "  ");
        assert_eq!(config.max_depth, 64);
        assert_eq!(config.equality, EqualityMode::Containment);
        assert_eq!(config.absent_marker, None);
    }

    #[test]
    fn fields_override_defaults() {
        let config = InspectorConfig::from_toml_str(
            r#"
            indent = "\t"
            max_depth = 3
            equality = "symmetric"
            absent_marker = "nil"
            "#,
        )
        .unwrap();

        assert_eq!(config.indent, "\t");
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.equality, EqualityMode::Symmetric);
        assert_eq!(config.absent_marker.as_deref(), Some("nil"));
    }

    #[test]
    fn unknown_equality_mode_is_rejected() {
        let err = InspectorConfig::from_toml_str(r#"equality = "fuzzy""#).unwrap_err();
        assert!(matches!(err, InspectError::Config(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(InspectorConfig::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let config = InspectorConfig {
            indent: "    ".into(),
            max_depth: 8,
            equality: EqualityMode::Symmetric,
            absent_marker: Some("<absent>".into()),
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(InspectorConfig::from_toml_str(&text).unwrap(), config);
    }
}
