//! Analysis record and the framework labels offered to users

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality message of the fallback record
pub const FALLBACK_QUALITY: &str = "Não foi possível completar a análise";

/// Single recommendation of the fallback record
pub const FALLBACK_RECOMMENDATION: &str = "Por favor, tente novamente em alguns momentos";

/// Structured critique of a piece of source code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub quality: String,
    pub recommendations: Vec<String>,
    pub improved_code: String,
    pub performance: Vec<String>,
    pub security: Vec<String>,
    pub best_practices: Vec<String>,
    /// Set when the model judged the code to belong to another framework
    #[serde(default)]
    pub framework_mismatch: bool,
}

impl AnalysisResult {
    /// The record returned whenever an analysis could not be completed
    pub fn fallback() -> Self {
        Self {
            quality: FALLBACK_QUALITY.to_string(),
            recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
            ..Default::default()
        }
    }

    /// Whether this is exactly the fallback record
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    pub fn has_improved_code(&self) -> bool {
        !self.improved_code.is_empty()
    }
}

/// Target frameworks offered by the front end
///
/// The prompt builder takes any label; this enum only covers the labels the
/// CLI lists and validates against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Framework {
    #[default]
    Angular,
    React,
    TypeScript,
    Vue3,
    Java,
    Python,
}

impl Framework {
    /// Label sent to the model
    pub fn value(&self) -> &'static str {
        match self {
            Framework::Angular => "angular",
            Framework::React => "react",
            Framework::TypeScript => "typescript",
            Framework::Vue3 => "vue3",
            Framework::Java => "java",
            Framework::Python => "python",
        }
    }

    /// Get the display name for this framework
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Angular => "Angular",
            Framework::React => "React",
            Framework::TypeScript => "Typescript",
            Framework::Vue3 => "Vue 3",
            Framework::Java => "Java",
            Framework::Python => "Python",
        }
    }

    /// Get all supported frameworks, in display order
    pub fn all() -> Vec<Framework> {
        vec![
            Framework::Angular,
            Framework::React,
            Framework::TypeScript,
            Framework::Vue3,
            Framework::Java,
            Framework::Python,
        ]
    }

    /// Parse from a label or display name, ignoring case
    pub fn from_label(s: &str) -> Option<Framework> {
        match s.trim().to_lowercase().as_str() {
            "angular" => Some(Framework::Angular),
            "react" => Some(Framework::React),
            "typescript" | "ts" => Some(Framework::TypeScript),
            "vue3" | "vue 3" | "vue" => Some(Framework::Vue3),
            "java" => Some(Framework::Java),
            "python" | "py" => Some(Framework::Python),
            _ => None,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_record() {
        let fallback = AnalysisResult::fallback();
        assert_eq!(fallback.quality, FALLBACK_QUALITY);
        assert_eq!(fallback.recommendations, vec![FALLBACK_RECOMMENDATION]);
        assert!(fallback.improved_code.is_empty());
        assert!(fallback.performance.is_empty());
        assert!(fallback.security.is_empty());
        assert!(fallback.best_practices.is_empty());
        assert!(!fallback.framework_mismatch);
        assert!(fallback.is_fallback());
        assert!(!AnalysisResult::default().is_fallback());
    }

    #[test]
    fn test_framework_labels() {
        for framework in Framework::all() {
            assert_eq!(Framework::from_label(framework.value()), Some(framework));
            assert_eq!(Framework::from_label(framework.display_name()), Some(framework));
        }
        assert_eq!(Framework::from_label("  REACT "), Some(Framework::React));
        assert_eq!(Framework::from_label("cobol"), None);
        assert_eq!(Framework::default().to_string(), "angular");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let record = AnalysisResult {
            improved_code: "x".to_string(),
            best_practices: vec!["b".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["improvedCode"], "x");
        assert_eq!(value["bestPractices"][0], "b");
        assert_eq!(value["frameworkMismatch"], false);
    }
}
