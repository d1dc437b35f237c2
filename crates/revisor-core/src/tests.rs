//! Snapshot tests for the normalizer

#[cfg(test)]
mod snapshot_tests {
    use crate::{AnalysisResult, normalize};
    use insta::assert_json_snapshot;
    use serde_json::json;

    #[test]
    fn test_fallback_snapshot() {
        assert_json_snapshot!(normalize("not json"), @r#"
        {
          "quality": "Não foi possível completar a análise",
          "recommendations": [
            "Por favor, tente novamente em alguns momentos"
          ],
          "improvedCode": "",
          "performance": [],
          "security": [],
          "bestPractices": [],
          "frameworkMismatch": false
        }
        "#);
    }

    #[test]
    fn test_mixed_fields_snapshot() {
        let raw = r#"{"quality":"ok","recommendations":"do X","improvedCode":"","performance":null,"security":[],"bestPractices":["b1"," b2 "]}"#;

        assert_json_snapshot!(normalize(raw), @r#"
        {
          "quality": "ok",
          "recommendations": [
            "do X"
          ],
          "improvedCode": "",
          "performance": [],
          "security": [],
          "bestPractices": [
            "b1",
            "b2"
          ],
          "frameworkMismatch": false
        }
        "#);
    }

    #[test]
    fn test_mismatch_envelope_snapshot() {
        let inner = json!({
            "quality": "Este código não é do vue3",
            "recommendations": ["Este código parece ser de outro framework ou tecnologia"],
            "improvedCode": "",
            "performance": [],
            "security": [],
            "bestPractices": [],
            "frameworkMismatch": true
        });
        let raw = json!({
            "candidates": [{ "content": { "parts": [{ "text": inner.to_string() }] } }]
        })
        .to_string();

        let result = normalize(&raw);
        assert!(!result.is_fallback());
        assert_json_snapshot!(result, @r#"
        {
          "quality": "Este código não é do vue3",
          "recommendations": [
            "Este código parece ser de outro framework ou tecnologia"
          ],
          "improvedCode": "",
          "performance": [],
          "security": [],
          "bestPractices": [],
          "frameworkMismatch": true
        }
        "#);
    }

    #[test]
    fn test_envelope_without_text_snapshot() {
        let raw = r#"{"candidates":[{"content":{"parts":[{}]}}]}"#;
        assert_eq!(normalize(raw), AnalysisResult::fallback());
    }
}
