//! Snapshot tests for CLI components

#[cfg(test)]
mod snapshot_tests {
    use crate::format_report;
    use insta::assert_snapshot;
    use revisor_core::{AnalysisResult, normalize};

    #[test]
    fn test_fallback_report_snapshot() {
        colored::control::set_override(false);
        let report = format_report(&AnalysisResult::fallback());

        assert_snapshot!(report.trim_end(), @r"
        Avaliação de Qualidade
          Não foi possível completar a análise

        Boas Práticas
          (nenhum item)

        Recomendações
          • Por favor, tente novamente em alguns momentos

        Código Melhorado
          (sem alterações)

        Informações de Desempenho
          (nenhum item)

        Considerações de segurança
          (nenhum item)
        ");
    }

    #[test]
    fn test_full_report_contents() {
        colored::control::set_override(false);
        let analysis = normalize(
            r#"{
                "quality": "Código organizado",
                "recommendations": ["Extraia o serviço"],
                "improvedCode": "export class A {\n  constructor() {}\n}",
                "performance": ["Use OnPush"],
                "security": ["Sanitize HTML"],
                "bestPractices": ["Tipagem forte"]
            }"#,
        );
        let report = format_report(&analysis);

        assert!(report.contains("  Código organizado\n"));
        assert!(report.contains("  • Extraia o serviço\n"));
        assert!(report.contains("  export class A {\n    constructor() {}\n  }\n"));
        assert!(report.contains("  • Use OnPush\n"));
        assert!(report.contains("  • Sanitize HTML\n"));
        assert!(!report.contains("Framework incompatível"));

        let best = report.find("Boas Práticas").unwrap();
        let recommendations = report.find("Recomendações").unwrap();
        let security = report.find("Considerações de segurança").unwrap();
        assert!(best < recommendations && recommendations < security);
    }

    #[test]
    fn test_mismatch_report_has_warning() {
        colored::control::set_override(false);
        let analysis = AnalysisResult {
            quality: "Este código não é do react".to_string(),
            recommendations: vec!["Este código parece ser de outro framework ou tecnologia".to_string()],
            framework_mismatch: true,
            ..Default::default()
        };
        assert!(format_report(&analysis).starts_with("⚠ Framework incompatível\n\n"));
    }
}
