//! UI utilities for the CLI

use colored::*;
use crossterm::terminal::size;
use std::fmt::Write;

use revisor_core::{AnalysisResult, Framework};

const TITLE: &str = "Revisor - AI Code Analyzer";
const SUBTITLE: &str = "Analise seu código antes de abrir um pull request";

/// Display startup banner
pub fn display_banner(backend: &str) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let inner_width = terminal_width.saturating_sub(6).clamp(SUBTITLE.chars().count() + 4, 61);

    let top_border = format!("┌{}┐", "─".repeat(inner_width));
    let bottom_border = format!("└{}┘", "─".repeat(inner_width));

    println!();
    println!("{}", top_border.blue());
    for (text, styled) in [
        (TITLE, TITLE.blue().bold()),
        (SUBTITLE, SUBTITLE.normal()),
        ("", "".normal()),
    ] {
        let padding = inner_width.saturating_sub(text.chars().count() + 2);
        println!("{}  {}{}{}", "│".blue(), styled, " ".repeat(padding), "│".blue());
    }
    let footer = format!("backend: {}", backend);
    let padding = inner_width.saturating_sub(footer.chars().count() + 2);
    println!("{}  {}{}{}", "│".blue(), footer.dimmed(), " ".repeat(padding), "│".blue());
    println!("{}", bottom_border.blue());
    println!();
}

/// Print the framework labels accepted by `--framework`
pub fn display_frameworks() {
    println!("{}", "Frameworks:".bold());
    for framework in Framework::all() {
        println!("  {:<12} {}", framework.value().green(), framework.display_name());
    }
}

fn push_section(out: &mut String, title: &str, items: &[String]) {
    let _ = writeln!(out, "{}", title.bold());
    if items.is_empty() {
        let _ = writeln!(out, "  {}", "(nenhum item)".dimmed());
    }
    for item in items {
        let _ = writeln!(out, "  • {}", item);
    }
    out.push('\n');
}

/// Render an analysis as terminal text, in the order the report is read
pub fn format_report(analysis: &AnalysisResult) -> String {
    let mut out = String::new();

    if analysis.framework_mismatch {
        let _ = writeln!(out, "{} {}\n", "⚠".yellow().bold(), "Framework incompatível".yellow());
    }

    let _ = writeln!(out, "{}", "Avaliação de Qualidade".bold());
    let _ = writeln!(out, "  {}\n", analysis.quality);

    push_section(&mut out, "Boas Práticas", &analysis.best_practices);
    push_section(&mut out, "Recomendações", &analysis.recommendations);

    let _ = writeln!(out, "{}", "Código Melhorado".bold());
    if analysis.has_improved_code() {
        for line in analysis.improved_code.lines() {
            let _ = writeln!(out, "  {}", line.cyan());
        }
    } else {
        let _ = writeln!(out, "  {}", "(sem alterações)".dimmed());
    }
    out.push('\n');

    push_section(&mut out, "Informações de Desempenho", &analysis.performance);
    push_section(&mut out, "Considerações de segurança", &analysis.security);

    out
}

pub fn print_report(analysis: &AnalysisResult) {
    print!("{}", format_report(analysis));
}

/// Print the reviewer's status error, if any
pub fn print_status_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
