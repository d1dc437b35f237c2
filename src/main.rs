use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use tracing::Level;

use revisor_cli::{
    CodeReviewer, display_banner, display_frameworks, print_report, print_status_error,
    read_code, save_improved_code,
};
use revisor_core::{Error, Framework, GenerativeBackend};
use revisor_endpoint::EndpointClient;
use revisor_gemini::GeminiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Prompt a Gemini model directly
    Gemini,
    /// Post the code to a remote analysis endpoint
    Endpoint,
}

#[derive(Parser)]
#[command(name = "revisor")]
#[command(about = "AI-powered code review before you open a pull request", long_about = None)]
struct Cli {
    /// File with the code to analyze (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Target framework label
    #[arg(short, long, default_value = "angular")]
    framework: String,

    /// Where the analysis comes from
    #[arg(short, long, value_enum, default_value_t = Backend::Gemini)]
    backend: Backend,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Write the improved code to this file
    #[arg(long, value_name = "PATH")]
    save_improved: Option<PathBuf>,

    /// List the known framework labels and exit
    #[arg(long)]
    list_frameworks: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_reviewer(cli: &Cli) -> Result<CodeReviewer> {
    let reviewer = match cli.backend {
        Backend::Gemini => {
            let mut client = GeminiClient::from_env()?;
            if let Some(model) = &cli.model {
                client = client.with_model(model.clone());
            }
            CodeReviewer::new(GenerativeBackend::new(client))
        }
        Backend::Endpoint => CodeReviewer::new(EndpointClient::from_env()?),
    };
    Ok(reviewer)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if cli.list_frameworks {
        display_frameworks();
        return Ok(());
    }

    let framework = match Framework::from_label(&cli.framework) {
        Some(known) => known.value().to_string(),
        None => {
            eprintln!(
                "{} '{}' is not a known framework label, sending it as is",
                "⚠".yellow(),
                cli.framework
            );
            cli.framework.clone()
        }
    };

    let code = read_code(cli.file.as_deref()).context("failed to read code")?;
    let reviewer = build_reviewer(&cli)?;

    if !cli.json {
        display_banner(reviewer.backend_name());
        eprintln!("{} Analisando...", "🤖".blue());
    }

    let analysis = match reviewer.analyze(&code, &framework).await {
        Ok(analysis) => analysis,
        Err(Error::EmptyInput(message)) => {
            print_status_error(&message);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(message) = reviewer.status().last_error {
        print_status_error(&message);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }

    if let Some(path) = &cli.save_improved {
        if save_improved_code(path, &analysis)? {
            eprintln!("{} Código melhorado salvo em {}", "✓".green(), path.display());
        } else {
            eprintln!("{} Nenhum código melhorado para salvar", "•".dimmed());
        }
    }

    Ok(())
}
