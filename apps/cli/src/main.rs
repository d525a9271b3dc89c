use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use adaudit_core::{
    AnalysisSession, DEFAULT_MODEL, GeminiClient, Phase, format_critique_readable,
};

#[derive(Parser)]
#[command(name = "adaudit")]
#[command(about = "Get a brutal, schema-validated AI critique of a short video ad")]
struct Cli {
    /// Path to the video file to analyze
    video: PathBuf,

    /// Gemini model used for the critique
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Print the raw structured critique instead of the readable report
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Validate API key early
    let client = match GeminiClient::from_env() {
        Ok(client) => client.with_model(cli.model),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("adaudit").cyan().bold(),
        style("Ad Critique").dim()
    );

    let mut session = AnalysisSession::new(client);

    let spinner = create_spinner("Analysing ad performance...");
    session.submit(&cli.video).await;

    match session.phase() {
        Phase::Success(critique) => {
            spinner.finish_with_message(format!(
                "{} Analysis complete",
                style("✓").green().bold()
            ));
            println!("{}", style("─".repeat(60)).dim());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(critique)?);
            } else {
                println!("{}", format_critique_readable(critique));
            }
        }
        Phase::Error(message) => {
            spinner.finish_with_message(format!(
                "{} Analysis failed",
                style("✗").red().bold()
            ));
            eprintln!("\n{} {}", style("Error:").red().bold(), message);
            std::process::exit(1);
        }
        // submit resolves to success or error; Idle needs a cancel, which the
        // CLI never issues
        Phase::Idle | Phase::Analyzing => unreachable!(),
    }

    Ok(())
}
