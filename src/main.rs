use clap::Parser;
use tarjama::{BackendConfig, LanguageCode, TextMetrics, build_translator};

/// Translate a piece of text through the configured backend
#[derive(Parser, Debug)]
#[command(name = "tarjama", version, about)]
struct Cli {
    /// Text to translate
    text: String,

    /// Source language code (en, fr, ar)
    #[arg(long, short = 's', default_value = "en")]
    source: LanguageCode,

    /// Target language code (en, fr, ar)
    #[arg(long, short = 't')]
    target: LanguageCode,

    /// Show backend and metrics details
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(flatten)]
    backend: BackendConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = cli.text.trim();
    if text.is_empty() {
        eprintln!("❌ Text cannot be empty");
        return Err("empty text".into());
    }

    let metrics = TextMetrics::of(text);
    if cli.verbose {
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {} → {}", cli.source, cli.target);
        println!(
            "🔢 {} words, {} characters",
            metrics.word_count, metrics.char_count
        );
    }

    if cli.source == cli.target {
        println!("{}", text);
        return Ok(());
    }

    let translator = build_translator(&cli.backend)?;
    if cli.verbose {
        println!("🔌 Backend: {}", translator.provider_name());
        println!();
    }

    match translator.translate(text, cli.source, cli.target).await {
        Ok(translated) => {
            println!("{}", translated);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            Err(e.into())
        }
    }
}
