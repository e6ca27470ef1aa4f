//! # Cardpress CLI
//!
//! Command-line interface for generating card sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Run the web form
//! cardpress serve --listen 0.0.0.0:5000
//!
//! # Two WiFi cards
//! cardpress generate --mode wifi -p NetA -s pw1 -p NetB -s longpassword
//!
//! # One contact card without a font file
//! cardpress generate --mode contact -p "Jane Doe" -s 555-1234 --draft
//!
//! # Suggest a password
//! cardpress password --strong
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use cardpress::{
    CardError, CardGenerator, CardKind,
    config::AppConfig,
    layout::{CardRenderer, GridSpec},
    logging,
    password::{HttpPasswordSource, PasswordSource, PasswordStrength},
    server::{self, ServerConfig},
    sink::{ImageSink, LastGenerated},
    text::{BlockFace, TtfFace, Typeface},
};

/// Cardpress - printable WiFi and contact card sheets
#[derive(Parser, Debug)]
#[command(name = "cardpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file (defaults apply for missing keys)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Mode {
    Wifi,
    Contact,
}

impl From<Mode> for CardKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Wifi => CardKind::WiFi,
            Mode::Contact => CardKind::Contact,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the card form over HTTP
    Serve {
        /// Address to listen on (overrides the config file)
        #[arg(long)]
        listen: Option<String>,

        /// Use block glyphs instead of the configured font
        #[arg(long)]
        draft: bool,
    },

    /// Generate one sheet and print its path
    Generate {
        /// Card type
        #[arg(long, value_enum)]
        mode: Mode,

        /// Number of cards (defaults to the number of --primary values)
        #[arg(long)]
        count: Option<usize>,

        /// SSID or name, once per card
        #[arg(short, long = "primary", value_name = "TEXT")]
        primary: Vec<String>,

        /// Password or phone number, once per card
        #[arg(short, long = "secondary", value_name = "TEXT")]
        secondary: Vec<String>,

        /// Use block glyphs instead of the configured font
        #[arg(long)]
        draft: bool,
    },

    /// Fetch a suggested password
    Password {
        /// Ask for a strong password
        #[arg(long)]
        strong: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CardError> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    let _log_guard = logging::init_logging(&config.log_dir, &config.log_level)?;

    match cli.command {
        Commands::Serve { listen, draft } => {
            let listen_addr = listen.unwrap_or_else(|| config.listen_addr.clone());
            let generator = Arc::new(build_generator(&config, draft)?);
            let passwords = Arc::new(HttpPasswordSource::new(&config.password_service_url)?);
            server::serve(ServerConfig { listen_addr }, generator, passwords).await?;
        }
        Commands::Generate {
            mode,
            count,
            primary,
            secondary,
            draft,
        } => {
            let count = count.unwrap_or(primary.len());
            let generator = build_generator(&config, draft)?;
            let artifact = generator.generate_from_form(
                mode.into(),
                &count.to_string(),
                &primary.join("\n"),
                &secondary.join("\n"),
            )?;
            println!("{}", artifact.path.display());
        }
        Commands::Password { strong } => {
            let source = HttpPasswordSource::new(&config.password_service_url)?;
            let password = source
                .generate(PasswordStrength::from_flag(strong))
                .await
                .inspect_err(|e| tracing::error!("Password generation failed: {}", e))?;
            println!("{}", password);
        }
    }

    Ok(())
}

/// Build a generator from config, with the TrueType font or draft blocks.
fn build_generator(config: &AppConfig, draft: bool) -> Result<CardGenerator, CardError> {
    let face: Arc<dyn Typeface> = if draft {
        Arc::new(BlockFace::default())
    } else {
        Arc::new(TtfFace::from_file(&config.font_path)?)
    };
    let renderer = CardRenderer::with_logo_file(face, &config.logo_path, GridSpec::STANDARD)?;
    let sink = ImageSink::new(&config.output_dir)?;
    Ok(CardGenerator::new(renderer, sink, Arc::new(LastGenerated::new())))
}
