//! # Resume Builder CLI
//!
//! Command-line interface for rendering resumes and processing photos.
//!
//! ## Usage
//!
//! ```bash
//! # Start a new data file
//! resume-builder init --out resume_data.json
//!
//! # Add a profile photo to it
//! resume-builder photo resume_data.json me.jpg
//!
//! # Render with a template
//! resume-builder render resume_data.json --template "Ultra Modern" --out resume.pdf
//!
//! # List templates
//! resume-builder templates
//!
//! # Run the HTTP API
//! resume-builder serve --listen 0.0.0.0:8080
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use resume_builder::{
    ResumeData, ResumeError,
    document::RenderOptions,
    export, photo,
    server::{self, DEFAULT_MAX_UPLOAD_BYTES, ServerConfig},
    template::{self, DEFAULT_TEMPLATE},
};

/// Resume Builder - structured resumes to PDF
#[derive(Parser, Debug)]
#[command(name = "resume-builder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a resume data file to PDF
    Render {
        /// Resume data file (JSON)
        input: PathBuf,

        /// Template name (see `templates`)
        #[arg(long, short, default_value = DEFAULT_TEMPLATE)]
        template: String,

        /// Output PDF path
        #[arg(long, short, default_value = export::PDF_FILENAME)]
        out: PathBuf,

        /// Date printed in the footer (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Extra text appended to the footer
        #[arg(long)]
        footer_note: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        uncompressed: bool,
    },

    /// Turn a photo into the circular 200x200 PNG avatar
    Avatar {
        /// Source image (PNG, JPEG, ...)
        image: PathBuf,

        /// Output PNG path
        #[arg(long, short, default_value = "avatar.png")]
        out: PathBuf,
    },

    /// Process a photo and store it as the profile image of a data file
    Photo {
        /// Resume data file (JSON)
        input: PathBuf,

        /// Source image (PNG, JPEG, ...)
        image: PathBuf,

        /// Where to write the updated data file (defaults to INPUT)
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// List available templates
    Templates,

    /// Write an empty resume data file
    Init {
        /// Output path
        #[arg(long, short, default_value = export::JSON_FILENAME)]
        out: PathBuf,
    },

    /// Run the HTTP export API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Upload limit for photos, in megabytes
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES / (1024 * 1024))]
        max_upload_mb: usize,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_builder=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ResumeError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            template,
            out,
            date,
            footer_note,
            uncompressed,
        } => {
            let data = load(&input)?;
            let mut options = RenderOptions {
                footer_note,
                compress: !uncompressed,
                ..Default::default()
            };
            if let Some(date) = date {
                options.generated_on = date;
            }

            let pdf = export::pdf(&data, &template, &options)?;
            for warning in &pdf.warnings {
                eprintln!("Warning: {}", warning);
            }
            pdf.write_as(&out)?;
            println!("Saved to {}", out.display());
        }

        Commands::Avatar { image, out } => {
            let png = photo::process_profile_image(&fs::read(&image)?)?;
            fs::write(&out, png)?;
            println!("Saved to {}", out.display());
        }

        Commands::Photo { input, image, out } => {
            let mut data = load(&input)?;
            data.personal.profile_image = Some(photo::process_profile_image(&fs::read(&image)?)?);
            let out = out.unwrap_or(input);
            export::json(&data)?.write_as(&out)?;
            println!("Updated {}", out.display());
        }

        Commands::Templates => {
            println!("Available templates:");
            for style in template::TEMPLATES {
                println!(
                    "  {:<18} primary {}  header {:?}  sections {:?}  borders {}  spacing {}",
                    style.name,
                    style.primary.to_hex(),
                    style.header_style,
                    style.section_style,
                    if style.borders { "yes" } else { "no" },
                    style.spacing
                );
            }
        }

        Commands::Init { out } => {
            export::json(&ResumeData::default())?.write_as(&out)?;
            println!("Created {}", out.display());
        }

        Commands::Serve {
            listen,
            max_upload_mb,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                max_upload_bytes: max_upload_mb * 1024 * 1024,
            };
            info!("Starting HTTP server");
            tokio::runtime::Runtime::new()?.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Read and parse a resume data file.
fn load(path: &Path) -> Result<ResumeData, ResumeError> {
    let json = fs::read_to_string(path)?;
    ResumeData::from_json(&json)
}
