//! Writes the static HTML shell of the site, with the theme bootstrap
//! script inlined, to stdout or to `--out <path>`.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use learnings_and_code::config::SiteConfig;
use learnings_and_code::models::error::AppError;
use learnings_and_code::render::render_document;
use learnings_and_code::templates::not_found::not_found_title;

#[derive(Parser, Debug)]
#[command(
    name = "render-shell",
    about = "Render the site's HTML shell with the theme bootstrap script"
)]
struct Args {
    /// JSON site config; keys left out keep the built-in values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Document title (defaults to the not-found page title)
    #[arg(long)]
    title: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), AppError> {
    let site = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| AppError::ConfigError(format!("{}: {e}", path.display())))?;
            SiteConfig::from_json(&json)?
        }
        None => SiteConfig::default(),
    };

    let title = args.title.unwrap_or_else(|| not_found_title(&site));
    let document = render_document(&site, &title, "");

    match &args.out {
        Some(path) => fs::write(path, document)
            .map_err(|e| AppError::RenderError(format!("{}: {e}", path.display()))),
        None => io::stdout()
            .write_all(document.as_bytes())
            .map_err(|e| AppError::RenderError(e.to_string())),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("render-shell: {e}");
            ExitCode::FAILURE
        }
    }
}
