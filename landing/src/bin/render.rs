//! # cloudlift-render
//!
//! Renders the CloudLift landing page to static HTML.
//!
//! ```bash
//! # Full document into dist/index.html
//! cloudlift-render
//!
//! # Bare markup on stdout, for embedding in another host page
//! cloudlift-render --fragment --stdout
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use cloudlift_landing::{PageOptions, TAILWIND_CDN, render_app, render_page, write_html};

#[derive(Parser, Debug)]
#[command(name = "cloudlift-render")]
#[command(about = "Render the CloudLift landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(short, long, env = "CLOUDLIFT_OUT", default_value = "dist/index.html")]
    out: PathBuf,

    /// Print to stdout instead of writing a file; wins over --out
    #[arg(long)]
    stdout: bool,

    /// Emit only the page markup, without <html>/<head>/<body>
    #[arg(long)]
    fragment: bool,

    /// Document title
    #[arg(long, env = "CLOUDLIFT_TITLE", default_value = "CloudLift")]
    title: String,

    /// Value of the <html lang> attribute
    #[arg(long, default_value = "en")]
    lang: String,

    /// Tailwind script source
    #[arg(long, env = "CLOUDLIFT_TAILWIND_SRC", default_value = TAILWIND_CDN)]
    tailwind_src: String,

    /// Leave the Tailwind script out of the document
    #[arg(long)]
    no_tailwind: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.title.clone(),
            lang: self.lang.clone(),
            tailwind_src: (!self.no_tailwind).then(|| self.tailwind_src.clone()),
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!(?args, "parsed arguments");

    let html = if args.fragment {
        render_app()
    } else {
        render_page(&args.page_options())
    };

    if args.stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(html.as_bytes())
            .and_then(|()| out.write_all(b"\n"))
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    let written = write_html(&args.out, &html)
        .with_context(|| format!("failed to export page to {}", args.out.display()))?;
    info!(
        "cloudlift-render v{} wrote {}",
        env!("CARGO_PKG_VERSION"),
        written.display()
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[cloudlift-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
