use clap::{ArgAction, Parser};
use exn::ResultExt;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unref::error::{ErrorKind, Result};
use unref::{Config, Loader};

#[derive(Debug, Parser)]
#[command(name = "unref", version, about = "Report media files that no HTML, CSS, JS or PHP file references")]
struct Cli {
    /// Project directory to scan (defaults to the current directory)
    root: Option<PathBuf>,

    /// File the unused list is written to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of unused files to print
    #[arg(short, long)]
    preview: Option<usize>,

    /// Configuration file to use instead of ./unref.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
impl Cli {
    fn config(&self) -> Result<Config> {
        let loader = match &self.config {
            Some(path) => Loader::new().with_file(path),
            None => Loader::new(),
        };
        let mut config = loader.load().or_raise(|| ErrorKind::Config)?;
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(preview) = self.preview {
            config.preview = preview;
        }
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Logs go to stderr so the report on stdout stays readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    println!("Scanning {} for unused media files...", config.root.display());
    let report = unref::run(&config)?;
    println!("Found {} media files and {} source files", report.media(), report.sources() + report.skipped());
    // A closed stdout shouldn't stop the report file from being written.
    if let Err(err) = report.render(&mut std::io::stdout().lock(), config.preview) {
        tracing::warn!(error = %err, "Could not print summary");
    }
    if report.write_unused(&config.output)? {
        println!();
        println!("Unused files written to {}", config.output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
