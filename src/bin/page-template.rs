//! Page Template CLI
//!
//! Command-line interface for rendering templates against source records
//! and inspecting generation flags.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use page_template::{default_template, load_template, save_template, TemplateError};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "page-template")]
#[command(about = "Render page templates against normalized data profiles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a source record through a template
    Render {
        /// Source record JSON file (the primary data context)
        data: PathBuf,

        /// Template file (built-in default if omitted or missing)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Auxiliary snapshot JSON file, substituted wholesale into
        /// snapshot-sourced blocks
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show generation-slot eligibility for a template
    Flags {
        /// Template file (built-in default if omitted or missing)
        #[arg(long)]
        template: Option<PathBuf>,

        /// List only the enabled slot ids instead of the full map
        #[arg(long)]
        enabled: bool,
    },

    /// Write the built-in default template to disk for editing
    ExportDefault {
        /// Destination file
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            data,
            template,
            snapshot,
            output,
            pretty,
        } => run_render(&data, template.as_deref(), snapshot.as_deref(), output, pretty),

        Commands::Flags { template, enabled } => run_flags(template.as_deref(), enabled),

        Commands::ExportDefault { path } => run_export_default(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

/// Load an arbitrary JSON document (source record or snapshot).
fn load_json(path: &Path) -> Result<Value, u8> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: cannot read {}: {}", path.display(), e);
        3u8
    })?;
    serde_json::from_str(&content).map_err(|e| {
        eprintln!("Error: invalid JSON in {}: {}", path.display(), e);
        2u8
    })
}

fn load_template_or_exit(path: Option<&Path>) -> Result<page_template::TemplateDefinition, u8> {
    load_template(path).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })
}

fn run_render(
    data_path: &Path,
    template_path: Option<&Path>,
    snapshot_path: Option<&Path>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<(), u8> {
    let template = load_template_or_exit(template_path)?;
    let data = load_json(data_path)?;
    let snapshot = snapshot_path.map(load_json).transpose()?;

    let rendered = template.render(&data, snapshot.as_ref());

    let json_output = if pretty {
        serde_json::to_string_pretty(&rendered)
    } else {
        serde_json::to_string(&rendered)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}

fn run_flags(template_path: Option<&Path>, enabled_only: bool) -> Result<(), u8> {
    let template = load_template_or_exit(template_path)?;

    let json_output = if enabled_only {
        let enabled: Vec<String> = template.enabled_generations().into_iter().collect();
        serde_json::to_string_pretty(&enabled)
    } else {
        serde_json::to_string_pretty(&template.generation_flags())
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    println!("{}", json_output);
    Ok(())
}

fn run_export_default(path: &Path) -> Result<(), u8> {
    save_template(default_template(), path).map_err(|e: TemplateError| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;
    println!("Wrote default template to {}", path.display());
    Ok(())
}
