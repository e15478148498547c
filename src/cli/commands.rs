use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::generator::{build_context, render_wrapper, GenerateOptions};

const LONG_ABOUT: &str = "\
wrapgen generates a wrapper around a struct to hide its fields behind
getter-style accessor methods. Useful in the rare case where a struct must
satisfy a getter-shaped trait it cannot implement directly, e.g. a config
struct whose fields stay public so deserializers can see them.
WARNING: automates creation of non-idiomatic code.";

/// Command-line interface for wrapgen
#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(about = "Generate accessor wrappers for annotated structs")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for wrapgen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the wrapper type and its accessor methods
    Generate {
        /// Source struct name
        #[arg(long)]
        src: String,

        /// Wrapper type name
        #[arg(long)]
        dst: String,

        /// Source module path (file or directory, default: current directory)
        #[arg(long, default_value = ".")]
        src_module: PathBuf,

        /// Destination module path (file or directory, default: current directory)
        #[arg(long, default_value = ".")]
        dst_module: PathBuf,

        /// Field attribute key read for renames and exclusions
        #[arg(long, env = "WRAPGEN_TAG", default_value = "wrapstruct")]
        tag: String,

        /// Output file; omit to write to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the accessors and imports generation would produce
    Inspect {
        /// Source struct name
        #[arg(long)]
        src: String,

        /// Wrapper type name
        #[arg(long)]
        dst: String,

        /// Source module path (file or directory, default: current directory)
        #[arg(long, default_value = ".")]
        src_module: PathBuf,

        /// Destination module path (file or directory, default: current directory)
        #[arg(long, default_value = ".")]
        dst_module: PathBuf,

        /// Field attribute key read for renames and exclusions
        #[arg(long, env = "WRAPGEN_TAG", default_value = "wrapstruct")]
        tag: String,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if a module cannot be loaded, the struct cannot be
/// located, or the output sink cannot be written.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            src,
            dst,
            src_module,
            dst_module,
            tag,
            output,
        } => {
            let opts = GenerateOptions {
                src_type: src,
                dst_type: dst,
                src_module,
                dst_module,
                tag,
            };
            let ctx = build_context(&opts)?;
            let rendered = render_wrapper(&ctx)?;
            write_output(&rendered, output.as_deref())
        }
        Commands::Inspect {
            src,
            dst,
            src_module,
            dst_module,
            tag,
        } => {
            let opts = GenerateOptions {
                src_type: src,
                dst_type: dst,
                src_module,
                dst_module,
                tag,
            };
            let ctx = build_context(&opts)?;
            println!(
                "{}::{} wrapping {}",
                ctx.dst_module.path, ctx.dst_name, ctx.src_name
            );
            for spec in &ctx.specs {
                println!(
                    "  {}() -> {}  [field {}]",
                    spec.exposed_name,
                    spec.declared_type.render(&ctx.dst_module.path, &ctx.imports),
                    spec.source_field
                );
            }
            for (path, alias) in &ctx.imports {
                println!("  use {path} as {alias}");
            }
            Ok(())
        }
    }
}

/// Commit the fully rendered text to its sink: a file when a non-empty path
/// was given, stdout otherwise.
fn write_output(rendered: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) if !path.as_os_str().is_empty() => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote generated wrapper");
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
