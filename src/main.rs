use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries generated code; all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    wrapgen::cli::run_cli()
}
