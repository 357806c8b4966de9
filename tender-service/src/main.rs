use {
    anyhow::Result,
    clap::Parser,
    std::{
        io::IsTerminal,
        process::ExitCode,
    },
    tracing_subscriber::filter::LevelFilter,
};

mod api;
mod award;
mod bid;
mod command;
mod config;
mod kernel;
mod state;
mod tender;
mod vendor;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize a Tracing Subscriber. Stdout is reserved for command results.
    let fmt_builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal());

    // Use the compact formatter if we're in a terminal, otherwise use the JSON formatter.
    if std::io::stderr().is_terminal() {
        tracing::subscriber::set_global_default(fmt_builder.compact().finish())?;
    } else {
        tracing::subscriber::set_global_default(fmt_builder.json().finish())?;
    }

    // Parse the command line arguments with clap, will exit automatically on `--help` or
    // with invalid arguments.
    command::run(config::Options::parse()).await
}
