//! Interactive inherent-risk triage console

mod error;
mod persist;
mod prompt;
mod report;
mod scanner;
mod session;

use session::Session;
use std::io;

fn main() -> Result<(), anyhow::Error> {
    // Prompts own stdout; logs go to stderr
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    tracing::info!("Starting triage console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let output_dir = std::env::current_dir()?;

    let mut session = Session::new(stdin.lock(), stdout.lock(), output_dir);
    session.run()?;

    tracing::info!("Session finished");
    Ok(())
}
