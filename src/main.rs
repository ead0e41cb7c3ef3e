use std::{
    io::{self, Write},
    process::ExitCode,
};

use colored::Colorize;
use lending_desk::{
    DeskConfig, DeskError, GateOutcome, LendingConsole, LendingDesk, SessionGate,
    observers::TransitionLogger,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter
const LOG_ENV: &str = "LENDING_DESK_LOG";

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "lending desk stopped");
            ExitCode::FAILURE
        }
    }
}

/// Send diagnostics to stderr so stdout stays the user interface
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init()
    {
        eprintln!("failed to initialize tracing subscriber: {err}");
    }
}

/// Log in, then serve one lending session
fn run() -> Result<(), DeskError> {
    let config = DeskConfig::default();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    writeln!(output, "{}", "Welcome to the virtual library".cyan().bold())?;

    match SessionGate::new(&config).authenticate(&mut input, &mut output)? {
        GateOutcome::Granted { username } => {
            let mut desk = LendingDesk::with_config(&config);
            desk.register_observer(Box::new(TransitionLogger));

            let summary = LendingConsole::new(&mut input, &mut output).run(&mut desk)?;
            info!(%username, loan_count = summary.loan_count, "session finished");
        }
        GateOutcome::LockedOut { attempts } => {
            warn!(attempts, "console not opened");
        }
        GateOutcome::Abandoned => {
            info!("input ended before login");
        }
    }

    output.flush()?;
    Ok(())
}
