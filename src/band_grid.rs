use band_grid::{BandConfig, Session, SessionError};
use crossterm::tty::IsTty;
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn run() -> Result<(), SessionError> {
    let mut config = BandConfig::from_env()?;
    // Escape codes only make sense on a terminal
    config.display.use_color = config.display.use_color && io::stdout().is_tty();
    info!("Starting band session with limits {:?}", config.limits);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::initialize(stdin.lock(), stdout.lock(), config)?;
    session.run()
}

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        // Running out of input while still setting up is not a failure
        Err(SessionError::InputClosed) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Band session failed: {}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
