use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use wordfinder::{
    Cli, Config, Interrupt, Logger, Outcome, INTERRUPTED_MESSAGE, UNEXPECTED_ERROR_EXIT,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut logger = Logger::stderr(cli.debug);

    let code = match try_main(cli, &mut logger) {
        Ok(Outcome::Reported(count)) => {
            logger.debug(format_args!("reported {} words", count));
            Outcome::Reported(count).exit_code()
        }
        Ok(Outcome::NoMatches) => {
            logger.error(format_args!("no matching words found"));
            Outcome::NoMatches.exit_code()
        }
        Ok(Outcome::Interrupted) => {
            logger.info(format_args!("{}", INTERRUPTED_MESSAGE));
            Outcome::Interrupted.exit_code()
        }
        Err(e) => {
            logger.exception(&*e);
            UNEXPECTED_ERROR_EXIT
        }
    };

    logger.finish();
    ExitCode::from(code)
}

fn try_main(cli: Cli, logger: &mut Logger) -> Result<Outcome> {
    let config = Config::try_from(cli)?;

    let interrupt = Arc::new(Interrupt::new());
    let handle = Arc::clone(&interrupt);
    ctrlc::set_handler(move || {
        // A blocked read never returns to poll the flag.
        if handle.raise() {
            eprintln!("{}", INTERRUPTED_MESSAGE);
            std::process::exit(0);
        }
    })
    .context("installing interrupt handler")?;

    let stdout = io::stdout();
    let outcome = wordfinder::run(&config, logger, &interrupt, stdout.lock())?;
    Ok(outcome)
}
