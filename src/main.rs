mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: gridsnake [-c|--config PATH]\n",
    "\n",
    "Play Snake on a 20x20 grid in the terminal\n",
    "\n",
    "Options:\n",
    "  -c, --config PATH  Read configuration from the given file\n",
    "  -h, --help         Display this help message and exit\n",
    "  -V, --version      Show the program version and exit\n",
);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config })
    }

    fn run(self) -> ExitCode {
        match self {
            Arguments::Run { config } => match run(config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("gridsnake: {e:?}");
                    ExitCode::from(2)
                }
            },
            Arguments::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Arguments::Version => {
                println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(args) => args.run(),
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true).with_context(|| {
                format!("failed to load configuration from {}", path.display())
            })?,
            Err(_) => Config::default(),
        },
    };
    let theme = config.styles.theme();
    logging::init(&config.logging).context("failed to set up logging")?;
    tracing::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(Game::new(), theme).run(terminal));
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        tracing::warn!(error = %e, "Failed to disable focus change reporting");
    }
    ratatui::restore();
    r?;
    Ok(())
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe)
}
