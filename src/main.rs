use std::{
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use codetype::{
    app::App,
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    logging,
    runtime::{ChannelEventSource, EventSource, Runner, SessionEvent},
    sample::{Sample, SampleName},
    session::SessionConfig,
    terminal::TerminalGuard,
    ui,
};
use crossterm::tty::IsTty;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

const TICK_RATE: Duration = Duration::from_millis(250);

/// practice typing real code in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type through a block of code character by character. Mistakes are highlighted as you go, and words per minute, accuracy and duration are shown once the last character is typed."
)]
pub struct Cli {
    /// bundled code sample to practice on
    #[clap(short = 's', long, value_enum, default_value_t = SampleName::BinaryTree)]
    sample: SampleName,

    /// pick a bundled sample at random
    #[clap(short = 'r', long, conflicts_with = "sample")]
    random: bool,

    /// custom text to practice on
    #[clap(short = 'p', long, conflicts_with_all = ["file", "random"])]
    prompt: Option<String>,

    /// read the practice text from a file
    #[clap(short = 'f', long, conflicts_with = "random")]
    file: Option<PathBuf>,

    /// hold the cursor on a mistake until it is corrected (overrides config)
    #[clap(long)]
    pause_on_error: Option<bool>,

    /// number of spaces the Tab key types (overrides config)
    #[clap(long)]
    tab_width: Option<usize>,

    /// write the effective settings to the config file
    #[clap(long)]
    save_config: bool,

    /// print the bundled sample names and exit
    #[clap(long)]
    list_samples: bool,
}

impl Cli {
    fn resolve_sample(&self, tab_width: usize) -> Result<Sample> {
        if let Some(prompt) = &self.prompt {
            return Ok(Sample::custom(prompt, tab_width));
        }
        if let Some(path) = &self.file {
            return Sample::from_file(path, tab_width);
        }
        let name = if self.random {
            SampleName::random()
        } else {
            self.sample
        };
        Sample::bundled(name, tab_width)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_samples {
        println!("{}", SampleName::list());
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(log_path) = AppDirs::log_path() {
        if let Err(e) = logging::init(&log_path) {
            eprintln!("warning: logging disabled: {e:#}");
        }
    }

    let store = FileConfigStore::new();
    let config = store
        .load()
        .with_overrides(cli.pause_on_error, cli.tab_width);
    if cli.save_config {
        store
            .save(&config)
            .with_context(|| format!("failed to save {}", store.path().display()))?;
        info!(path = %store.path().display(), "config saved");
    }

    let session_config = SessionConfig::from(&config);
    let sample = cli.resolve_sample(session_config.tab_width)?;
    info!(title = %sample.title, chars = sample.text.chars().count(), ?session_config, "starting");

    let res = run_session(sample, session_config);
    if let Err(e) = &res {
        error!(error = %e, "session aborted");
    }
    res
}

fn run_session(sample: Sample, session_config: SessionConfig) -> Result<()> {
    // dropped last, so the terminal comes back on every exit path
    let _guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(sample, session_config);
    let runner = Runner::new(ChannelEventSource::crossterm(), TICK_RATE);
    start_tui(&mut terminal, &mut app, &runner)
}

fn start_tui<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<()> {
    terminal.draw(|f| ui::draw(app, f))?;

    while !app.should_quit {
        let event = runner.step();
        if let SessionEvent::Closed = event {
            bail!("terminal input closed");
        }
        if app.handle_event(event) {
            terminal.draw(|f| ui::draw(app, f))?;
        }
    }

    info!(
        phase = %app.tracker.phase(),
        index = app.tracker.current_index(),
        "quit"
    );
    Ok(())
}
