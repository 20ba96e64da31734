//! Terminal UI for noughts.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::Mark;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a perfect minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Mark to play; x moves first, o lets the agent open.
    #[arg(short, long, default_value = "x")]
    mark: Side,

    /// Seed for the agent's tie-breaking; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Watch the agent play both seats instead of taking one.
    #[arg(long)]
    watch: bool,
}

/// Which side the human takes.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Side {
    /// Play the crosses (first move).
    X,
    /// Play the noughts (second move).
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!("starting noughts TUI");

    let app = if cli.watch {
        App::spectate(cli.seed)
    } else {
        App::new(cli.mark.into(), cli.seed)
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Agent seats move on their own; the draw above keeps the board
        // current while they do.
        app.advance_agent();

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::Char(c @ '1'..='9') => {
                        app.place(c as usize - '1' as usize);
                    }
                    _ => {}
                }
            }
        }
    }
}
