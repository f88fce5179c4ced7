//! Tic-Tac-Toe entry point
//!
//! Line-oriented terminal front end: draws the board, reads one command per
//! line and forwards it to the session.

use std::io::{self, BufRead, Write};

use tic_tac_toe::settings::SETTINGS_PATH;
use tic_tac_toe::sim::ParseCommandError;
use tic_tac_toe::{Command, MoveOutcome, Session, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("Tic-Tac-Toe starting...");

    let settings = Settings::load(SETTINGS_PATH);
    let mut session = Session::new(settings.wins_file());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut session, &settings, stdin.lock(), stdout.lock()) {
        log::error!("Terminal I/O failed: {e}");
        std::process::exit(1);
    }
}

/// Read commands until `q` or end of input
fn run(
    session: &mut Session,
    settings: &Settings,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    render(&mut out, session, settings)?;

    for line in input.lines() {
        let line = line?;
        if matches!(line.trim().to_lowercase().as_str(), "q" | "quit") {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => {
                prompt(&mut out, session)?;
                continue;
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                prompt(&mut out, session)?;
                continue;
            }
        };

        let response = session.handle(command);
        if let Some(e) = &response.save_error {
            writeln!(out, "Warning: {e}. Wins won't be remembered next time.")?;
        }

        match response.outcome {
            Some(MoveOutcome::Ignored) => writeln!(out, "That cell is not available.")?,
            Some(MoveOutcome::Win(player)) => {
                write!(out, "\n{}", session.state().board())?;
                writeln!(out, "\nPlayer {player} wins!")?;
                if settings.auto_reset {
                    session.reset();
                }
            }
            Some(MoveOutcome::Draw) => {
                write!(out, "\n{}", session.state().board())?;
                writeln!(out, "\nIt's a draw!")?;
                if settings.auto_reset {
                    session.reset();
                }
            }
            Some(MoveOutcome::Continue) | None => {}
        }

        render(&mut out, session, settings)?;
    }

    writeln!(out, "{}", session.tallies().stats_label())?;
    out.flush()
}

fn render(out: &mut impl Write, session: &Session, settings: &Settings) -> io::Result<()> {
    write!(out, "\n{}", session.state().board())?;
    if settings.show_stats {
        writeln!(out, "\n{}", session.tallies().stats_label())?;
    }
    prompt(out, session)
}

fn prompt(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let state = session.state();
    if state.winner().is_some() || state.board().is_full() {
        write!(out, "Round over. r to play again, q to quit: ")?;
    } else {
        write!(
            out,
            "Player {}, pick a cell (1-9), r to reset, q to quit: ",
            state.current_player()
        )?;
    }
    out.flush()
}
