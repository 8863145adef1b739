//! Console Tetris runner (default binary).
//!
//! Plays one game on the terminal, then prints the final score. Settings come
//! from the environment (see [`SessionConfig`]).

use std::io;

use anyhow::{bail, Result};
use crossterm::tty::IsTty;

use console_tetris::core::{GameState, SimpleRng};
use console_tetris::engine::{
    Journal, JournalRecord, Runner, SessionConfig, SessionEnd, ThreadPacer,
};
use console_tetris::input::TerminalInput;
use console_tetris::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    let mut game = GameState::new(config.game, SimpleRng::new(config.seed))?;

    if !io::stdout().is_tty() {
        bail!("console-tetris needs an interactive terminal");
    }

    let mut runner = Runner::new()
        .with_tick(config.tick)
        .with_dwell(config.line_clear_dwell);
    if let Some(path) = &config.journal_path {
        let mut journal = Journal::append_to(path)?;
        journal.record(&JournalRecord::SessionStart {
            seed: config.seed,
            field_width: config.game.field_width,
            field_height: config.game.field_height,
            tick_ms: config.tick.as_millis() as u64,
        })?;
        runner = runner.with_journal(journal);
    }

    let mut term = TerminalRenderer::new();
    let mut input = TerminalInput::new();
    term.enter()?;

    let result = input
        .enter()
        .and_then(|_| runner.run(&mut game, &mut input, &mut term, &mut ThreadPacer));

    // Always try to restore terminal state.
    let _ = input.exit();
    let _ = term.exit();
    let end = result?;

    let reason = match end {
        SessionEnd::GameOver => "no room for the next piece",
        SessionEnd::Quit => "quit by player",
    };
    println!(
        "[Tetris] session ended ({reason}) after {} pieces, seed {}",
        game.pieces_locked(),
        config.seed
    );
    if let Some(path) = &config.journal_path {
        println!("[Tetris] journal appended to {}", path.display());
    }

    println!("{}", end.farewell());
    println!("\t Score: {}", game.score());
    Ok(())
}
