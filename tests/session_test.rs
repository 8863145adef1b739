//! Headless sessions: scripted input, in-memory frames, journal on disk.

use std::time::Duration;

use console_tetris::core::{GameConfig, GameState, ScriptedPieces, SimpleRng};
use console_tetris::engine::{Journal, JournalRecord, Pacer, Runner, SessionEnd};
use console_tetris::input::{InputPoll, ScriptedInput};
use console_tetris::term::MemorySink;
use console_tetris::types::{Control, ControlState, PieceKind};

#[derive(Default)]
struct CountingPacer {
    ticks: u32,
    dwells: u32,
}

impl Pacer for CountingPacer {
    fn pause(&mut self, duration: Duration) {
        if duration == Duration::from_millis(400) {
            self.dwells += 1;
        } else {
            self.ticks += 1;
        }
    }
}

fn journal_path(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "console-tetris-{name}-{}.jsonl",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn session_runs_to_game_over_and_writes_journal() {
    let path = journal_path("game-over");
    let mut journal = Journal::append_to(&path).unwrap();
    journal
        .record(&JournalRecord::SessionStart {
            seed: 9,
            field_width: 12,
            field_height: 18,
            tick_ms: 50,
        })
        .unwrap();

    let mut game = GameState::new(GameConfig::default(), SimpleRng::new(9)).unwrap();
    let mut input = ScriptedInput::holding(ControlState::only(Control::SoftDrop));
    let mut sink = MemorySink::with_limit(4);
    let mut pacer = CountingPacer::default();

    let end = Runner::new()
        .with_journal(journal)
        .run(&mut game, &mut input, &mut sink, &mut pacer)
        .unwrap();

    assert_eq!(end, SessionEnd::GameOver);
    assert_eq!(pacer.ticks as u64, game.ticks());

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.first().unwrap()["type"], "session_start");
    assert_eq!(records.first().unwrap()["seed"], 9);
    let locks = records.iter().filter(|r| r["type"] == "lock").count();
    assert_eq!(locks as u32, game.pieces_locked());
    let end = records.last().unwrap();
    assert_eq!(end["type"], "session_end");
    assert_eq!(end["reason"], "game_over");
    assert_eq!(end["score"], game.score());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn quit_leaves_game_running() {
    let mut game =
        GameState::new(GameConfig::default(), ScriptedPieces::repeat(PieceKind::L)).unwrap();
    let polls = vec![
        InputPoll {
            controls: ControlState::only(Control::MoveLeft),
            quit: false,
        };
        3
    ];
    let mut input = ScriptedInput::new(polls).then(InputPoll {
        controls: ControlState::default(),
        quit: true,
    });
    let mut sink = MemorySink::new();
    let mut pacer = CountingPacer::default();

    let end = Runner::new()
        .run(&mut game, &mut input, &mut sink, &mut pacer)
        .unwrap();

    assert_eq!(end, SessionEnd::Quit);
    assert!(!game.is_over());
    assert_eq!(game.active().x, 3);
    assert_eq!(pacer.ticks, 4);
    assert_eq!(pacer.dwells, 0);
    assert_eq!(sink.frames().len(), 4);
}
