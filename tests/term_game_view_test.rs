use console_tetris::core::{GameConfig, GameState, ScriptedPieces};
use console_tetris::term::GameView;
use console_tetris::types::{Control, ControlState, PieceKind};

fn scripted(kind: PieceKind) -> GameState {
    GameState::new(GameConfig::default(), ScriptedPieces::repeat(kind)).unwrap()
}

fn soft_drop_until_lock(game: &mut GameState) {
    while game.tick(ControlState::only(Control::SoftDrop)).is_none() {}
}

#[test]
fn term_view_draws_walls_and_floor_at_offset() {
    let fb = GameView::default().render(&scripted(PieceKind::T).snapshot());

    for y in 2..20 {
        assert_eq!(fb.get(2, y).unwrap().ch, '#', "left wall row {y}");
        assert_eq!(fb.get(13, y).unwrap().ch, '#', "right wall row {y}");
    }
    assert_eq!(&fb.row_text(19)[2..14], "############");
    assert_eq!(fb.row_text(0).trim(), "");
    assert_eq!(fb.row_text(20).trim(), "");
}

#[test]
fn term_view_draws_active_piece_as_letter() {
    let game = scripted(PieceKind::J);
    let fb = GameView::default().render(&game.snapshot());

    // J is id 6: '.XX.' on row 1, '.X..' on rows 2 and 3.
    assert_eq!(fb.get(9, 3).unwrap().ch, 'G');
    assert_eq!(fb.get(10, 3).unwrap().ch, 'G');
    assert_eq!(fb.get(9, 4).unwrap().ch, 'G');
    assert_eq!(fb.get(9, 5).unwrap().ch, 'G');
    assert_eq!(fb.get(10, 4).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_locked_piece_and_score() {
    let mut game = scripted(PieceKind::S);
    soft_drop_until_lock(&mut game);

    let fb = GameView::default().render(&game.snapshot());
    // Locked S ('C') rests on the floor: rows 14..=16 of the field.
    let bottom = fb.row_text(18);
    assert_eq!(bottom.matches('C').count(), 1);
    assert_eq!(fb.row_text(16).matches('C').count(), 1);
    assert_eq!(fb.row_text(17).matches('C').count(), 2);
    assert!(fb.row_text(2).contains("SCORE:       25"));
}

#[test]
fn term_view_shows_marked_rows_during_pause() {
    let mut game = scripted(PieceKind::O);
    for target in [0, 2, 4, 6, 8] {
        let step = if target < 6 {
            Control::MoveLeft
        } else {
            Control::MoveRight
        };
        while game.active().x != target {
            game.tick(ControlState::only(step));
        }
        soft_drop_until_lock(&mut game);
    }

    let view = GameView::default();
    let marked = view.render(&game.snapshot());
    assert_eq!(&marked.row_text(17)[3..13], "==========");
    assert_eq!(&marked.row_text(18)[3..13], "==========");

    game.collapse_cleared_rows();
    let cleared = view.render(&game.snapshot());
    assert_eq!(&cleared.row_text(18)[3..13], "          ");
    assert!(cleared.row_text(2).contains("SCORE:      525"));
}
