//! Whole-game runs driven through `Game` with in-memory storage

use climb_high::persistence::{MemoryStorage, Storage};
use climb_high::renderer::{DrawCmd, DrawList};
use climb_high::sim::{GamePhase, Viewport};
use climb_high::{Game, HighScore, RunSummary, Tuning};

fn game_with(storage: MemoryStorage, tuning: Tuning) -> Game {
    Game::new(11, Viewport::default(), tuning, Box::new(storage))
}

/// Drop the player under the world so the next frame ends the run
fn drop_player(game: &mut Game) {
    let state = game.state_mut();
    state.player.pos.y = state.viewport.height - 10.0;
    state.player.vy = 20.0;
}

/// Jumps too low to reach the scroll line, so an idle player bounces in place
fn hop_tuning() -> Tuning {
    Tuning {
        jump_strength: -5.0,
        ..Tuning::default()
    }
}

#[test]
fn test_full_run_persists_best_across_sessions() {
    let mut game = game_with(MemoryStorage::new(), Tuning::default());
    assert_eq!(game.phase(), GamePhase::Menu);
    assert!(game.start());

    let mut surface = DrawList::new();
    for _ in 0..10 {
        game.advance(1.0 / 60.0, &mut surface);
    }
    assert_eq!(game.phase(), GamePhase::Playing);

    game.state_mut().score = 321.6;
    drop_player(&mut game);
    game.update();

    assert_eq!(game.phase(), GamePhase::GameOver);
    let summary = game.summary().expect("summary after game over");
    assert_eq!(summary.score, 321);
    assert!(summary.new_best);

    // Second session reads what the first wrote
    let mut storage = MemoryStorage::new();
    let saved = game.storage().get(HighScore::STORAGE_KEY).expect("best saved");
    storage.set(HighScore::STORAGE_KEY, &saved).unwrap();
    let mut next = game_with(storage, Tuning::default());
    assert_eq!(next.best(), 321);

    // A worse run keeps the old best
    next.start();
    next.state_mut().score = 100.0;
    drop_player(&mut next);
    next.update();
    assert_eq!(
        next.summary(),
        Some(RunSummary {
            score: 100,
            coins: 0,
            best: 321,
            new_best: false,
        })
    );
    assert_eq!(next.storage().get(HighScore::STORAGE_KEY).as_deref(), Some("321"));
}

#[test]
fn test_restart_resets_run_but_keeps_best() {
    let mut game = game_with(MemoryStorage::new(), Tuning::default());
    game.start();
    game.state_mut().score = 75.0;
    game.state_mut().coin_count = 4;
    drop_player(&mut game);
    game.update();
    assert_eq!(game.phase(), GamePhase::GameOver);

    // Start is ignored outside the menu
    assert!(!game.start());
    assert!(game.restart());

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.score(), 0);
    assert_eq!(game.coins(), 0);
    assert_eq!(game.best(), 75);
    assert_eq!(game.state().platforms.len(), 8);
}

#[test]
fn test_menu_freezes_world() {
    let mut game = game_with(MemoryStorage::new(), Tuning::default());
    game.start();
    game.update();
    let ticks = game.state().time_ticks;

    assert!(game.return_to_menu());
    let mut surface = DrawList::new();
    game.advance(0.1, &mut surface);

    assert_eq!(game.state().time_ticks, ticks);
    assert_eq!(surface.commands, vec![DrawCmd::Clear { width: 400.0, height: 600.0 }]);
}

#[test]
fn test_input_rate_is_independent_of_frame_rate() {
    for fps in [30.0_f32, 60.0, 144.0] {
        let mut game = game_with(MemoryStorage::new(), hop_tuning());
        game.start();

        let frames = (fps * 2.0) as u32;
        let mut surface = DrawList::new();
        let mut steps = 0;
        for _ in 0..frames {
            surface.reset();
            steps += game.advance(1.0 / fps, &mut surface);
        }

        // Two seconds of wall time is ~125 input steps at any display rate
        assert!((123..=126).contains(&steps), "{fps} fps ran {steps} input steps");
        assert_eq!(game.phase(), GamePhase::Playing, "{fps} fps");
        assert_eq!(game.state().time_ticks, frames as u64, "{fps} fps");
    }
}

#[test]
fn test_held_input_moves_by_input_steps() {
    let mut game = game_with(MemoryStorage::new(), hop_tuning());
    game.start();
    let start_x = game.state().player.pos.x;

    game.key("ArrowLeft", true);
    for _ in 0..5 {
        game.input_step();
    }
    game.key("ArrowLeft", false);
    game.input_step();

    assert_eq!(game.state().player.pos.x, start_x - 30.0);
}

#[test]
fn test_same_seed_same_world() {
    let mut a = game_with(MemoryStorage::new(), Tuning::default());
    let mut b = game_with(MemoryStorage::new(), Tuning::default());
    a.start();
    b.start();

    let mut surface = DrawList::new();
    for _ in 0..120 {
        a.advance(1.0 / 60.0, &mut surface);
        b.advance(1.0 / 60.0, &mut surface);
    }

    let pa: Vec<_> = a.state().platforms.iter().map(|p| (p.pos, p.width)).collect();
    let pb: Vec<_> = b.state().platforms.iter().map(|p| (p.pos, p.width)).collect();
    assert_eq!(pa, pb);
    assert_eq!(a.score(), b.score());
}
