//! Game driver
//!
//! Owns the world, persistence and the input clock. The host calls
//! `update` + `draw` once per display frame and `input_step` on the fixed
//! input clock, or `advance` to drive both from one elapsed time.

use crate::clock::InputClock;
use crate::highscores::HighScore;
use crate::persistence::Storage;
use crate::platform::{InputState, KeyAction};
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{
    Command, GameEvent, GamePhase, GameState, TickInput, Viewport, apply_command, apply_input,
    tick,
};
use crate::tuning::Tuning;

/// End-of-run numbers for the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u64,
    pub coins: u32,
    pub best: u64,
    pub new_best: bool,
}

pub struct Game {
    state: GameState,
    high_score: HighScore,
    settings: Settings,
    storage: Box<dyn Storage>,
    input: InputState,
    clock: InputClock,
    summary: Option<RunSummary>,
}

impl Game {
    /// Load the best score and settings from `storage` and build a world in
    /// the Menu phase.
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning, storage: Box<dyn Storage>) -> Self {
        let high_score = HighScore::load(storage.as_ref());
        let settings = Settings::load(storage.as_ref());

        let mut state = GameState::new(seed, viewport, tuning);
        state.best_score = high_score.best;

        let mut game = Self {
            state,
            high_score,
            settings,
            storage,
            input: InputState::new(),
            clock: InputClock::default(),
            summary: None,
        };
        game.apply_settings();
        game
    }

    fn apply_settings(&mut self) {
        self.state.particle_limit = self.settings.max_particles();
        self.state.power_ups_enabled = self.settings.power_ups;
        self.state.set_cloud_count(self.settings.cloud_count());
        if self.state.particle_limit == 0 {
            self.state.particles.clear();
        }
    }

    // --- Commands ---

    /// Apply a UI command. Returns true if the phase changed.
    pub fn command(&mut self, command: Command) -> bool {
        let changed = apply_command(&mut self.state, command);
        if changed {
            self.input.release_all();
            self.clock.reset();
            if self.state.phase != GamePhase::GameOver {
                self.summary = None;
            }
        }
        changed
    }

    pub fn start(&mut self) -> bool {
        self.command(Command::Start)
    }

    pub fn restart(&mut self) -> bool {
        self.command(Command::Restart)
    }

    pub fn return_to_menu(&mut self) -> bool {
        self.command(Command::ReturnToMenu)
    }

    // --- Input ---

    /// Keyboard event from the host. Confirm/back keys issue commands.
    pub fn key(&mut self, key: &str, pressed: bool) {
        if let Some(command) = self.input.key(key, pressed, self.state.phase) {
            self.command(command);
        }
    }

    /// On-screen direction button
    pub fn touch(&mut self, action: KeyAction, pressed: bool) {
        self.input.touch(action, pressed);
    }

    /// Current held direction
    pub fn held_input(&self) -> TickInput {
        self.input.tick_input()
    }

    /// Set the held direction directly (autopilot, tests)
    pub fn set_input(&mut self, left: bool, right: bool) {
        self.input.release_all();
        self.input.key("ArrowLeft", left, self.state.phase);
        self.input.key("ArrowRight", right, self.state.phase);
    }

    /// One input-clock step: horizontal movement and wrap
    pub fn input_step(&mut self) {
        let input = self.input.tick_input();
        apply_input(&mut self.state, &input);
    }

    // --- Frame ---

    /// One display frame of simulation, then handle what it produced
    pub fn update(&mut self) {
        tick(&mut self.state);

        for event in self.state.drain_events() {
            if let GameEvent::GameOver { score, new_best } = event {
                self.high_score.submit(score, self.storage.as_mut());
                self.input.release_all();
                self.summary = Some(RunSummary {
                    score,
                    coins: self.state.coin_count,
                    best: self.high_score.best,
                    new_best,
                });
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        renderer::draw(&self.state, surface);
    }

    /// Drive both clocks from `dt` seconds of wall time, then draw. Returns
    /// the number of input steps run.
    pub fn advance(&mut self, dt: f32, surface: &mut dyn Surface) -> u32 {
        let steps = self.clock.advance(dt);
        for _ in 0..steps {
            self.input_step();
        }
        self.update();
        self.draw(surface);
        steps
    }

    /// Refit the logical viewport to a new container size
    pub fn resize(&mut self, container_width: f32, container_height: f32) {
        self.state.viewport = Viewport::fit(container_width, container_height);
        log::info!(
            "Viewport {}x{}",
            self.state.viewport.width,
            self.state.viewport.height
        );
    }

    // --- Settings ---

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace, apply and persist settings
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.apply_settings();
        self.settings.save(self.storage.as_mut());
    }

    // --- Read-only HUD values ---

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.display_score()
    }

    pub fn coins(&self) -> u32 {
        self.state.coin_count
    }

    pub fn best(&self) -> u64 {
        self.high_score.best
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    /// Last finished run; cleared when a new run starts or on menu return
    pub fn summary(&self) -> Option<RunSummary> {
        self.summary
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable world access for hosts that script the simulation
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::renderer::DrawList;

    fn new_game(storage: MemoryStorage) -> Game {
        Game::new(3, Viewport::default(), Tuning::default(), Box::new(storage))
    }

    fn fall_off(game: &mut Game) {
        game.state_mut().player.pos.y = 700.0;
        game.state_mut().player.vy = 0.0;
        game.update();
    }

    #[test]
    fn test_loads_best_from_storage() {
        let mut storage = MemoryStorage::new();
        storage.set(HighScore::STORAGE_KEY, "250").unwrap();
        let game = new_game(storage);
        assert_eq!(game.best(), 250);
        assert_eq!(game.state().best_score, 250);
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_game_over_produces_summary() {
        let mut game = new_game(MemoryStorage::new());
        assert!(game.start());
        game.state_mut().score = 42.9;
        game.state_mut().coin_count = 3;
        fall_off(&mut game);

        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(
            game.summary(),
            Some(RunSummary {
                score: 42,
                coins: 3,
                best: 42,
                new_best: true,
            })
        );
        assert_eq!(game.best(), 42);
        assert_eq!(game.storage().get(HighScore::STORAGE_KEY).as_deref(), Some("42"));

        assert!(game.restart());
        assert_eq!(game.summary(), None);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_keys_drive_commands() {
        let mut game = new_game(MemoryStorage::new());
        game.key("Enter", true);
        assert_eq!(game.phase(), GamePhase::Playing);
        game.key("Escape", true);
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_input_step_moves_player() {
        let mut game = new_game(MemoryStorage::new());
        game.start();
        let x = game.state().player.pos.x;
        game.set_input(false, true);
        game.input_step();
        assert_eq!(game.state().player.pos.x, x + 6.0);
        assert_eq!(game.held_input(), TickInput { left: false, right: true });
    }

    #[test]
    fn test_commands_release_held_input() {
        let mut game = new_game(MemoryStorage::new());
        game.set_input(true, false);
        game.start();
        assert_eq!(game.held_input(), TickInput::default());
    }

    #[test]
    fn test_settings_apply_and_persist() {
        let mut game = new_game(MemoryStorage::new());
        let mut settings = Settings::default();
        settings.particles = false;
        settings.clouds = false;
        settings.power_ups = false;
        game.set_settings(settings.clone());

        assert_eq!(game.state().particle_limit, 0);
        assert!(game.state().clouds.is_empty());
        assert!(!game.state().power_ups_enabled);
        assert_eq!(game.settings(), &settings);
    }

    #[test]
    fn test_advance_runs_input_steps_and_draws() {
        let mut game = new_game(MemoryStorage::new());
        game.start();
        let mut list = DrawList::new();
        let steps = game.advance(0.05, &mut list);
        assert_eq!(steps, 3);
        assert!(list.len() > 1);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_resize_caps_viewport() {
        let mut game = new_game(MemoryStorage::new());
        game.resize(1024.0, 300.0);
        assert_eq!(game.viewport(), Viewport::fit(1024.0, 300.0));
        assert_eq!(game.viewport().width, 400.0);
        assert_eq!(game.viewport().height, 300.0);
    }
}
