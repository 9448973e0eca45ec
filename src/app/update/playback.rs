use super::super::state::{MAX_WPM, MIN_WPM, PERSIST_EVERY_STEPS};
use super::Effect;
use crate::app::state::App;
use crate::store::ReadingMode;
use std::time::Duration;
use tracing::{debug, info};

/// How long each word stays on screen at the given WPM.
pub(in crate::app) fn tick_period(wpm: u32) -> Duration {
    let wpm = wpm.clamp(MIN_WPM, MAX_WPM);
    Duration::from_millis(u64::from(60_000 / wpm))
}

impl App {
    pub(super) fn handle_toggle_play_pause(&mut self, effects: &mut Vec<Effect>) {
        if self.is_running() {
            self.handle_pause(effects);
        } else {
            self.handle_play(effects);
        }
    }

    pub(super) fn handle_play(&mut self, effects: &mut Vec<Effect>) {
        if self.reader.len() == 0 {
            debug!("Ignoring play request without a document");
            return;
        }
        match self.mode {
            ReadingMode::Visual => {
                if self.reader.at_end() {
                    self.reader.set_position_clamped(0);
                }
                self.steps_since_persist = 0;
                self.visual_running = true;
                info!(wpm = self.wpm, "Started visual playback");
            }
            ReadingMode::Speech => {
                self.start_narration(effects);
            }
        }
    }

    pub(super) fn handle_pause(&mut self, effects: &mut Vec<Effect>) {
        if !self.is_running() {
            return;
        }
        info!(position = self.reader.position, "Paused playback");
        self.stop_playback();
        effects.push(Effect::PersistSnapshot);
    }

    /// One visual step. A tick that raced a pause finds `visual_running`
    /// false and does nothing.
    pub(super) fn handle_visual_tick(&mut self, effects: &mut Vec<Effect>) {
        if !self.visual_running || self.mode != ReadingMode::Visual {
            return;
        }
        let len = self.reader.len();
        if len == 0 {
            self.visual_running = false;
            return;
        }
        if self.reader.at_end() {
            self.visual_running = false;
            self.reader.set_position_clamped(0);
            self.steps_since_persist = 0;
            info!("Reached end of document");
            effects.push(Effect::PersistSnapshot);
            return;
        }
        self.reader.position += 1;
        self.steps_since_persist += 1;
        if self.steps_since_persist >= PERSIST_EVERY_STEPS {
            self.steps_since_persist = 0;
            effects.push(Effect::PersistSnapshot);
        }
    }

    pub(super) fn handle_set_mode(&mut self, mode: ReadingMode, effects: &mut Vec<Effect>) {
        if self.mode == mode {
            return;
        }
        if self.is_running() {
            self.stop_playback();
        }
        self.mode = mode;
        info!(mode = %mode, "Switched reading mode");
        effects.push(Effect::PersistSnapshot);
    }

    pub(super) fn handle_set_wpm(&mut self, wpm: u32, effects: &mut Vec<Effect>) {
        self.set_wpm_clamped(wpm);
        debug!(wpm = self.wpm, "Adjusted reading speed");
        effects.push(Effect::PersistSnapshot);
    }

    pub(super) fn handle_step_wpm(&mut self, direction: i32, effects: &mut Vec<Effect>) {
        let step = i64::from(self.config.wpm_step) * i64::from(direction.signum());
        let target = (i64::from(self.wpm) + step).clamp(0, i64::from(MAX_WPM));
        self.handle_set_wpm(target as u32, effects);
    }

    /// Move the cursor by `delta` words. An explicit jump while narration is
    /// active cancels it and leaves playback paused at the new position.
    pub(super) fn handle_jump(&mut self, delta: i64, effects: &mut Vec<Effect>) {
        if self.reader.len() == 0 {
            return;
        }
        if self.speech.is_active() {
            info!("Cancelling narration before jump");
            self.stop_playback();
        }
        self.reader.jump_clamped(delta);
        debug!(position = self.reader.position, "Jumped to new position");
        effects.push(Effect::PersistSnapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(app: &mut App) -> Vec<Effect> {
        let mut effects = Vec::new();
        app.handle_visual_tick(&mut effects);
        effects
    }

    #[test]
    fn tick_period_is_exactly_sixty_thousand_over_wpm() {
        assert_eq!(tick_period(100), Duration::from_millis(600));
        assert_eq!(tick_period(300), Duration::from_millis(200));
        assert_eq!(tick_period(1000), Duration::from_millis(60));
    }

    #[test]
    fn wpm_clamps_and_is_idempotent_at_both_bounds() {
        let mut app = App::test_app("a b c");
        let mut effects = Vec::new();
        app.handle_set_wpm(5000, &mut effects);
        assert_eq!(app.wpm, MAX_WPM);
        app.handle_step_wpm(1, &mut effects);
        assert_eq!(app.wpm, MAX_WPM);
        app.handle_set_wpm(5, &mut effects);
        assert_eq!(app.wpm, MIN_WPM);
        app.handle_step_wpm(-1, &mut effects);
        assert_eq!(app.wpm, MIN_WPM);
    }

    #[test]
    fn step_wpm_moves_by_configured_step() {
        let mut app = App::test_app("a b c");
        let mut effects = Vec::new();
        app.handle_set_wpm(300, &mut effects);
        app.handle_step_wpm(1, &mut effects);
        assert_eq!(app.wpm, 350);
        app.handle_step_wpm(-1, &mut effects);
        assert_eq!(app.wpm, 300);
    }

    #[test]
    fn each_tick_advances_one_word() {
        let mut app = App::test_app("a b c");
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        assert!(app.visual_running);
        assert_eq!(app.reader.position, 0);
        tick(&mut app);
        assert_eq!(app.reader.position, 1);
        tick(&mut app);
        assert_eq!(app.reader.position, 2);
    }

    #[test]
    fn end_of_document_tick_stops_and_rewinds() {
        let mut app = App::test_app("a b");
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        tick(&mut app);
        tick(&mut app);
        assert_eq!(app.reader.position, 2);
        let effects = tick(&mut app);
        assert!(!app.visual_running);
        assert_eq!(app.reader.position, 0);
        assert!(matches!(effects.as_slice(), [Effect::PersistSnapshot]));
        // Further ticks are no-ops once stopped.
        assert!(tick(&mut app).is_empty());
        assert_eq!(app.reader.position, 0);
    }

    #[test]
    fn play_from_the_end_rewinds_first() {
        let mut app = App::test_app("a b");
        app.reader.position = 2;
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        assert_eq!(app.reader.position, 0);
        assert!(app.visual_running);
    }

    #[test]
    fn persists_every_tenth_advancing_tick() {
        let mut app = App::test_app(
            "w w w w w w w w w w w w w w w w w w w w w w w w w",
        );
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        let mut persist_count = 0;
        for _ in 0..20 {
            persist_count += tick(&mut app)
                .iter()
                .filter(|e| matches!(e, Effect::PersistSnapshot))
                .count();
        }
        assert_eq!(persist_count, 2);
    }

    #[test]
    fn toggle_pauses_a_running_session() {
        let mut app = App::test_app("a b c");
        let mut effects = Vec::new();
        app.handle_toggle_play_pause(&mut effects);
        assert!(app.visual_running);
        app.handle_toggle_play_pause(&mut effects);
        assert!(!app.visual_running);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut app = App::test_app("a b c");
        let mut effects = Vec::new();
        app.handle_pause(&mut effects);
        assert!(effects.is_empty());
    }

    #[test]
    fn mode_switch_always_stops_playback() {
        let mut app = App::test_app("a b c");
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        assert!(app.visual_running);
        app.handle_set_mode(ReadingMode::Speech, &mut effects);
        assert!(!app.visual_running);
        assert_eq!(app.mode, ReadingMode::Speech);
    }

    #[test]
    fn jump_clamps_at_both_bounds() {
        let mut app = App::test_app("a b c d e");
        let mut effects = Vec::new();
        app.handle_jump(-3, &mut effects);
        assert_eq!(app.reader.position, 0);
        app.handle_jump(100, &mut effects);
        assert_eq!(app.reader.position, 4);
        app.handle_jump(-1, &mut effects);
        assert_eq!(app.reader.position, 3);
    }

    #[test]
    fn jump_keeps_visual_playback_running() {
        let mut app = App::test_app("a b c d e");
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        app.handle_jump(2, &mut effects);
        assert!(app.visual_running);
        assert_eq!(app.reader.position, 2);
    }

    #[test]
    fn play_without_a_document_is_a_no_op() {
        let mut app = App::test_app("");
        let mut effects = Vec::new();
        app.handle_play(&mut effects);
        assert!(!app.visual_running);
        assert!(effects.is_empty());
    }
}
