//! Game session state: menu/play flags, score, speed ramp, scroll offsets,
//! the session clock, and the record kept across replays.

use crate::constants::{
    BG_RESET_X, BG_TILE_WIDTH, CLOUD_RESET_X, CLOUD_TILE_WIDTH, FRAME_MS, GAME_SPEED, X_POS_BG,
    X_POS_CLOUD, X_POS_MENU, Y_POS_BG, Y_POS_CLOUD, Y_POS_MENU,
};
use crate::player::Dino;

/// State owned by the loop driver for the lifetime of the process.
///
/// `score` and `game_speed` reset at the start of every run; `record` and
/// `death_count` persist across runs (in memory only, gone on exit).
#[derive(Debug, Clone)]
pub struct GameSession {
    /// True while the play loop is active; false shows the menu.
    pub playing: bool,
    /// False terminates the outer loop unconditionally.
    pub running: bool,

    pub game_speed: u32,
    pub score: u32,
    /// Highest score reached this process lifetime.
    pub record: u32,
    /// Total deaths this process lifetime. Incremented by the obstacle
    /// manager when a run ends in a collision.
    pub death_count: u32,

    // Parallax scroll offsets (world px)
    pub x_pos_bg: i32,
    pub y_pos_bg: i32,
    pub x_pos_menu: i32,
    pub y_pos_menu: i32,
    pub x_pos_cloud: i32,
    pub y_pos_cloud: i32,

    /// Session clock in milliseconds, advanced one frame interval per update
    /// tick. Power-up expiry is measured against this clock.
    pub clock_ms: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            playing: false,
            running: false,
            game_speed: GAME_SPEED,
            score: 0,
            record: 0,
            death_count: 0,
            x_pos_bg: X_POS_BG,
            y_pos_bg: Y_POS_BG,
            x_pos_menu: X_POS_MENU,
            y_pos_menu: Y_POS_MENU,
            x_pos_cloud: X_POS_CLOUD,
            y_pos_cloud: Y_POS_CLOUD,
            clock_ms: 0,
        }
    }

    /// Per-run reset. Record, death count and the clock carry over.
    pub fn start_run(&mut self) {
        self.playing = true;
        self.game_speed = GAME_SPEED;
        self.score = 0;
    }

    /// One score point per update tick, with a speed bump every 100 points.
    ///
    /// The three bands are intentionally literal: strict comparisons with a
    /// shared boundary, so a score of exactly 500 matches no band and 1000
    /// onward always takes the +5 band.
    pub fn update_score(&mut self) {
        self.score += 1;
        if self.score % 100 == 0 {
            if self.score < 500 {
                self.game_speed += 2;
            }
            if self.score > 500 && self.score < 1000 {
                self.game_speed += 3;
            }
            if self.score >= 1000 {
                self.game_speed += 5;
            }
        }
    }

    /// Advance the session clock by one frame interval.
    pub fn advance_clock(&mut self) {
        self.clock_ms += FRAME_MS;
    }

    /// Scroll the background tiles left. Once the left copy has fully left
    /// the screen the offset snaps back to the start.
    pub fn scroll_background(&mut self) {
        if self.x_pos_bg <= -BG_TILE_WIDTH {
            self.x_pos_bg = BG_RESET_X;
        }
        self.x_pos_bg -= self.game_speed as i32;
    }

    /// Scroll the cloud layer left. Resets to a different offset than the
    /// background, so the two layers loop out of phase.
    pub fn scroll_cloud(&mut self) {
        if self.x_pos_cloud <= -CLOUD_TILE_WIDTH {
            self.x_pos_cloud = CLOUD_RESET_X;
        }
        self.x_pos_cloud -= self.game_speed as i32;
    }

    /// Expire the dino's power-up once its time has passed. Runs in the
    /// update phase so drawing stays read-only.
    pub fn tick_power_up(&self, dino: &mut Dino) {
        if dino.has_power_up && dino.power_up_remaining_ms(self.clock_ms) < 0 {
            dino.clear_power_up();
        }
    }

    /// Remaining power-up seconds for display, rounded to 2 decimals.
    /// `None` when no power-up is active.
    pub fn power_up_remaining(&self, dino: &Dino) -> Option<f64> {
        if !dino.has_power_up {
            return None;
        }
        let remaining_ms = dino.power_up_remaining_ms(self.clock_ms);
        Some((remaining_ms as f64 / 10.0).round() / 100.0)
    }

    /// Fold the last score into the record. Called when the post-death menu
    /// is entered, before the record line is drawn.
    pub fn sync_record(&mut self) {
        if self.score > self.record {
            self.record = self.score;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PowerUpKind;

    /// Drive `update_score` until the score reaches `target`.
    fn score_up_to(session: &mut GameSession, target: u32) {
        while session.score < target {
            session.update_score();
        }
    }

    #[test]
    fn test_score_increments_once_per_tick() {
        let mut session = GameSession::new();
        session.start_run();
        for expected in 1..=250 {
            session.update_score();
            assert_eq!(session.score, expected);
        }
    }

    #[test]
    fn test_speed_bump_only_on_century() {
        let mut session = GameSession::new();
        session.start_run();

        score_up_to(&mut session, 99);
        assert_eq!(session.game_speed, GAME_SPEED);

        session.update_score(); // 99 -> 100
        assert_eq!(session.game_speed, GAME_SPEED + 2);

        session.update_score(); // 100 -> 101
        assert_eq!(session.game_speed, GAME_SPEED + 2);
    }

    #[test]
    fn test_no_band_matches_at_exactly_500() {
        let mut session = GameSession::new();
        session.start_run();

        // Centuries 100..400 give +2 each
        score_up_to(&mut session, 499);
        assert_eq!(session.game_speed, GAME_SPEED + 8);

        // 500 falls in the gap: not < 500, not > 500, not >= 1000
        session.update_score();
        assert_eq!(session.score, 500);
        assert_eq!(session.game_speed, GAME_SPEED + 8);
    }

    #[test]
    fn test_speed_after_exactly_1000() {
        let mut session = GameSession::new();
        session.start_run();
        score_up_to(&mut session, 1000);

        // +2 at 100..400, nothing at 500, +3 at 600..900, +5 at 1000
        assert_eq!(session.game_speed, GAME_SPEED + 8 + 12 + 5);
    }

    #[test]
    fn test_late_centuries_take_plus_five() {
        let mut session = GameSession::new();
        session.start_run();
        score_up_to(&mut session, 1000);
        let at_1000 = session.game_speed;

        score_up_to(&mut session, 1100);
        assert_eq!(session.game_speed, at_1000 + 5);
    }

    #[test]
    fn test_start_run_resets_score_and_speed_only() {
        let mut session = GameSession::new();
        session.start_run();
        score_up_to(&mut session, 300);
        session.record = 250;
        session.death_count = 3;
        session.playing = false;

        session.start_run();
        assert!(session.playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.game_speed, GAME_SPEED);
        assert_eq!(session.record, 250);
        assert_eq!(session.death_count, 3);
    }

    #[test]
    fn test_background_scroll_resets_to_zero() {
        let mut session = GameSession::new();
        session.start_run();
        session.x_pos_bg = -BG_TILE_WIDTH;

        session.scroll_background();
        // Reset fires first, then the frame's scroll applies
        assert_eq!(session.x_pos_bg, BG_RESET_X - GAME_SPEED as i32);
    }

    #[test]
    fn test_background_scroll_no_reset_above_threshold() {
        let mut session = GameSession::new();
        session.start_run();
        session.x_pos_bg = -BG_TILE_WIDTH + 1;

        session.scroll_background();
        assert_eq!(session.x_pos_bg, -BG_TILE_WIDTH + 1 - GAME_SPEED as i32);
    }

    #[test]
    fn test_cloud_scroll_resets_to_its_own_offset() {
        let mut session = GameSession::new();
        session.start_run();
        session.x_pos_cloud = -CLOUD_TILE_WIDTH;

        session.scroll_cloud();
        assert_eq!(session.x_pos_cloud, CLOUD_RESET_X - GAME_SPEED as i32);
        assert_ne!(BG_RESET_X, CLOUD_RESET_X, "layer reset targets must differ");
    }

    #[test]
    fn test_scroll_speed_follows_game_speed() {
        let mut session = GameSession::new();
        session.start_run();
        session.game_speed = 35;

        session.scroll_background();
        session.scroll_cloud();
        assert_eq!(session.x_pos_bg, X_POS_BG - 35);
        assert_eq!(session.x_pos_cloud, X_POS_CLOUD - 35);
    }

    #[test]
    fn test_power_up_expires_one_ms_late() {
        let mut session = GameSession::new();
        let mut dino = Dino::new();
        session.clock_ms = 10_000;
        dino.grant_power_up(PowerUpKind::Shield, session.clock_ms);

        // Still active at the exact expiry instant
        session.tick_power_up(&mut dino);
        assert!(dino.has_power_up);

        session.clock_ms += 1;
        session.tick_power_up(&mut dino);
        assert!(!dino.has_power_up);
        assert_eq!(dino.kind, PowerUpKind::Neutral);
    }

    #[test]
    fn test_power_up_remaining_rounds_to_centiseconds() {
        let mut session = GameSession::new();
        let mut dino = Dino::new();
        session.clock_ms = 0;
        dino.grant_power_up(PowerUpKind::Hammer, 4567);

        let remaining = session.power_up_remaining(&dino).unwrap();
        assert!((remaining - 4.57).abs() < 1e-9);

        dino.clear_power_up();
        assert!(session.power_up_remaining(&dino).is_none());
    }

    #[test]
    fn test_sync_record_takes_max() {
        let mut session = GameSession::new();
        session.record = 500;
        session.score = 750;
        session.sync_record();
        assert_eq!(session.record, 750);

        session.score = 600;
        session.sync_record();
        assert_eq!(session.record, 750);
    }

    #[test]
    fn test_clock_advances_by_frame_interval() {
        let mut session = GameSession::new();
        session.advance_clock();
        session.advance_clock();
        assert_eq!(session.clock_ms, 2 * FRAME_MS);
    }
}
