//! Power-up pickups: score-threshold scheduling, scrolling, timed effects.

use rand::Rng;

use crate::constants::{
    POWER_UP_DURATION_MAX, POWER_UP_DURATION_MIN, POWER_UP_INTERVAL_MAX, POWER_UP_INTERVAL_MIN,
    SCREEN_WIDTH,
};
use crate::player::{Dino, PowerUpKind};
use crate::rect::WorldRect;
use crate::session::GameSession;

/// Pickup hitbox (world px).
pub const POWER_UP_WIDTH: i32 = 60;
pub const POWER_UP_HEIGHT: i32 = 60;
/// Pickups float at jump height so grabbing one costs a hop.
pub const POWER_UP_Y: i32 = 220;

/// A pickup scrolling toward the dino.
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub x: i32,
    pub y: i32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn rect(&self) -> WorldRect {
        WorldRect::new(self.x, self.y, POWER_UP_WIDTH, POWER_UP_HEIGHT)
    }
}

/// Owns pickup scheduling and collection. The next pickup appears when the
/// score reaches `when_appears`; each spawn pushes the threshold ahead by a
/// random interval.
#[derive(Debug, Clone)]
pub struct PowerUpManager {
    pub power_ups: Vec<PowerUp>,
    pub when_appears: u32,
}

impl PowerUpManager {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            power_ups: Vec::new(),
            when_appears: rng.gen_range(POWER_UP_INTERVAL_MIN..=POWER_UP_INTERVAL_MAX),
        }
    }

    /// Clear the field and re-roll the first threshold for a new run.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.power_ups.clear();
        self.when_appears = rng.gen_range(POWER_UP_INTERVAL_MIN..=POWER_UP_INTERVAL_MAX);
    }

    /// Advance one frame: spawn at the threshold, scroll, collect on contact.
    ///
    /// Collecting grants the dino the pickup's kind until a random number of
    /// seconds from now on the session clock. Returns the granted kind.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        session: &GameSession,
        dino: &mut Dino,
    ) -> Option<PowerUpKind> {
        if self.power_ups.is_empty() && session.score >= self.when_appears {
            self.spawn(rng);
            self.when_appears =
                session.score + rng.gen_range(POWER_UP_INTERVAL_MIN..=POWER_UP_INTERVAL_MAX);
        }

        for power_up in &mut self.power_ups {
            power_up.x -= session.game_speed as i32;
        }
        self.power_ups.retain(|p| p.x + POWER_UP_WIDTH > 0);

        let dino_rect = dino.rect();
        let hit = self
            .power_ups
            .iter()
            .position(|p| p.rect().intersects(&dino_rect))?;

        let collected = self.power_ups.remove(hit);
        let duration_s = rng.gen_range(POWER_UP_DURATION_MIN..=POWER_UP_DURATION_MAX);
        dino.grant_power_up(collected.kind, session.clock_ms + duration_s * 1000);
        Some(collected.kind)
    }

    fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let kind = if rng.gen::<bool>() {
            PowerUpKind::Shield
        } else {
            PowerUpKind::Hammer
        };
        self.power_ups.push(PowerUp {
            x: SCREEN_WIDTH,
            y: POWER_UP_Y,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(21)
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::new();
        session.running = true;
        session.start_run();
        session
    }

    #[test]
    fn test_initial_threshold_in_interval() {
        let manager = PowerUpManager::new(&mut rng());
        assert!(manager.when_appears >= POWER_UP_INTERVAL_MIN);
        assert!(manager.when_appears <= POWER_UP_INTERVAL_MAX);
    }

    #[test]
    fn test_no_spawn_below_threshold() {
        let mut manager = PowerUpManager::new(&mut rng());
        let mut session = playing_session();
        let mut dino = Dino::new();
        session.score = manager.when_appears - 1;

        manager.update(&mut rng(), &session, &mut dino);
        assert!(manager.power_ups.is_empty());
    }

    #[test]
    fn test_spawn_at_threshold_and_reschedule() {
        let mut manager = PowerUpManager::new(&mut rng());
        let mut session = playing_session();
        let mut dino = Dino::new();
        session.score = manager.when_appears;

        manager.update(&mut rng(), &session, &mut dino);
        assert_eq!(manager.power_ups.len(), 1);
        assert!(manager.when_appears >= session.score + POWER_UP_INTERVAL_MIN);
        assert!(manager.when_appears <= session.score + POWER_UP_INTERVAL_MAX);
    }

    #[test]
    fn test_only_one_pickup_in_flight() {
        let mut manager = PowerUpManager::new(&mut rng());
        let mut session = playing_session();
        let mut dino = Dino::new();
        session.score = manager.when_appears;
        session.game_speed = 0;

        let mut r = rng();
        manager.update(&mut r, &session, &mut dino);
        session.score = manager.when_appears;
        manager.update(&mut r, &session, &mut dino);
        assert_eq!(manager.power_ups.len(), 1);
    }

    #[test]
    fn test_pickups_scroll_and_expire_offscreen() {
        let mut manager = PowerUpManager::new(&mut rng());
        let mut session = playing_session();
        session.game_speed = 30;
        let mut dino = Dino::new();
        manager.power_ups.push(PowerUp {
            x: 600,
            y: POWER_UP_Y,
            kind: PowerUpKind::Shield,
        });

        manager.update(&mut rng(), &session, &mut dino);
        assert_eq!(manager.power_ups[0].x, 570);

        manager.power_ups[0].x = -POWER_UP_WIDTH;
        manager.update(&mut rng(), &session, &mut dino);
        assert!(manager.power_ups.is_empty());
    }

    #[test]
    fn test_collection_grants_timed_effect() {
        let mut manager = PowerUpManager::new(&mut rng());
        let mut session = playing_session();
        session.clock_ms = 12_000;
        let mut dino = Dino::new();
        // Jumping dino at pickup height, pickup arriving onto it
        dino.y = POWER_UP_Y as f64;
        manager.power_ups.push(PowerUp {
            x: crate::player::X_POS + session.game_speed as i32,
            y: POWER_UP_Y,
            kind: PowerUpKind::Shield,
        });

        let granted = manager.update(&mut rng(), &session, &mut dino);
        assert_eq!(granted, Some(PowerUpKind::Shield));
        assert!(dino.has_power_up);
        assert_eq!(dino.kind, PowerUpKind::Shield);
        assert!(manager.power_ups.is_empty(), "pickup is consumed");

        let remaining = dino.power_up_remaining_ms(session.clock_ms) as u64;
        assert!(remaining >= POWER_UP_DURATION_MIN * 1000);
        assert!(remaining <= POWER_UP_DURATION_MAX * 1000);
    }

    #[test]
    fn test_grounded_dino_misses_floating_pickup() {
        let mut manager = PowerUpManager::new(&mut rng());
        let mut session = playing_session();
        let mut dino = Dino::new();
        manager.power_ups.push(PowerUp {
            x: crate::player::X_POS + session.game_speed as i32,
            y: POWER_UP_Y,
            kind: PowerUpKind::Hammer,
        });

        let granted = manager.update(&mut rng(), &session, &mut dino);
        assert_eq!(granted, None);
        assert!(!dino.has_power_up);
    }

    #[test]
    fn test_reset_clears_and_rerolls() {
        let mut manager = PowerUpManager::new(&mut rng());
        manager.power_ups.push(PowerUp {
            x: 500,
            y: POWER_UP_Y,
            kind: PowerUpKind::Shield,
        });

        manager.reset(&mut rng());
        assert!(manager.power_ups.is_empty());
        assert!(manager.when_appears >= POWER_UP_INTERVAL_MIN);
        assert!(manager.when_appears <= POWER_UP_INTERVAL_MAX);
    }

    #[test]
    fn test_spawn_kind_variety() {
        let mut rng = rng();
        let mut seen = [false, false];
        for _ in 0..40 {
            let mut manager = PowerUpManager::new(&mut rng);
            manager.spawn(&mut rng);
            match manager.power_ups[0].kind {
                PowerUpKind::Shield => seen[0] = true,
                PowerUpKind::Hammer => seen[1] = true,
                PowerUpKind::Neutral => unreachable!("pickups are never neutral"),
            }
        }
        assert!(seen[0] && seen[1]);
    }
}
