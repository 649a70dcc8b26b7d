//! Obstacles: cactus and bird spawning, scrolling, collision resolution.

use rand::Rng;

use crate::constants::SCREEN_WIDTH;
use crate::player::{Dino, PowerUpKind};
use crate::rect::WorldRect;
use crate::session::GameSession;

/// Kinds of obstacle on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    SmallCactus,
    LargeCactus,
    Bird,
}

impl ObstacleKind {
    pub fn width(&self) -> i32 {
        match self {
            ObstacleKind::SmallCactus => 48,
            ObstacleKind::LargeCactus => 60,
            ObstacleKind::Bird => 90,
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            ObstacleKind::SmallCactus => 70,
            ObstacleKind::LargeCactus => 95,
            ObstacleKind::Bird => 60,
        }
    }
}

/// Bird flight altitudes (top edge, world px). The high bird clears a
/// ducking dino; the low one must be jumped.
pub const BIRD_Y_HIGH: i32 = 260;
pub const BIRD_Y_LOW: i32 = 320;

/// Cactus top edges; both bottoms sit on the track line.
pub const SMALL_CACTUS_Y: i32 = 334;
pub const LARGE_CACTUS_Y: i32 = 309;

/// A single obstacle scrolling toward the dino.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn rect(&self) -> WorldRect {
        WorldRect::new(self.x, self.y, self.kind.width(), self.kind.height())
    }
}

/// How a frame's collision check resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Shield absorbed the hit; the obstacle stays on the track.
    ShieldBlocked,
    /// Hammer destroyed the obstacle.
    Smashed,
    /// No protection: the run is over.
    Fatal,
}

/// Owns the obstacle field. One obstacle is in flight at a time; a new one
/// spawns at the right edge whenever the field empties.
#[derive(Debug, Clone, Default)]
pub struct ObstacleManager {
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the track for a new run.
    pub fn reset(&mut self) {
        self.obstacles.clear();
    }

    /// Spawn a random obstacle just past the right edge.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let kind = match rng.gen_range(0..3) {
            0 => ObstacleKind::SmallCactus,
            1 => ObstacleKind::LargeCactus,
            _ => ObstacleKind::Bird,
        };
        let y = match kind {
            ObstacleKind::SmallCactus => SMALL_CACTUS_Y,
            ObstacleKind::LargeCactus => LARGE_CACTUS_Y,
            ObstacleKind::Bird => {
                if rng.gen::<bool>() {
                    BIRD_Y_HIGH
                } else {
                    BIRD_Y_LOW
                }
            }
        };
        self.obstacles.push(Obstacle {
            x: SCREEN_WIDTH,
            y,
            kind,
        });
    }

    /// Advance one frame: spawn if the track is empty, scroll left by the
    /// session speed, drop off-screen obstacles, resolve collisions.
    ///
    /// A fatal collision ends the run (`playing = false`) and counts the
    /// death; the score stays frozen for the menu's record comparison.
    pub fn update<R: Rng>(
        &mut self,
        rng: &mut R,
        session: &mut GameSession,
        dino: &mut Dino,
    ) -> Option<CollisionOutcome> {
        if self.obstacles.is_empty() {
            self.spawn(rng);
        }

        for obstacle in &mut self.obstacles {
            obstacle.x -= session.game_speed as i32;
        }
        self.obstacles.retain(|o| o.x + o.kind.width() > 0);

        let dino_rect = dino.rect();
        let hit = self
            .obstacles
            .iter()
            .position(|o| o.rect().intersects(&dino_rect))?;

        match dino.kind {
            PowerUpKind::Shield => Some(CollisionOutcome::ShieldBlocked),
            PowerUpKind::Hammer => {
                self.obstacles.remove(hit);
                Some(CollisionOutcome::Smashed)
            }
            PowerUpKind::Neutral => {
                session.playing = false;
                session.death_count += 1;
                Some(CollisionOutcome::Fatal)
            }
        }
    }
}
