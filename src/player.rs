//! The dinosaur: run/jump/duck physics, animation state, power-up fields.

use crate::input::FrameInput;
use crate::rect::WorldRect;

/// Fixed horizontal position of the dino (left edge, world px).
pub const X_POS: i32 = 80;
/// Vertical position (top edge) while running or jumping from the ground.
pub const Y_POS: i32 = 310;
/// Vertical position while ducking (lower, flatter pose).
pub const Y_POS_DUCK: i32 = 340;
/// Initial upward velocity of a jump, in world px per frame (applied x4).
pub const JUMP_VEL: f64 = 8.5;
/// Gravity: jump velocity decay per frame.
pub const GRAVITY: f64 = 0.8;

/// Standing hitbox.
pub const DINO_WIDTH: i32 = 88;
pub const DINO_HEIGHT: i32 = 94;
/// Ducking hitbox (wider, much lower).
pub const DUCK_WIDTH: i32 = 110;
pub const DUCK_HEIGHT: i32 = 60;

/// Frames per run-animation step (two-pose gallop).
pub const RUN_ANIM_FRAMES: u32 = 2;
const ANIM_TICKS_PER_FRAME: u64 = 5;

/// Kind of power-up effect carried by the dino. `Neutral` is the default
/// (no effect) kind the dino resets to on expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerUpKind {
    #[default]
    Neutral,
    Shield,
    Hammer,
}

impl PowerUpKind {
    /// Display label for the countdown banner.
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Neutral => "Neutral",
            PowerUpKind::Shield => "Shield",
            PowerUpKind::Hammer => "Hammer",
        }
    }
}

/// Movement state of the dino.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DinoState {
    Running,
    Jumping,
    Ducking,
}

/// Player entity. Owned by the loop driver, updated once per frame with the
/// frame's input snapshot, drawn read-only by the play scene.
#[derive(Debug, Clone)]
pub struct Dino {
    pub state: DinoState,
    /// Top edge of the hitbox (world px, float for the jump arc).
    pub y: f64,
    /// Current jump velocity; positive while ascending.
    pub jump_vel: f64,
    /// Run animation frame (0 or 1).
    pub run_anim_frame: u32,
    tick_count: u64,

    // Power-up effect granted by the power-up manager, cleared by the
    // session's expiry tick.
    pub has_power_up: bool,
    /// Absolute expiry time on the session clock, in milliseconds.
    pub power_up_time: u64,
    pub kind: PowerUpKind,
}

impl Dino {
    pub fn new() -> Self {
        Self {
            state: DinoState::Running,
            y: Y_POS as f64,
            jump_vel: JUMP_VEL,
            run_anim_frame: 0,
            tick_count: 0,
            has_power_up: false,
            power_up_time: 0,
            kind: PowerUpKind::Neutral,
        }
    }

    /// Back to the starting pose for a new run. Power-up state is cleared:
    /// effects never carry across runs.
    pub fn reset(&mut self) {
        *self = Dino::new();
    }

    pub fn is_on_ground(&self) -> bool {
        !matches!(self.state, DinoState::Jumping)
    }

    /// Advance one frame: consume input, step the jump arc, advance the
    /// gallop animation.
    ///
    /// Duck is a toggle (terminals report key presses, not releases): the
    /// first press drops into the duck pose, the next stands back up.
    pub fn update(&mut self, input: &FrameInput) {
        self.tick_count += 1;

        match self.state {
            DinoState::Jumping => self.step_jump(),
            DinoState::Running | DinoState::Ducking => {
                if input.jump {
                    self.state = DinoState::Jumping;
                    self.y = Y_POS as f64;
                    self.jump_vel = JUMP_VEL;
                } else if input.duck {
                    if self.state == DinoState::Ducking {
                        self.state = DinoState::Running;
                        self.y = Y_POS as f64;
                    } else {
                        self.state = DinoState::Ducking;
                        self.y = Y_POS_DUCK as f64;
                    }
                }
            }
        }

        if self.is_on_ground() && self.tick_count.is_multiple_of(ANIM_TICKS_PER_FRAME) {
            self.run_anim_frame = (self.run_anim_frame + 1) % RUN_ANIM_FRAMES;
        }
    }

    fn step_jump(&mut self) {
        self.y -= self.jump_vel * 4.0;
        self.jump_vel -= GRAVITY;
        if self.jump_vel < -JUMP_VEL {
            // Landed: clamp back to the ground pose
            self.state = DinoState::Running;
            self.y = Y_POS as f64;
            self.jump_vel = JUMP_VEL;
        }
    }

    /// Current hitbox. Ducking swaps to the wider, lower box.
    pub fn rect(&self) -> WorldRect {
        match self.state {
            DinoState::Ducking => WorldRect::new(X_POS, self.y as i32, DUCK_WIDTH, DUCK_HEIGHT),
            _ => WorldRect::new(X_POS, self.y as i32, DINO_WIDTH, DINO_HEIGHT),
        }
    }

    /// Grant a power-up effect until `expires_at_ms` on the session clock.
    pub fn grant_power_up(&mut self, kind: PowerUpKind, expires_at_ms: u64) {
        self.has_power_up = true;
        self.kind = kind;
        self.power_up_time = expires_at_ms;
    }

    /// Drop the active effect and fall back to the neutral kind.
    pub fn clear_power_up(&mut self) {
        self.has_power_up = false;
        self.kind = PowerUpKind::Neutral;
    }

    /// Remaining effect time in milliseconds at `now_ms`; negative once
    /// expired. Only meaningful while `has_power_up` is set.
    pub fn power_up_remaining_ms(&self, now_ms: u64) -> i64 {
        self.power_up_time as i64 - now_ms as i64
    }
}

impl Default for Dino {
    fn default() -> Self {
        Self::new()
    }
}

/// Frames it takes a fresh jump to return to the ground.
///
/// The arc runs while `jump_vel >= -JUMP_VEL`, decaying by `GRAVITY` each
/// frame. Exposed for tests.
pub fn jump_duration_frames() -> u64 {
    ((2.0 * JUMP_VEL / GRAVITY) as u64) + 2
}
