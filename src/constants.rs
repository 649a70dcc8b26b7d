// Virtual world dimensions in pixels. Gameplay simulates in this coordinate
// space; the renderer scales it onto the terminal cell grid.
pub const SCREEN_WIDTH: i32 = 1100;
pub const SCREEN_HEIGHT: i32 = 600;

pub const TITLE: &str = "Dino Runner";

// Frame timing
pub const FPS: u64 = 30;
pub const FRAME_MS: u64 = 1000 / FPS;

// Initial scroll positions
pub const X_POS_BG: i32 = 0;
pub const Y_POS_BG: i32 = 380;
pub const X_POS_MENU: i32 = 0;
pub const Y_POS_MENU: i32 = 0;
pub const X_POS_CLOUD: i32 = 0;
pub const Y_POS_CLOUD: i32 = 50;

// Scroll tiling. Background and cloud each tile two copies side by side;
// when a copy has fully left the screen the offset snaps back. The two
// reset targets differ on purpose, giving the layers different loop periods.
pub const BG_TILE_WIDTH: i32 = 1100;
pub const CLOUD_TILE_WIDTH: i32 = 550;
pub const BG_RESET_X: i32 = 0;
pub const CLOUD_RESET_X: i32 = 1000;

// Speed ramp
pub const GAME_SPEED: u32 = 20;

// Power-up scheduling (score thresholds and effect duration, in seconds)
pub const POWER_UP_INTERVAL_MIN: u32 = 200;
pub const POWER_UP_INTERVAL_MAX: u32 = 300;
pub const POWER_UP_DURATION_MIN: u64 = 5;
pub const POWER_UP_DURATION_MAX: u64 = 10;
