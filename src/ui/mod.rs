//! Terminal scenes. Rendering is a read-only projection of game state;
//! every mutation happens in the update phase before `Frame` is touched.

pub mod common;
pub mod menu_scene;
pub mod play_scene;

pub use menu_scene::render_menu_scene;
pub use play_scene::render_play_scene;
