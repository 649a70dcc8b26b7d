//! Input translation: crossterm key events to UI-agnostic actions.
//!
//! Menu mode and playing mode consume the same event stream but react
//! differently. Both hand a transition value back to the loop driver
//! instead of invoking game loops themselves.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Menu-mode transition requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Confirm key: start a new run.
    StartRun,
    /// Close/cancel: terminate the outer loop.
    Quit,
}

/// Playing-mode transition requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayAction {
    /// Cancel key: abandon the run and return to the menu.
    ExitToMenu,
    /// Close key: terminate the whole game.
    Quit,
}

/// Per-frame input snapshot handed to the dino.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
    pub duck: bool,
}

/// The terminal's window-close equivalent: 'q' or Ctrl-C.
fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Menu-mode contract: Enter starts a run, Esc or the quit key exits.
pub fn menu_action(key: &KeyEvent) -> Option<MenuAction> {
    if is_quit_key(key) || key.code == KeyCode::Esc {
        return Some(MenuAction::Quit);
    }
    if key.code == KeyCode::Enter {
        return Some(MenuAction::StartRun);
    }
    None
}

/// Playing-mode contract: quit key terminates, Esc returns to the menu,
/// movement keys fold into the frame's input snapshot.
pub fn apply_play_key(key: &KeyEvent, input: &mut FrameInput) -> Option<PlayAction> {
    if is_quit_key(key) {
        return Some(PlayAction::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(PlayAction::ExitToMenu),
        KeyCode::Up | KeyCode::Char(' ') => {
            input.jump = true;
            None
        }
        KeyCode::Down => {
            input.duck = true;
            None
        }
        _ => None,
    }
}
