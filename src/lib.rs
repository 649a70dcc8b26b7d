//! Dino Runner - Terminal Endless Runner Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod input;
pub mod obstacles;
pub mod player;
pub mod power_ups;
pub mod rect;
pub mod session;

// UI module is not exposed as it's tightly coupled to the terminal
#[allow(unused_imports)]
mod ui;
