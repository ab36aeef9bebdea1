//! mtlhud - menu-style controller for the macOS Metal performance HUD
//!
//! The Metal runtime renders a built-in performance overlay when a small
//! set of `MTL_HUD_*` environment variables is present in the user
//! session. mtlhud persists the user's overlay preferences and pushes
//! them into the session via `launchctl`, either from the control panel
//! or from headless CLI subcommands.

pub mod gui;
pub mod hud;
pub mod login;
pub mod settings;
