// Library crate: exposes the testable core (config, mapping, scene, session
// orchestration, API client, headless harness). GUI-specific modules
// (app, ui, viewport rendering) remain in the binary crate.

pub mod actions;
pub mod client;
pub mod config;
pub mod fixtures;
pub mod geometry;
pub mod harness;
pub mod scene;
pub mod state;
