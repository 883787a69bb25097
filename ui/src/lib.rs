#![warn(clippy::all, rust_2018_idioms)]
//! egui front end for the roster user table.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::RosterApp;
