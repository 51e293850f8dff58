//! Viewer for recorded experiment results: scheduler runtimes over a
//! processor/task grid and the outcome of ten genetic-algorithm runs.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
