pub mod api;
pub mod core;
pub mod graph;
pub mod gui;
pub mod persistence;
