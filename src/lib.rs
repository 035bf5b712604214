//! Haunt Merge - a horror tile-merge puzzle

pub mod assets;
pub mod core;
pub mod game;
pub mod grid;
pub mod items;
pub mod llm;
pub mod story;
