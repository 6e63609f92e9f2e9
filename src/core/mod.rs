// src/core/mod.rs
pub mod corrector;
pub mod dictionary;
pub mod engine;
pub mod normalizer;
pub mod resolver;
pub mod romanizer;
pub mod types;
