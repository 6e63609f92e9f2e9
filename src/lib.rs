// src/lib.rs

pub mod core;
pub mod links;
pub mod persistence;
pub mod recent;
pub mod service;

pub use crate::core::engine::{CardSearch, ResolverEngine};
pub use crate::core::types::{CardType, TranslationResult};
