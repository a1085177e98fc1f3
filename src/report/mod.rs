//! Report generation module.

pub mod badge;
pub mod generator;

pub use badge::{Badge, BadgeFormat, BadgeStyle};
pub use generator::*;
