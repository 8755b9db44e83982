//! Fazendinha do Saber
//!
//! A small farm that grows as a student completes learning missions. Player
//! data (profile, points, challenges, class ranking) lives in a remote
//! gamification service; coins, collectibles and the daily reward live in a
//! local key-value store.
//!
//! ## Mission completion
//!
//! Completing a mission is optimistic: the mission is marked done and its XP
//! is added locally before the service confirms it. If confirmation fails the
//! dashboard returns to exactly the state it had before. See
//! [`dashboard::completion`].

pub mod api;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod farm;
pub mod store;

pub use domain::*;
pub use error::{ApiError, FarmError};
