// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trailmark: log outdoor workouts on an interactive map.
//!
//! A click on the map opens the entry form; a valid submission becomes a
//! workout record shown both as a map marker and as a list entry. This crate
//! holds the workout domain model and the interaction state machine. The
//! host application owns the platform event loop: it implements the
//! collaborator traits in [`ui`] over its real map, form, list, and alert
//! surfaces, and forwards native events to the matching
//! [`services::SessionController`] handlers.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod ui;

pub use config::Config;
pub use models::{ActivityKind, Workout, WorkoutId};
pub use services::{SessionController, SessionStore, WorkoutFactory};
