// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! User-facing failures are handled where they are detected (the workout
//! factory or the startup geolocation request) and surfaced through the
//! [`crate::ui::Notifier`]; nothing here crosses the controller boundary.

/// Raw form values failed validation.
///
/// Raised by the workout factory when any of distance, duration, or the
/// kind-specific extra value is non-finite or not strictly positive. Empty
/// form fields read as zero and are rejected on the same grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("inputs have to be positive, finite numbers")]
pub struct InvalidInputError;

/// The device position could not be acquired at startup.
#[derive(Debug, thiserror::Error)]
pub enum GeolocationError {
    #[error("position permission denied")]
    Denied,

    #[error("position unavailable: {0}")]
    Unavailable(#[from] anyhow::Error),
}
