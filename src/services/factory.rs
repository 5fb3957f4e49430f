// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout construction and input validation.

use chrono::Utc;
use geo_types::Point;

use crate::error::InvalidInputError;
use crate::models::{ActivityDetail, ActivityKind, Workout, WorkoutId};

/// Builds validated workout records and allocates their ids.
///
/// The only internal state is the id allocator, so ids are unique for the
/// lifetime of the factory (one factory per session).
#[derive(Debug, Default)]
pub struct WorkoutFactory {
    last_id: u64,
}

impl WorkoutFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw form values and build the matching workout variant.
    ///
    /// Distance, duration, and the kind-specific extra value are checked
    /// jointly: all three must be finite and strictly positive, otherwise
    /// nothing is built. Empty form fields read as zero and are rejected
    /// here like any other non-positive value.
    pub fn build(
        &mut self,
        kind: ActivityKind,
        coords: Point<f64>,
        raw_distance: f64,
        raw_duration: f64,
        raw_extra: f64,
    ) -> Result<Workout, InvalidInputError> {
        let raw = [raw_distance, raw_duration, raw_extra];
        if !all_finite(&raw) || !all_positive(&raw) {
            return Err(InvalidInputError);
        }

        let detail = match kind {
            ActivityKind::Running => ActivityDetail::Running {
                // Round fractional cadence up so a validated positive input
                // always stores a positive whole step count.
                cadence_spm: raw_extra.ceil() as u32,
            },
            ActivityKind::Cycling => ActivityDetail::Cycling {
                elevation_gain_m: raw_extra,
            },
        };

        self.last_id += 1;
        let id = WorkoutId::new(self.last_id);
        let workout = Workout::new(id, Utc::now(), coords, raw_distance, raw_duration, detail);
        tracing::debug!(%id, kind = ?kind, "Built workout record");

        Ok(workout)
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}
