// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model.

use std::fmt;

use chrono::{DateTime, Utc};
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::time_utils;

/// Identifier for a logged workout, unique within one session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WorkoutId(u64);

impl WorkoutId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two supported activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Running,
    Cycling,
}

impl ActivityKind {
    /// Display name used in workout labels.
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
        }
    }

    /// Emoji shown in markers and list rows.
    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Running => "🏃‍♂️",
            ActivityKind::Cycling => "🚴",
        }
    }

    /// CSS class applied to the marker popup for this kind.
    pub fn popup_class(self) -> &'static str {
        match self {
            ActivityKind::Running => "running-popup",
            ActivityKind::Cycling => "cycling-popup",
        }
    }
}

/// Kind-specific detail carried by a workout.
///
/// Cadence is a positive step count; elevation gain is non-negative (a flat
/// ride is legal at the model level, input validation is the factory's job).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivityDetail {
    Running { cadence_spm: u32 },
    Cycling { elevation_gain_m: f64 },
}

impl ActivityDetail {
    pub fn kind(self) -> ActivityKind {
        match self {
            ActivityDetail::Running { .. } => ActivityKind::Running,
            ActivityDetail::Cycling { .. } => ActivityKind::Cycling,
        }
    }
}

/// One logged workout. Immutable after construction.
///
/// Construction goes through [`crate::services::WorkoutFactory`], which
/// validates the raw input; the record itself only derives its display
/// label and metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Point<f64>,
    distance_km: f64,
    duration_min: f64,
    detail: ActivityDetail,
    /// Display label, computed once at construction
    label: String,
}

impl Workout {
    /// Assemble a record from pre-validated fields.
    pub(crate) fn new(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Point<f64>,
        distance_km: f64,
        duration_min: f64,
        detail: ActivityDetail,
    ) -> Self {
        let label = format!(
            "{} on {}",
            detail.kind().name(),
            time_utils::day_month_label(created_at)
        );

        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            detail,
            label,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Where the workout was logged, `x` = longitude, `y` = latitude.
    pub fn coords(&self) -> Point<f64> {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn detail(&self) -> ActivityDetail {
        self.detail
    }

    pub fn kind(&self) -> ActivityKind {
        self.detail.kind()
    }

    /// Display label, e.g. `"Running on 7/August"`. Cached at construction;
    /// repeated calls return the identical string.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> &'static str {
        self.kind().icon()
    }

    /// Derived metric: pace in min/km for runs, speed in km/h for rides.
    /// A pure function of the stored distance and duration.
    pub fn metric(&self) -> f64 {
        match self.detail {
            ActivityDetail::Running { .. } => self.duration_min / self.distance_km,
            ActivityDetail::Cycling { .. } => self.distance_km / (self.duration_min / 60.0),
        }
    }

    /// Display unit of [`Workout::metric`].
    pub fn metric_unit(&self) -> &'static str {
        match self.detail {
            ActivityDetail::Running { .. } => "min/km",
            ActivityDetail::Cycling { .. } => "km/h",
        }
    }

    /// Kind-specific extra value with its display unit: cadence in `spm`
    /// for runs, elevation gain in `m` for rides.
    pub fn extra(&self) -> (f64, &'static str) {
        match self.detail {
            ActivityDetail::Running { cadence_spm } => (f64::from(cadence_spm), "spm"),
            ActivityDetail::Cycling { elevation_gain_m } => (elevation_gain_m, "m"),
        }
    }

    /// Marker popup content: the kind icon followed by the label.
    pub fn popup_text(&self) -> String {
        format!("{} {}", self.icon(), self.label)
    }
}
