// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interfaces to the host UI: geolocation, map, form, list, and alerts.
//!
//! The host application owns the platform event loop and the real widgets.
//! It implements these traits over them and forwards native events (map
//! clicks, form submits, kind toggles) to the matching
//! [`crate::services::SessionController`] handlers. Keeping the surfaces
//! behind traits lets tests substitute recording doubles for all of them.

use geo_types::Point;

use crate::config::Config;
use crate::error::GeolocationError;
use crate::models::{ActivityKind, Workout};

/// One-shot provider of the device position, queried once at startup.
pub trait Geolocator {
    fn request_current_position(&mut self) -> Result<Point<f64>, GeolocationError>;
}

/// Styling for a marker popup, passed along with marker placement.
///
/// Popups stay open: a logged workout keeps its pin label visible until the
/// user dismisses it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Kind-specific CSS class, `running-popup` or `cycling-popup`
    pub class_name: &'static str,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerStyle {
    /// Popup style for a workout of `kind` under the given configuration.
    pub fn for_kind(kind: ActivityKind, config: &Config) -> Self {
        Self {
            class_name: kind.popup_class(),
            max_width: config.popup_max_width,
            min_width: config.popup_min_width,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// The interactive map surface.
///
/// Click capture is the host's concern: native click events are forwarded
/// to [`crate::services::SessionController::map_clicked`] with the clicked
/// geographic point.
pub trait MapView {
    /// Render the map centered on `center` at `zoom`. Called at most once,
    /// after a successful position fix.
    fn render(&mut self, center: Point<f64>, zoom: f64);

    /// Place a pinned marker with an open popup at `at`.
    fn place_marker(&mut self, at: Point<f64>, popup_text: &str, style: MarkerStyle);
}

/// Raw values read from the workout entry form.
///
/// Values are whatever the user typed, coerced to numbers by the form
/// adapter: empty fields read as zero, non-numeric entries as NaN. The
/// factory is the one that decides what is acceptable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormFields {
    pub kind: ActivityKind,
    pub distance: f64,
    pub duration: f64,
    pub extra: f64,
}

/// The workout entry form.
pub trait WorkoutForm {
    fn read_fields(&self) -> FormFields;

    fn show(&mut self);

    fn hide(&mut self);

    fn focus_distance_field(&mut self);

    fn clear_fields(&mut self);

    /// Flip the cadence/elevation row visibility when the kind select
    /// changes.
    fn toggle_kind_fields(&mut self);
}

/// The logged-workout side list.
pub trait WorkoutList {
    /// Append a summary row for a freshly logged workout: kind icon,
    /// distance (km), duration (min), the derived metric to one decimal
    /// place, and the kind-specific extra value with its unit.
    fn append_summary(&mut self, workout: &Workout);
}

/// User-facing alerts.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}
