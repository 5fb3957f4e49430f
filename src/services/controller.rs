// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interaction state machine driving the click-to-log workflow.
//!
//! Handles the core flow:
//! 1. Acquire the device position and render the map around it
//! 2. Capture map clicks as the pending workout location and open the form
//! 3. Validate submitted input and build the workout record
//! 4. Append the record to the session store
//! 5. Render the map marker and the list summary

use geo_types::Point;

use crate::config::Config;
use crate::models::Workout;
use crate::services::{SessionStore, WorkoutFactory};
use crate::ui::{Geolocator, MapView, MarkerStyle, Notifier, WorkoutForm, WorkoutList};

/// Alert shown when the device position cannot be acquired.
const POSITION_ALERT: &str = "Could not get your position";

/// Alert shown when submitted form values fail validation.
const INVALID_INPUT_ALERT: &str = "Inputs have to be positive numbers!";

/// Where the controller sits in the click → submit cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// No unconfirmed click; the form is hidden.
    Idle,
    /// A map click at `point` is awaiting form submission; the form is
    /// visible. A newer click overwrites `point` — only one pending
    /// location is kept at a time.
    AwaitingSubmission { point: Point<f64> },
}

/// Coordinates the map, form, list, and alert collaborators for one session.
///
/// Constructed once at startup with its collaborators injected; the host
/// forwards platform events to the handler methods below. Single-threaded
/// by design — every transition runs as a reaction to one discrete event.
pub struct SessionController<G, M, F, L, N> {
    config: Config,
    geolocator: G,
    map: M,
    form: F,
    list: L,
    notifier: N,
    factory: WorkoutFactory,
    store: SessionStore,
    phase: Phase,
}

impl<G, M, F, L, N> SessionController<G, M, F, L, N>
where
    G: Geolocator,
    M: MapView,
    F: WorkoutForm,
    L: WorkoutList,
    N: Notifier,
{
    pub fn new(config: Config, geolocator: G, map: M, form: F, list: L, notifier: N) -> Self {
        Self {
            config,
            geolocator,
            map,
            form,
            list,
            notifier,
            factory: WorkoutFactory::new(),
            store: SessionStore::new(),
            phase: Phase::Idle,
        }
    }

    /// Acquire the device position once and render the map around it.
    ///
    /// A denied or failed lookup alerts the user and leaves the map
    /// unrendered; the session still starts.
    pub fn start(&mut self) {
        match self.geolocator.request_current_position() {
            Ok(center) => {
                tracing::info!(
                    lat = center.y(),
                    lng = center.x(),
                    zoom = self.config.initial_zoom,
                    "Rendering map at device position"
                );
                self.map.render(center, self.config.initial_zoom);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Geolocation failed");
                self.notifier.notify(POSITION_ALERT);
            }
        }
    }

    /// A click landed on the map: remember it and open the entry form.
    ///
    /// A click while a previous one is still unconfirmed silently replaces
    /// it; the eventual record is logged at the most recent click.
    pub fn map_clicked(&mut self, point: Point<f64>) {
        self.phase = Phase::AwaitingSubmission { point };
        self.form.show();
        self.form.focus_distance_field();
    }

    /// The kind select changed: swap the cadence/elevation form rows.
    /// Purely a form-surface flip, no state-machine effect.
    pub fn kind_toggled(&mut self) {
        self.form.toggle_kind_fields();
    }

    /// The entry form was submitted.
    ///
    /// Invalid values alert the user and keep the form open against the
    /// same pending click, so the user can correct and resubmit. A valid
    /// submission logs the record, renders marker and list row, clears and
    /// hides the form, and returns to idle.
    ///
    /// # Panics
    ///
    /// Panics if no map click preceded the submission. The form is only
    /// reachable after a click, so this indicates a host wiring bug, not a
    /// user error.
    pub fn form_submitted(&mut self) {
        let Phase::AwaitingSubmission { point } = self.phase else {
            panic!("form submitted with no pending map click");
        };

        let fields = self.form.read_fields();
        let workout = match self.factory.build(
            fields.kind,
            point,
            fields.distance,
            fields.duration,
            fields.extra,
        ) {
            Ok(workout) => workout,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    kind = ?fields.kind,
                    distance = fields.distance,
                    duration = fields.duration,
                    extra = fields.extra,
                    "Rejected workout input"
                );
                self.notifier.notify(INVALID_INPUT_ALERT);
                return;
            }
        };

        tracing::info!(
            id = %workout.id(),
            kind = ?workout.kind(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout logged"
        );

        self.form.clear_fields();
        self.form.hide();

        let style = MarkerStyle::for_kind(workout.kind(), &self.config);
        self.map.place_marker(point, &workout.popup_text(), style);
        self.list.append_summary(&workout);
        self.store.append(workout);
        self.phase = Phase::Idle;
    }

    /// Workouts logged so far, in logging order.
    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }
}
