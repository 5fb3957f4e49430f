// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory session log of workouts.

use crate::models::Workout;

/// Append-only, insertion-ordered collection of the session's workouts.
///
/// Insertion order is logging order; nothing is ever removed, reordered, or
/// deduplicated. Lives for exactly one session, no persistence.
#[derive(Debug, Default)]
pub struct SessionStore {
    workouts: Vec<Workout>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-validated record at the end. Cannot fail.
    pub fn append(&mut self, workout: Workout) {
        debug_assert!(
            self.workouts.iter().all(|w| w.id() != workout.id()),
            "workout id reused within a session"
        );
        self.workouts.push(workout);
    }

    /// All workouts in logging order, for the rendering collaborators.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
