// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod controller;
pub mod factory;
pub mod store;

pub use controller::SessionController;
pub use factory::WorkoutFactory;
pub use store::SessionStore;
