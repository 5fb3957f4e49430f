// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test doubles for the UI collaborator traits.
//!
//! Every double records what the controller asked of it through shared
//! handles, so a test can keep a clone and inspect the interaction after
//! the controller has taken ownership of the other clone.

use std::cell::RefCell;
use std::rc::Rc;

use geo_types::Point;
use trailmark::error::GeolocationError;
use trailmark::ui::{FormFields, Geolocator, MapView, MarkerStyle, Notifier, WorkoutForm, WorkoutList};
use trailmark::{Config, SessionController, Workout};

/// Geolocator double with a scripted outcome.
pub enum FakeGeolocator {
    At(Point<f64>),
    Denied,
    Failing,
}

impl Geolocator for FakeGeolocator {
    fn request_current_position(&mut self) -> Result<Point<f64>, GeolocationError> {
        match self {
            FakeGeolocator::At(point) => Ok(*point),
            FakeGeolocator::Denied => Err(GeolocationError::Denied),
            FakeGeolocator::Failing => Err(GeolocationError::Unavailable(anyhow::anyhow!(
                "no position source"
            ))),
        }
    }
}

/// A marker the controller asked the map to place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub at: Point<f64>,
    pub popup_text: String,
    pub style: MarkerStyle,
}

/// Map double recording renders and placed markers.
#[derive(Default, Clone)]
pub struct RecordingMap {
    pub renders: Rc<RefCell<Vec<(Point<f64>, f64)>>>,
    pub markers: Rc<RefCell<Vec<PlacedMarker>>>,
}

impl MapView for RecordingMap {
    fn render(&mut self, center: Point<f64>, zoom: f64) {
        self.renders.borrow_mut().push((center, zoom));
    }

    fn place_marker(&mut self, at: Point<f64>, popup_text: &str, style: MarkerStyle) {
        self.markers.borrow_mut().push(PlacedMarker {
            at,
            popup_text: popup_text.to_string(),
            style,
        });
    }
}

/// Form double: field values are scripted by the test, lifecycle calls are
/// counted.
#[derive(Default, Clone)]
pub struct ScriptedForm {
    pub fields: Rc<RefCell<Option<FormFields>>>,
    pub visible: Rc<RefCell<bool>>,
    pub focus_count: Rc<RefCell<u32>>,
    pub clear_count: Rc<RefCell<u32>>,
    pub toggle_count: Rc<RefCell<u32>>,
}

impl ScriptedForm {
    pub fn set_fields(&self, fields: FormFields) {
        *self.fields.borrow_mut() = Some(fields);
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }
}

impl WorkoutForm for ScriptedForm {
    fn read_fields(&self) -> FormFields {
        (*self.fields.borrow()).expect("test submitted without scripting form fields")
    }

    fn show(&mut self) {
        *self.visible.borrow_mut() = true;
    }

    fn hide(&mut self) {
        *self.visible.borrow_mut() = false;
    }

    fn focus_distance_field(&mut self) {
        *self.focus_count.borrow_mut() += 1;
    }

    fn clear_fields(&mut self) {
        *self.fields.borrow_mut() = None;
        *self.clear_count.borrow_mut() += 1;
    }

    fn toggle_kind_fields(&mut self) {
        *self.toggle_count.borrow_mut() += 1;
    }
}

/// One rendered list row, formatted the way a production list renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub icon: String,
    pub title: String,
    pub distance_km: f64,
    pub duration_min: f64,
    pub metric: String,
    pub metric_unit: String,
    pub extra: f64,
    pub extra_unit: String,
}

/// List double recording appended summary rows.
#[derive(Default, Clone)]
pub struct RecordingList {
    pub rows: Rc<RefCell<Vec<SummaryRow>>>,
}

impl WorkoutList for RecordingList {
    fn append_summary(&mut self, workout: &Workout) {
        let (extra, extra_unit) = workout.extra();
        self.rows.borrow_mut().push(SummaryRow {
            icon: workout.icon().to_string(),
            title: workout.label().to_string(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            metric: format!("{:.1}", workout.metric()),
            metric_unit: workout.metric_unit().to_string(),
            extra,
            extra_unit: extra_unit.to_string(),
        });
    }
}

/// Notifier double capturing alert messages.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// A controller wired to doubles, plus handles to inspect them.
pub struct Harness {
    pub controller:
        SessionController<FakeGeolocator, RecordingMap, ScriptedForm, RecordingList, RecordingNotifier>,
    pub map: RecordingMap,
    pub form: ScriptedForm,
    pub list: RecordingList,
    pub notifier: RecordingNotifier,
}

/// Device position the default harness reports.
#[allow(dead_code)]
pub fn home() -> Point<f64> {
    Point::new(10.196123, 56.175188)
}

/// Harness whose geolocator succeeds at [`home`].
#[allow(dead_code)]
pub fn harness() -> Harness {
    harness_with(FakeGeolocator::At(home()))
}

/// Harness with a scripted geolocation outcome.
#[allow(dead_code)]
pub fn harness_with(geolocator: FakeGeolocator) -> Harness {
    init_tracing();

    let map = RecordingMap::default();
    let form = ScriptedForm::default();
    let list = RecordingList::default();
    let notifier = RecordingNotifier::default();

    let controller = SessionController::new(
        Config::default(),
        geolocator,
        map.clone(),
        form.clone(),
        list.clone(),
        notifier.clone(),
    );

    Harness {
        controller,
        map,
        form,
        list,
        notifier,
    }
}

/// Install a test subscriber so `RUST_LOG` surfaces controller tracing.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}
