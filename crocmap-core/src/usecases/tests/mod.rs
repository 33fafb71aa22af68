use super::prelude::*;
use std::{cell::RefCell, collections::VecDeque, time::Duration};

type GeocodingResult = Result<Option<String>, GeocodingError>;

/// Answers with prepared responses and records every call.
pub struct MockGeocoder {
    responses: RefCell<VecDeque<GeocodingResult>>,
    fallback: Box<dyn Fn() -> GeocodingResult>,
    calls: RefCell<Vec<(MapPoint, Duration)>>,
}

impl MockGeocoder {
    pub fn with_responses(responses: Vec<GeocodingResult>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            fallback: Box::new(|| panic!("Unexpected geocoding request")),
            calls: Default::default(),
        }
    }

    pub fn always<F>(f: F) -> Self
    where
        F: Fn() -> GeocodingResult + 'static,
    {
        Self {
            responses: Default::default(),
            fallback: Box::new(f),
            calls: Default::default(),
        }
    }

    pub fn calls(&self) -> Vec<(MapPoint, Duration)> {
        self.calls.borrow().clone()
    }
}

impl ReverseGeocodingGateway for MockGeocoder {
    fn resolve_lat_lng_address(&self, pos: MapPoint, timeout: Duration) -> GeocodingResult {
        self.calls.borrow_mut().push((pos, timeout));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| (self.fallback)())
    }
}

#[derive(Default)]
pub struct RecordingPause {
    pauses: RefCell<Vec<Duration>>,
}

impl RecordingPause {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}
