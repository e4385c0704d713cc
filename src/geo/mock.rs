use super::GeocodeService;
use crate::models::Coordinates;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockGeocodeClient {
    responses: Arc<Mutex<Vec<Option<Coordinates>>>>,
    fail_transport: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGeocodeClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            fail_transport: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: Option<Coordinates>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_transport_failure(self) -> Self {
        *self.fail_transport.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeocodeService for MockGeocodeClient {
    async fn resolve(&self, _address: &str) -> Result<Option<Coordinates>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if *self.fail_transport.lock().unwrap() {
            return Err(Error::Geocode("mock transport failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(Some(Coordinates { lat: 40.7, lng: -74.0 }))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index])
        }
    }
}
