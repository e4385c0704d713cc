use super::WeatherService;
use crate::models::{Coordinates, WeatherReport};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockWeatherClient {
    responses: Arc<Mutex<Vec<Option<WeatherReport>>>>,
    fail_transport: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockWeatherClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            fail_transport: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: Option<WeatherReport>) -> Self {
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

impl Default for MockWeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherService for MockWeatherClient {
    async fn fetch(&self, _coords: Coordinates) -> Result<Option<WeatherReport>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if *self.fail_transport.lock().unwrap() {
            return Err(Error::Weather("mock transport failure".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(Some(WeatherReport {
                name: "New York".to_string(),
                temp_f: 55.4,
                condition: "clear sky".to_string(),
            }))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
