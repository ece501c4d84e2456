// Mock implementations for testing
//
// Call-recording stand-ins for the remote capabilities, injectable wherever
// ServerDeps is accepted.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use super::{BaseAddressNormalizer, BaseLeadRelay};
use crate::domains::leads::validate::LeadSubmission;

// =============================================================================
// Mock Address Normalizer
// =============================================================================

pub struct MockAddressNormalizer {
    correction: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockAddressNormalizer {
    pub fn new() -> Self {
        Self {
            correction: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Script the correction returned for every call.
    pub fn with_correction(self, correction: &str) -> Self {
        *self.correction.lock().unwrap() = Some(correction.to_string());
        self
    }

    /// Make every call return an error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All inputs the normalizer was asked about.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAddressNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAddressNormalizer for MockAddressNormalizer {
    async fn normalize(&self, text: &str) -> Result<String> {
        self.calls.lock().unwrap().push(text.to_string());

        if self.fail {
            anyhow::bail!("mock normalizer failure");
        }

        // Unscripted mocks echo the input (no correction to offer)
        let correction = self.correction.lock().unwrap().clone();
        Ok(correction.unwrap_or_else(|| text.to_string()))
    }
}

// =============================================================================
// Mock Lead Relay
// =============================================================================

pub struct MockLeadRelay {
    response: Arc<Mutex<serde_json::Value>>,
    deliveries: Arc<Mutex<Vec<LeadSubmission>>>,
    fail: bool,
}

impl MockLeadRelay {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(serde_json::json!({"result": "ok"}))),
            deliveries: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Script the JSON the webhook answers with.
    pub fn with_response(self, response: serde_json::Value) -> Self {
        *self.response.lock().unwrap() = response;
        self
    }

    /// Make every delivery fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All submissions that were delivered.
    pub fn deliveries(&self) -> Vec<LeadSubmission> {
        self.deliveries.lock().unwrap().clone()
    }
}

impl Default for MockLeadRelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseLeadRelay for MockLeadRelay {
    async fn deliver(&self, lead: &LeadSubmission) -> Result<serde_json::Value> {
        self.deliveries.lock().unwrap().push(lead.clone());

        if self.fail {
            anyhow::bail!("mock relay failure");
        }

        Ok(self.response.lock().unwrap().clone())
    }
}
