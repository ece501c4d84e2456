// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. The enquiry form
// flow and the HTTP routes depend on these, never on concrete clients.
//
// Naming convention: Base* for trait names.

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::leads::validate::LeadSubmission;

// =============================================================================
// Address Normalizer (remote LLM capability)
// =============================================================================

#[async_trait]
pub trait BaseAddressNormalizer: Send + Sync {
    /// Return a standardized version of a free-text address.
    ///
    /// An empty string means the input could not be interpreted as an
    /// address. One attempt per call; retrying is the caller's decision.
    async fn normalize(&self, text: &str) -> Result<String>;
}

// =============================================================================
// Lead Relay (remote spreadsheet webhook)
// =============================================================================

#[async_trait]
pub trait BaseLeadRelay: Send + Sync {
    /// Forward a validated submission verbatim and return the remote's parsed
    /// JSON response. No schema is enforced beyond "parseable JSON".
    async fn deliver(&self, lead: &LeadSubmission) -> Result<serde_json::Value>;
}
