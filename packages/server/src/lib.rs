// ITLC India - Site Core
//
// Backend for the ITLC India marketing site: serves the single-page site,
// validates and relays lead enquiries to the spreadsheet webhook, and offers
// LLM-backed address correction for the enquiry form.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
