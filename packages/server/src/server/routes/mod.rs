// HTTP routes
pub mod address;
pub mod health;
pub mod lead;

pub use address::*;
pub use health::*;
pub use lead::*;
