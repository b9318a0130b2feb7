//! Service layer
//!
//! Services compose storage reads with core computations and are the units
//! the HTTP handlers talk to.

pub mod reconciliation;

pub use reconciliation::ReconciliationService;
