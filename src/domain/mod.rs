// Car attributes as entered by the user
pub mod car;

// Feature encoding for the price model
pub mod ml;

// Estimate and comparison chart
pub mod report;

// Input plausibility checks
pub mod validation;

// Domain-specific error types
pub mod errors;

// Port interfaces
pub mod ports;
