pub mod persistence;
pub mod telemetry;
pub mod version;
