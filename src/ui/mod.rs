//! Presentation of pricing results. The engine never depends on this module.

pub mod report;

pub use report::render_report;
