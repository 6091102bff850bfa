//! API Route Handlers

pub mod alerts;
pub mod forecast;
pub mod samples;
