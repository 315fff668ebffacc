//! a transit line modeled as a single ordered path of stations, built one
//! directed section at a time.
pub mod model;
pub mod repository;
pub mod service;
