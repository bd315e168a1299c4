//! fieldacre - Compute farm-field acreage and soil-health status from GPS boundary data

pub mod api;
pub mod config;
pub mod domain;
pub mod geojson;
pub mod geometry;
