//! Olist dashboard - descriptive e-commerce analytics over the Olist tables
//!
//! This library provides the loading, aggregation and presentation stages
//! used by the dashboard server.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod model;
pub mod present;
pub mod service;
pub mod source;
pub mod web;

#[cfg(test)]
pub(crate) mod test_utils;
