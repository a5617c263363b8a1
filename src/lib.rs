//! Tradeoff Engine - Multi-objective trade-off and sensitivity analysis
//!
//! This crate classifies candidate solutions into Pareto-optimal and dominated
//! sets, bounds the trade-off space with ideal and nadir points, rescales
//! objectives for display, and ranks parameters by perturbation impact.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
