//! Rental pricing engine for car hire bookings
//!
//! This crate turns a rental period, a coverage plan and a car's tariff
//! bands into a day count, a daily rate, a deposit and a total price, and
//! serves quotes over HTTP from a YAML-configured fleet.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
