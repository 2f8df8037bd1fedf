//! Fuel route planner server.
//!
//! A web application that answers: "I'm driving from here to there,
//! where should I stop for diesel and what will the fuel cost?"

pub mod cache;
pub mod domain;
pub mod geo;
pub mod ors;
pub mod planner;
pub mod stations;
pub mod web;
