//! Metro journey planner.
//!
//! Models a multi-line rail network as an undirected weighted graph and
//! answers two questions about it: which route needs the fewest
//! connections, and which route is quickest.

pub mod config;
pub mod domain;
pub mod logging;
pub mod network;
pub mod planner;
pub mod web;
