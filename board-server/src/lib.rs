//! Live departure board server.
//!
//! Polls the BVG departures API for a fixed set of stations and serves the
//! upcoming departures as a self-refreshing web page.

pub mod board;
pub mod bvg;
pub mod config;
pub mod domain;
pub mod web;
