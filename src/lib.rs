//! Monthly attendance reports from punch-clock log exports.
//!
//! This crate turns a tab-delimited attendance log into one printable
//! two-column monthly report per employee: punches are parsed, filtered to a
//! month, deduplicated, mapped onto the four daily slots and laid out over the
//! two halves of the month.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod processing;
pub mod render;
pub mod storage;
