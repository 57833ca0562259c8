//! Terminal front-end for Lead Finder.
//!
//! Plays the dashboard's role: parses filter flags, runs the query over the
//! scored table, renders rows, and writes exports.

pub mod cli;
