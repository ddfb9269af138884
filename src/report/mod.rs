//! # Report Module
//!
//! Presentation output: PNG charts for the correlation report.

pub mod plots;

pub use plots::{dual_axis_lines, scatter_plot};
