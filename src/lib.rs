#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Exploratory analysis of a streaming catalog.
//!
//! This library turns a CSV catalog of titles into analysis-ready record sets and a fixed
//! collection of descriptive aggregate views, exposed either as a static export or as an
//! interactive, filterable dashboard session.
//!
//! # Module Organization
//!
//! - [`catalog`]: Loading, normalization, explosion of multi-value fields, and region lookup
//! - [`views`]: Aggregations, named views, and the filter engine
//! - [`dashboard`]: Interactive controls with memoized recomputation
//! - [`reports`]: Console, CSV, Excel, and JSON writers over aggregate views
//!
//! The command-line surface lives behind [`run`], which drives everything through a [`Host`]
//! so the whole tool can be exercised in-process.

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod catalog;
pub mod dashboard;
pub mod reports;
pub mod views;

mod commands;

pub use crate::commands::{Host, run};
