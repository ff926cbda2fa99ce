//! Test Module
//!
//! Cross-module scenarios for the Patter engine.
//!
//! ## Test Categories
//! - `engine_tests`: full turns through the pipeline, one behavior per group
//! - `datetime_tests`: date/time phrases, parsing and clock interaction
//! - `config_tests`: environment layering and content-file loading

pub mod engine_tests;
