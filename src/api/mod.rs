//! # API Module
//!
//! HTTP client for the survey results site.

pub mod survey;

pub use survey::{SurveyClient, SurveyError, FIRST_SURVEY_YEAR, LAST_SURVEY_YEAR};
