//! Run comparison routing for the ML pipelines console.
//!
//! Given a list of run identifiers, this crate fetches each run's detail
//! record from the run service, classifies each record as legacy-format
//! (workflow manifest) or new-format (pipeline manifest), and decides which
//! of two comparison pages to present, aggregating fetch failures into a
//! single page banner.
//!
//! The router takes its collaborators by injection: a [`service::RunService`]
//! for fetching, a [`features::FeatureGate`] for the new-format flag, and a
//! [`banner::BannerSink`] for the error banner. It never reaches into
//! process-wide state.

#![forbid(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

pub mod banner;
pub mod cli;
pub mod compare;
pub mod error;
pub mod features;
pub mod run;
pub mod service;

pub use compare::{ComparisonView, Resolution, RouterOptions, resolve};
pub use error::{Error, Result};
