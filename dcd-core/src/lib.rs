#![warn(missing_docs)]
//! Domain models and ports for the segment demand-curve dashboard.
//!
//! A dashboard state is an ordered book of customer segments, each carrying a
//! unit price, a unit cost, and an annual volume. Every render pass recomputes
//! the margin column and lays the segments out as a stepped demand curve. The
//! computation itself lives in `dcd-chart`; this crate only defines the data
//! that flows through it and the seams to the external collaborators.

/// Core domain models for the dashboard.
///
/// The models in this module are primarily data structures with minimal
/// business logic, following the principles of the hexagonal architecture to
/// separate domain entities from the widgets that edit and draw them.
pub mod models;

/// Interface traits for the dashboard.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
///
/// These traits define the contract between the pure render pipeline and the
/// external collaborators (an editable grid widget, a chart renderer) without
/// specifying implementation details, so the pipeline can be driven equally
/// well by a UI runtime or a command-line adapter.
pub mod ports;
