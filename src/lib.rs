//! Constrained 2D layout for chart templates.
//!
//! Two independent, pure-computation passes:
//!
//! - [`layout::pack`] sizes and packs proportional-area shapes
//!   (circles/squares) on a fixed canvas so that shape areas track data
//!   values, shapes avoid each other, and nothing intrudes into a
//!   protected top band (e.g. a legend).
//! - [`layout::place_labels`] assigns vertically-anchored labels to
//!   non-overlapping slots along an axis, minimizing displacement from
//!   each label's anchor.
//!
//! Text measurement is a capability supplied by the caller; see
//! [`text::TextMeasurer`].

pub mod config;
pub mod dump;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod text;

pub use config::PackConfig;
pub use error::{Error, Result};
pub use layout::{
    LabelPlacement, LabelRequest, LabelResult, LabelSpec, NodeSpec, PackedNode, PackingRequest,
    PackingResult, ShapeKind, pack, place_labels,
};
pub use text::{HeuristicMeasurer, TextMeasurer, TextSize};
