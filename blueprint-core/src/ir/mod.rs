//! Intermediate Representation (IR) for designs.
//!
//! This module defines a backend-agnostic representation of a visual design,
//! designed to feed conversion to HTML and page-builder documents.
//!
//! # Design Philosophy
//!
//! - **Semantic Focus**: nine layout primitives, not the visual tool's node zoo
//! - **Lossy by Design**: vector geometry, layer names and effects beyond a single
//!   drop shadow are discarded
//! - **JSON Compatible**: the serde form is the nested map/list document that can
//!   also be authored by hand; objects of unrecognized kinds are kept verbatim
//!
//! # Invariants
//!
//! - every child is a concrete IR node
//! - nodes without renderable content are never inserted by the importer, and
//!   backends skip them through [`nodes::LayoutNode::has_content`]
//! - `columns` entries are containers, each holding the content of one column
//!
//! # Modules
//!
//! - [`nodes`]: the node enum and per-kind payloads
//! - [`style`]: the optional style record attached to most nodes

mod lenient;
pub mod nodes;
pub mod style;
