//! # blueprint-core
//!
//! The canonical design tree shared by every blueprint component.
//!
//! File Layout
//!
//!     src
//!     ├── ir
//!     │   ├── lenient.rs      Forgiving readers for hand-written JSON
//!     │   ├── nodes.rs        LayoutNode and its payload records
//!     │   └── style.rs        Style record, alignment and padding values
//!     └── diagnostics.rs      Read-only counters over an IR tree
//!
//! The importer front-end produces a [`LayoutNode`] tree and the backends in
//! `blueprint-babel` consume it. The tree is built once per operation and never
//! mutated afterwards: backends read it and normalize into their own
//! structures, so the same instance can feed several of them in one request.

pub mod diagnostics;
pub mod ir;

pub use diagnostics::{analyze, DiagnosticsReport};
pub use ir::nodes::{
    Block, Button, Column, Columns, Heading, Image, Input, LayoutNode, Nav, NavItem, Text,
    UnknownNode,
};
pub use ir::style::{Align, Direction, Padding, Style};
