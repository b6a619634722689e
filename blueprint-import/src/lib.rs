//! Importer front-end: visual-tool node trees to Layout IR.
//!
//!     A design URL names a frame. The [`client`] module fetches its node tree
//!     (or reads one from disk), [`source`] turns the loosely shaped JSON into typed
//!     nodes, and the [`classifier`] recognizes layout primitives in it using the
//!     style and geometry helpers of [`style`] and [`rows`].
//!
//!     Classification never fails. Missing geometry or style reads as zero or empty
//!     and unclassifiable subtrees are pruned. Only the steps before it (reference
//!     parsing, fetching, the frame check) return [`ImportError`].
//!
//! The file structure:
//!
//!     .
//!     ├── classifier
//!     │   ├── mod.rs        # Classifier and dispatch order
//!     │   ├── rules.rs      # card / input / button / nav rule table
//!     │   ├── layouts.rs    # horizontal, vertical and free layouts
//!     │   └── leaves.rs     # text and image leaves
//!     ├── client.rs         # NodeSource trait, FigmaClient, FileSource
//!     ├── error.rs
//!     ├── importer.rs       # frame import
//!     ├── reference.rs      # design URL parsing
//!     ├── rows.rs           # reading order, background detection, row grouping
//!     ├── source.rs         # typed node model
//!     ├── style.rs          # paint / typography → Style
//!     └── thresholds.rs

pub mod classifier;
pub mod client;
pub mod error;
pub mod importer;
pub mod reference;
pub mod rows;
pub mod source;
pub mod style;
pub mod thresholds;

pub use classifier::Classifier;
pub use client::{ClientOptions, FigmaClient, FileSource, NodeSource};
pub use error::ImportError;
pub use importer::{import_frame, Importer};
pub use reference::DocumentRef;
pub use source::SourceNode;
pub use thresholds::Thresholds;
