//! Backends for the Layout IR
//!
//!     This crate turns a Layout IR tree (see blueprint-core) into its render targets: a
//!     self-contained HTML preview and a page-builder import document in one of three
//!     dialects. The IR itself is also a format, so authored JSON layouts go through the
//!     same interface as everything else.
//!
//! Architecture
//!
//!     - Format trait: uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: discovery and selection of formats by name
//!     - Format implementations: `layout` (IR JSON), `html` and `pagebuilder`
//!
//!     This is a pure lib: no printing, no env vars, no file system. The CLI owns all of
//!     that. Backends read the IR and build their own structures (an RcDom tree, page
//!     elements), so one IR instance can feed several backends in a request.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── ids.rs                  # structural-path element identifiers
//!     ├── formats
//!     │   ├── layout              # IR JSON
//!     │   ├── html                # RcDom serializer, Style → CSS
//!     │   └── pagebuilder         # elements, dialect strategies, visitor
//!     ├── mappings
//!     │   ├── column_size.rs      # column share inference
//!     │   ├── flatten.rs          # redundant wrapper removal
//!     │   └── split.rs            # top-level section promotion
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── html
//!     │   └── main.rs
//!     └── pagebuilder
//!         ├── main.rs
//!         ├── dialects.rs
//!         ├── export.rs
//!         └── fixtures
//!
//! note that rust does not by default discover tests in subdirectories, so we need to include
//! these in the mod.
//!
//! The Page-Builder Dialects
//!
//!     `classic` nests everything as section → column → widget, `classic_simple` additionally
//!     promotes inner sections to the top level so each block is editable on its own, and
//!     `container` uses the flexbox container grammar with no section/column pairs. All three
//!     run through one visitor; the dialect only supplies the structural builders and the
//!     rewrite passes (see formats/pagebuilder/dialect.rs).

pub mod error;
pub mod format;
pub mod formats;
pub mod ids;
pub mod mappings;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::HtmlFormat;
pub use formats::layout::LayoutFormat;
pub use formats::pagebuilder::{export, Dialect, Element, PageBuilderFormat, PageDocument};
pub use registry::FormatRegistry;
