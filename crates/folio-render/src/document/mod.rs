//! Host documents and the page's document-level side effects.
//!
//! The page writes outside its own subtree in two ways: it sets the
//! document title once, and it paints `<body>` and `<html>` with the
//! palette's page colors. The latter is scoped by [`PageStyleGuard`].

mod guard;
mod host;
mod memory;

pub use guard::PageStyleGuard;
pub use host::{DocumentHost, StyleTarget};
pub use memory::InMemoryDocument;
