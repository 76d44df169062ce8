//! # agentdesk-core
//!
//! Building blocks of the agentdesk planning demo.
//!
//! - [`extraction`]: line-oriented list extraction (numbered and bulleted
//!   items, trailing annotation stripping).
//! - [`assistant`]: scripted stand-ins for the assistant calls of each
//!   planning stage.
//! - [`workspace`]: in-memory chat messages, project tasks and slides.

pub mod assistant;
pub mod extraction;
pub mod workspace;

pub use extraction::{extract, AnnotationStrip, Extractor, ListStyle};
