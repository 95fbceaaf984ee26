//! Loggers and their composition.
//!
//! This module provides:
//! - `HostEvent`: lifecycle events the host adapter forwards to loggers
//! - `EventClassifier`: the interface every feature-area logger implements
//! - `ContentLogger`: the logger for posts, pages and custom content types
//! - `LoggerRegistry`: composes loggers and forwards entries to a sink
//!
//! The registry is owned by the host adapter layer. Nothing here registers
//! itself globally; the adapter decides which host hooks map onto which
//! [`HostEvent`] and calls [`LoggerRegistry::dispatch`].

mod classifier;
mod content;
mod event;
mod registry;

pub use classifier::EventClassifier;
pub use content::ContentLogger;
pub use event::HostEvent;
pub use registry::LoggerRegistry;
