#![forbid(unsafe_code)]

//! `selkie` synthesizes Mermaid mindmaps from marked-up markdown documents.
//!
//! The synthesis pipeline lives in `selkie-core` and is re-exported here
//! wholesale. On top of it, [`session`] adds the stateful layer a viewer
//! integration needs: view-mode tracking, lazy generation, and a render
//! boundary that hands Mermaid text to an external renderer and discards
//! results that arrive late.

pub use selkie_core::*;

pub mod session;

pub use session::{
    MindmapSession, RenderOutcome, RenderRequest, RenderTicket, SessionState, ViewMode,
};
