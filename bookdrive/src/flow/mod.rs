//! Authorization flow tying search, consent and upload together
//!
//! Two entry points drive the whole journey. `begin_search_core` runs the
//! catalog search, parks the results in a session and hands back the
//! consent URL for the caller to redirect to. `finish_authorization_core`
//! picks the session back up when the identity provider calls back,
//! exchanges the authorization code, and chains straight into rendering
//! and uploading the document. Each step is awaited in order and every
//! failure funnels into the single `FlowError` channel.

mod errors;
mod main;

pub use errors::FlowError;
pub use main::{SearchOutcome, begin_search_core, finish_authorization_core};
