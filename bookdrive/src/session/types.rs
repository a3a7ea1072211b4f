use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gateway::Book;

/// A pending search awaiting drive authorization.
///
/// The `state` token doubles as the store key and as the `state`
/// parameter sent through the authorization redirect, so the callback
/// can only resolve a session whose token it echoes back verbatim.
/// The book list is fixed at creation and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub state: String,
    pub books: Vec<Book>,
    pub created_at: DateTime<Utc>,
}
