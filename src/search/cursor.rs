//! Keyset pagination cursors.
//!
//! A cursor encodes the full composite sort position of the last row of a
//! page: relevance score, publication timestamp, and item identity. All
//! three components matter. Item identities here are random UUIDs, so an
//! identity-only cursor would not correspond to the display order and
//! could silently skip or repeat rows whenever scores or timestamps tie;
//! the keyset comparison must run over the same tuple the sort does.
//!
//! The encoded form is an opaque token (URL-safe base64 over a compact
//! binary payload). Clients must round-trip it unmodified and never parse
//! it.

use std::cmp::Ordering;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GazetteError, Result};

/// The composite sort position of one result row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    /// Relevance score (neutral zero under fallback matching).
    pub score: f32,

    /// Publication timestamp.
    pub published_at: Option<DateTime<Utc>>,

    /// Item identity, the final tie-break.
    pub id: Uuid,
}

impl SortKey {
    /// Compare two keys in display order: score descending, then
    /// publication timestamp descending, then identity descending.
    ///
    /// `Ordering::Less` means `self` displays before `other`. This same
    /// comparator drives result ordering and cursor comparison; the two
    /// must never diverge.
    pub fn display_cmp(&self, other: &SortKey) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.published_at.cmp(&self.published_at))
            .then_with(|| other.id.cmp(&self.id))
    }

    /// Whether this row sits strictly after the cursor position in
    /// display order.
    pub fn sorts_after(&self, cursor: &SortKey) -> bool {
        cursor.display_cmp(self) == Ordering::Less
    }

    /// Encode this key as an opaque cursor token.
    pub fn encode(&self) -> Result<String> {
        let payload = bincode::serialize(self)
            .map_err(|e| GazetteError::query(format!("cursor encoding failed: {e}")))?;
        Ok(URL_SAFE_NO_PAD.encode(payload))
    }

    /// Decode an opaque cursor token.
    ///
    /// Tokens come from external clients; a token that does not decode is
    /// a query error for the caller to degrade on, never a panic.
    pub fn decode(token: &str) -> Result<SortKey> {
        let payload = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|e| GazetteError::query(format!("malformed cursor: {e}")))?;
        bincode::deserialize(&payload)
            .map_err(|e| GazetteError::query(format!("malformed cursor: {e}")))
    }
}
