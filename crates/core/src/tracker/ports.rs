//! Port interfaces for tracker persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use hourglass_domain::{Result, TrackerDocument};

/// Trait for loading and replacing the whole tracker document
///
/// The document is the unit of persistence: there are no partial updates.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load the current document, or the empty default when none has ever
    /// been written.
    async fn load(&self) -> Result<TrackerDocument>;

    /// Atomically replace the persisted document.
    ///
    /// A failed save must leave the previously persisted document intact.
    async fn save(&self, document: &TrackerDocument) -> Result<()>;
}
