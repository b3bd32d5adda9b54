//! Artifact discovery and loading
//!
//! At startup the service locates the exported model (and optional feature
//! scaler) on local disk and deserializes them into memory. Nothing here
//! runs per-request; the loaded bundle is shared read-only for the lifetime
//! of the process.
//!
//! - [`locate`]: suffix-based filename discovery with deterministic ordering
//! - [`load`]: deserialization of the located files into a [`Bundle`]

mod error;
pub mod load;
pub mod locate;

pub use error::{ArtifactError, Result};
pub use load::{load, Bundle};
pub use locate::{locate, LocatedArtifacts, MODEL_SUFFIX, SCALER_SUFFIX};
