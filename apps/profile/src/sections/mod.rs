// Per-section view models for the profile page.
// Each builder is a pure function over fetched records; fetching and fallback
// selection live in `render`.

use serde::Serialize;
use tracing::warn;

use crate::clients::SourceError;

pub mod account;
pub mod activity;
pub mod contributions;
pub mod repos;
pub mod transactions;

/// A data section resolves exactly once, to either its data or its fallback.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Populated(T),
    Fallback,
}

impl<T> Section<T> {
    /// Absorbs a collaborator failure into the fallback state, logging it.
    pub fn resolve<R>(
        name: &str,
        result: Result<R, SourceError>,
        build: impl FnOnce(R) -> T,
    ) -> Self {
        match result {
            Ok(records) => Section::Populated(build(records)),
            Err(e) => {
                warn!("{name} section falling back: {e}");
                Section::Fallback
            }
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Section::Populated(data) => Some(data),
            Section::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Section::Fallback)
    }
}
