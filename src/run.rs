//! Run detail records and manifest format classification.
//!
//! A run carries exactly one of two mutually exclusive manifest fields in its
//! pipeline spec: `workflow_manifest` (the legacy representation) or
//! `pipeline_manifest` (the newer representation). Classification operates on
//! field presence, not content.

use serde::{Deserialize, Serialize};
use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Opaque run identifier, unique per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RunId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RunId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Parse the console's comma-separated `runlist` query value into run IDs.
///
/// Whitespace around segments is trimmed and empty segments are dropped, so
/// `"a, b,,c"` yields three IDs.
#[must_use]
pub fn parse_run_list(raw: &str) -> Vec<RunId> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(RunId::from)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Wire records
// ────────────────────────────────────────────────────────────────────────────

/// The manifest slots of a run's pipeline spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSpec {
    #[serde(alias = "workflowManifest", skip_serializing_if = "Option::is_none")]
    pub workflow_manifest: Option<String>,
    #[serde(alias = "pipelineManifest", skip_serializing_if = "Option::is_none")]
    pub pipeline_manifest: Option<String>,
    #[serde(alias = "pipelineId", skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
}

/// The run resource itself, as returned inside a detail payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunRecord {
    pub id: RunId,
    pub name: String,
    #[serde(alias = "pipelineSpec", skip_serializing_if = "Option::is_none")]
    pub pipeline_spec: Option<PipelineSpec>,
}

/// Runtime state attached to a run detail payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineRuntime {
    #[serde(alias = "workflowManifest", skip_serializing_if = "Option::is_none")]
    pub workflow_manifest: Option<String>,
}

/// One run's detail record from the run service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunDetail {
    pub run: RunRecord,
    #[serde(alias = "pipelineRuntime", skip_serializing_if = "Option::is_none")]
    pub pipeline_runtime: Option<PipelineRuntime>,
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

/// Which of the two manifest representations a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunFormat {
    /// Workflow-manifest representation.
    Legacy,
    /// Pipeline-manifest representation.
    V2,
}

/// Presence rule for the new-format manifest marker.
///
/// Observed fixtures populate `pipeline_manifest` with an empty string for
/// new-format runs, so `Present` is the default; `NonEmpty` additionally
/// requires content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManifestPresence {
    #[default]
    Present,
    NonEmpty,
}

impl RunDetail {
    /// Classify this run by which manifest field its pipeline spec carries.
    ///
    /// A record with neither manifest set, or with no pipeline spec at all,
    /// lacks the new-format marker and classifies as `Legacy`.
    #[must_use]
    pub fn format(&self, presence: ManifestPresence) -> RunFormat {
        let manifest = self
            .run
            .pipeline_spec
            .as_ref()
            .and_then(|spec| spec.pipeline_manifest.as_deref());
        match (manifest, presence) {
            (Some(_), ManifestPresence::Present) => RunFormat::V2,
            (Some(m), ManifestPresence::NonEmpty) if !m.is_empty() => RunFormat::V2,
            _ => RunFormat::Legacy,
        }
    }
}
