//! Run comparison routing.
//!
//! Decides which of two comparison pages to present for a set of runs: the
//! legacy page driven by workflow manifests, or the new page driven by
//! pipeline manifests. Mixed-format comparison across the two renderers is
//! not supported, so the legacy page is the safe fallback whenever any run is
//! legacy-format or failed to load.

use crate::banner::{Banner, BannerMode, BannerSink};
use crate::features::{FeatureGate, FeatureKey};
use crate::run::{ManifestPresence, RunDetail, RunFormat, RunId};
use crate::service::RunService;
use futures::future::join_all;
use tracing::{debug, warn};

/// Which comparison page to render. The rendering itself stays with the
/// caller; this crate only decides which page, never how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonView {
    LegacyView,
    NewView,
}

/// Convention for the run count reported in the failure banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureCount {
    /// Report the total number of runs requested. This is the console's
    /// historical wording; under partial failure it over-reports.
    #[default]
    Submitted,
    /// Report only the number of fetches that failed.
    Failed,
}

/// Tunable routing behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterOptions {
    pub manifest_presence: ManifestPresence,
    pub count_mode: FailureCount,
}

/// Outcome of one routing pass. Never an error: fetch failures degrade the
/// decision to [`ComparisonView::LegacyView`] instead of propagating.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub view: ComparisonView,
    /// Successfully fetched runs, in submission order.
    pub runs: Vec<RunDetail>,
    /// Number of fetches that failed.
    pub failures: usize,
}

/// Pure routing decision over already-fetched records.
///
/// With the flag off, classification is skipped entirely. With the flag on,
/// the new page is chosen iff every record classifies as new-format and
/// nothing failed; an empty record set also falls back to the legacy page.
#[must_use]
pub fn decide(
    records: &[RunDetail],
    v2_enabled: bool,
    any_failure: bool,
    presence: ManifestPresence,
) -> ComparisonView {
    if !v2_enabled || any_failure || records.is_empty() {
        return ComparisonView::LegacyView;
    }
    let all_v2 = records
        .iter()
        .all(|record| record.format(presence) == RunFormat::V2);
    if all_v2 {
        ComparisonView::NewView
    } else {
        ComparisonView::LegacyView
    }
}

fn failure_message(count: usize) -> String {
    format!("Error: failed loading {count} runs. Click Details for more information.")
}

/// Fetch every requested run and decide which comparison page to present.
///
/// One fetch is issued per id, concurrently and without retries; all are
/// allowed to settle before deciding, with no short-circuit on the first
/// failure. At most one banner update is emitted per call: raised iff at
/// least one fetch failed, carrying the detail of the last failure observed
/// in submission order.
pub async fn resolve(
    ids: &[RunId],
    service: &dyn RunService,
    gate: &dyn FeatureGate,
    sink: &dyn BannerSink,
    options: RouterOptions,
) -> Resolution {
    let v2_enabled = gate.is_enabled(FeatureKey::V2Alpha);

    let outcomes = join_all(ids.iter().map(|id| service.get_run(id))).await;

    let mut runs = Vec::with_capacity(outcomes.len());
    let mut failures = 0usize;
    let mut last_detail: Option<String> = None;
    for (id, outcome) in ids.iter().zip(outcomes) {
        match outcome {
            Ok(detail) => runs.push(detail),
            Err(err) => {
                warn!(run_id = %id, error = %err, "failed to fetch run");
                failures += 1;
                last_detail = Some(err.detail());
            }
        }
    }

    if let Some(additional_info) = last_detail {
        let count = match options.count_mode {
            FailureCount::Submitted => ids.len(),
            FailureCount::Failed => failures,
        };
        sink.update(Banner {
            message: failure_message(count),
            additional_info,
            mode: BannerMode::Error,
        });
    }

    let view = decide(&runs, v2_enabled, failures > 0, options.manifest_presence);
    debug!(?view, runs = runs.len(), failures, "comparison routing decided");
    Resolution {
        view,
        runs,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::{PipelineSpec, RunRecord};

    fn run(v2: bool) -> RunDetail {
        RunDetail {
            run: RunRecord {
                id: RunId::from("test-run-id"),
                name: "test run".to_string(),
                pipeline_spec: Some(if v2 {
                    PipelineSpec {
                        pipeline_manifest: Some(String::new()),
                        ..Default::default()
                    }
                } else {
                    PipelineSpec {
                        workflow_manifest: Some(String::new()),
                        ..Default::default()
                    }
                }),
            },
            pipeline_runtime: None,
        }
    }

    #[test]
    fn flag_off_always_legacy() {
        let records = vec![run(true), run(true)];
        assert_eq!(
            decide(&records, false, false, ManifestPresence::Present),
            ComparisonView::LegacyView
        );
    }

    #[test]
    fn all_v2_yields_new_view() {
        let records = vec![run(true), run(true), run(true)];
        assert_eq!(
            decide(&records, true, false, ManifestPresence::Present),
            ComparisonView::NewView
        );
    }

    #[test]
    fn any_legacy_yields_legacy_view() {
        let records = vec![run(false), run(true), run(true)];
        assert_eq!(
            decide(&records, true, false, ManifestPresence::Present),
            ComparisonView::LegacyView
        );
    }

    #[test]
    fn any_failure_yields_legacy_view() {
        let records = vec![run(true), run(true)];
        assert_eq!(
            decide(&records, true, true, ManifestPresence::Present),
            ComparisonView::LegacyView
        );
    }

    #[test]
    fn empty_records_yield_legacy_view() {
        assert_eq!(
            decide(&[], true, false, ManifestPresence::Present),
            ComparisonView::LegacyView
        );
    }

    #[test]
    fn decide_is_deterministic() {
        let records = vec![run(true), run(false)];
        let first = decide(&records, true, false, ManifestPresence::Present);
        let second = decide(&records, true, false, ManifestPresence::Present);
        assert_eq!(first, second);
    }

    #[test]
    fn failure_message_wording() {
        assert_eq!(
            failure_message(3),
            "Error: failed loading 3 runs. Click Details for more information."
        );
    }
}
