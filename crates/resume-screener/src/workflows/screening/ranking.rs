use std::sync::Mutex;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use super::domain::{Candidate, RequirementSet};
use super::evaluation::{CandidateScorer, ScoreBreakdown};
use super::report::{BatchStatistics, InsightGenerator, InsightReport};

/// One candidate's place in a ranked batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based position after sorting.
    pub rank: usize,
    pub candidate: Candidate,
    pub breakdown: ScoreBreakdown,
    pub insights: InsightReport,
}

/// Ranked results plus aggregates over the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBatch {
    pub results: Vec<RankedResult>,
    pub statistics: BatchStatistics,
}

/// Progress notification emitted after each candidate is scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: f32,
}

impl Progress {
    fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100.0
        } else {
            completed as f32 / total as f32 * 100.0
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

struct Assessment {
    candidate: Candidate,
    breakdown: ScoreBreakdown,
    insights: InsightReport,
}

/// Scores a batch of candidates and orders them best first.
///
/// With `workers > 1` the batch is split into contiguous chunks scored on scoped threads.
/// Chunks are stitched back in input order before the stable sort, so the output does not
/// depend on the worker count.
#[derive(Debug, Clone)]
pub struct BatchRanker {
    scorer: CandidateScorer,
    insights: InsightGenerator,
    workers: usize,
}

impl Default for BatchRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRanker {
    pub fn new() -> Self {
        Self::with_workers(1)
    }

    pub fn with_workers(workers: usize) -> Self {
        Self {
            scorer: CandidateScorer::new(),
            insights: InsightGenerator::new(),
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn rank(
        &self,
        candidates: &[Candidate],
        requirements: &RequirementSet,
        minimum_score: u8,
    ) -> RankedBatch {
        self.rank_with_progress(candidates, requirements, minimum_score, |_| {})
    }

    pub fn rank_with_progress<F>(
        &self,
        candidates: &[Candidate],
        requirements: &RequirementSet,
        minimum_score: u8,
        observer: F,
    ) -> RankedBatch
    where
        F: FnMut(Progress) + Send,
    {
        let span = info_span!(
            "rank_batch",
            candidates = candidates.len(),
            workers = self.workers
        );
        let _entered = span.enter();

        let total = candidates.len();
        let tracker = Mutex::new((0usize, observer));

        let mut assessments: Vec<Assessment> = if total == 0 {
            report_progress(&tracker, 0, total);
            Vec::new()
        } else if self.workers == 1 || total == 1 {
            self.assess_chunk(candidates, requirements, &tracker, total)
        } else {
            let chunk_size = total.div_ceil(self.workers);
            thread::scope(|scope| {
                let handles: Vec<_> = candidates
                    .chunks(chunk_size)
                    .map(|chunk| {
                        let tracker = &tracker;
                        scope.spawn(move || self.assess_chunk(chunk, requirements, tracker, total))
                    })
                    .collect();

                handles
                    .into_iter()
                    .flat_map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                    })
                    .collect()
            })
        };

        let statistics = BatchStatistics::from_scores(
            assessments
                .iter()
                .map(|assessment| assessment.breakdown.overall_score),
            minimum_score,
        );

        // `sort_by` is stable: equal scores keep their input order.
        assessments.sort_by(|a, b| b.breakdown.overall_score.cmp(&a.breakdown.overall_score));

        let results = assessments
            .into_iter()
            .enumerate()
            .map(|(index, assessment)| RankedResult {
                rank: index + 1,
                candidate: assessment.candidate,
                breakdown: assessment.breakdown,
                insights: assessment.insights,
            })
            .collect();

        debug!(
            total = statistics.total,
            qualified = statistics.qualified,
            "batch ranked"
        );

        RankedBatch {
            results,
            statistics,
        }
    }

    fn assess_chunk<F>(
        &self,
        chunk: &[Candidate],
        requirements: &RequirementSet,
        tracker: &Mutex<(usize, F)>,
        total: usize,
    ) -> Vec<Assessment>
    where
        F: FnMut(Progress),
    {
        chunk
            .iter()
            .map(|candidate| {
                let breakdown = self.scorer.score(candidate, requirements);
                let insights = self.insights.generate(&breakdown, &candidate.resume_text);
                report_progress(tracker, 1, total);
                Assessment {
                    candidate: candidate.clone(),
                    breakdown,
                    insights,
                }
            })
            .collect()
    }
}

/// Counter and callback share one lock so observers see strictly increasing counts.
fn report_progress<F>(tracker: &Mutex<(usize, F)>, step: usize, total: usize)
where
    F: FnMut(Progress),
{
    let mut guard = match tracker.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let (completed, observer) = &mut *guard;
    *completed += step;
    observer(Progress::new(*completed, total));
}
