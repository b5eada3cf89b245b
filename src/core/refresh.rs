//! One refresh tick: recompute every running entry and the day summary.
//!
//! The refresher never touches the page. It reads a [`PageSnapshot`] and
//! returns the strings the host should write, so the host can diff and apply
//! them however it likes.

use crate::core::calculator::elapsed::{elapsed_hours, running_total};
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::page::PageSnapshot;
use crate::models::rendered::{EntryDiagnostic, RefreshOutput, RenderedEntry, RenderedSummary};
use crate::models::work_entry::{EntrySnapshot, WorkEntry};
use crate::utils::formatting::{NO_QUITTING_TIME, format_hours, format_time};
use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone, Copy)]
pub struct TimerDisplayRefresher;

impl TimerDisplayRefresher {
    pub fn new() -> Self {
        Self
    }

    pub fn refresh(&self, page: &PageSnapshot, now: NaiveDateTime) -> RefreshOutput {
        let mut out = RefreshOutput::default();
        let mut day_total = 0.0;

        for snap in &page.entries {
            let (entry, elapsed, total) = match measure(snap, now, day_total) {
                Ok(measured) => measured,
                Err(e) => {
                    let err = AppError::for_entry(&snap.id, e);
                    tracing::warn!(
                        event = "refresh.entry_skipped",
                        entry = %snap.id,
                        state = snap.state.as_str(),
                        error = %err
                    );
                    out.diagnostics.push(EntryDiagnostic {
                        id: snap.id.clone(),
                        message: err.to_string(),
                    });
                    continue;
                }
            };

            day_total += elapsed;

            if let Some(total) = total {
                let live = entry.is_active_span();
                out.entries.push(RenderedEntry {
                    id: snap.id.clone(),
                    elapsed: live.then(|| format_hours(elapsed)),
                    total: format_hours(total),
                    timestamp: live.then(|| format_time(now.time())),
                });
            }
        }

        if !page.day_summaries.is_empty() {
            let summary = DaySummary::compute(day_total, now.time());
            let rendered = render_summary(&summary);
            for id in &page.day_summaries {
                out.summaries.insert(id.clone(), rendered.clone());
            }
        }

        tracing::debug!(
            event = "refresh.completed",
            rendered = out.entries.len(),
            skipped = out.diagnostics.len(),
            day_total
        );

        out
    }
}

/// Parse an entry and compute its hours. An entry whose hours would make the
/// day total or its own running total non-finite is rejected whole.
fn measure(
    snap: &EntrySnapshot,
    now: NaiveDateTime,
    day_total: f64,
) -> AppResult<(WorkEntry, f64, Option<f64>)> {
    let entry = WorkEntry::from_snapshot(snap)?;
    let elapsed = elapsed_hours(&entry, now);
    let total = running_total(&entry, now);

    if !(day_total + elapsed).is_finite() || total.is_some_and(|t| !t.is_finite()) {
        return Err(AppError::DurationOverflow(elapsed));
    }

    Ok((entry, elapsed, total))
}

pub fn render_summary(summary: &DaySummary) -> RenderedSummary {
    RenderedSummary {
        total: format_hours(summary.total_hours),
        remaining: format_hours(summary.remaining_hours),
        quitting: summary
            .quitting_time
            .map(format_time)
            .unwrap_or_else(|| NO_QUITTING_TIME.to_string()),
    }
}
