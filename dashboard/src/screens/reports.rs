//! Reports tab: financial summary over a date range plus file exports
//!
//! The summary prefers the backend's aggregated endpoint. When that
//! endpoint fails, the raw payments and expenses for the range are
//! fetched together and aggregated locally with the shared
//! [`summarize`] contract, so both paths produce the same shape. A
//! single summary always comes from exactly one source.
//!
//! [`summarize`]: shared::summarize

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use shared::{summarize, DateRange, FinancialSummary};

use crate::api::{ApiClient, FinanceApi, ReportFormat, ReportsApi};
use crate::error::AppResult;
use crate::state::SubmitState;

/// Controller for the reports tab
pub struct ReportsScreen {
    range: DateRange,
    summary: Option<(FinancialSummary, SummarySource)>,
    loading: bool,
    error: Option<String>,
    pub export: SubmitState,
    finance: FinanceApi,
    reports: ReportsApi,
    generation: u64,
}

/// Where a summary's numbers came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySource {
    /// The backend's aggregated endpoint
    Server,
    /// Local aggregation over raw payments and expenses
    ClientComputed,
}

impl ReportsScreen {
    /// Starts with the current calendar month as the range
    pub fn new(client: &ApiClient, today: NaiveDate) -> Self {
        Self {
            range: month_of(today),
            summary: None,
            loading: false,
            error: None,
            export: SubmitState::Idle,
            finance: FinanceApi::new(client.clone()),
            reports: ReportsApi::new(client.clone()),
            generation: 0,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn summary(&self) -> Option<&FinancialSummary> {
        self.summary.as_ref().map(|(summary, _)| summary)
    }

    pub fn source(&self) -> Option<SummarySource> {
        self.summary.as_ref().map(|(_, source)| *source)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Changing the range clears the summary until the next load
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        self.summary = None;
        self.error = None;
    }

    /// Fetch the summary for the current range
    ///
    /// The aggregated endpoint is tried first; on failure the raw
    /// records are fetched together and aggregated locally. Only when
    /// the fallback also fails does the screen show an error.
    pub async fn load_summary(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let range = self.range;
        self.loading = true;
        self.error = None;

        let loaded = match self.finance.summary(&range).await {
            Ok(summary) => Ok((summary, SummarySource::Server)),
            Err(err) => {
                tracing::warn!(error = %err, "summary endpoint failed, aggregating locally");
                match tokio::try_join!(
                    self.finance.payments_raw(&range),
                    self.finance.expenses_raw(&range),
                ) {
                    Ok((payments, expenses)) => Ok((
                        summarize(&payments, &expenses),
                        SummarySource::ClientComputed,
                    )),
                    Err(err) => Err(err),
                }
            }
        };

        if generation != self.generation {
            tracing::debug!(generation, "stale summary discarded");
            return;
        }

        self.loading = false;
        match loaded {
            Ok(summary) => self.summary = Some(summary),
            Err(err) => {
                tracing::error!(error = %err, "summary load failed");
                self.summary = None;
                self.error = Some(err.user_message());
            }
        }
    }

    pub async fn retry(&mut self) {
        self.load_summary().await;
    }

    /// Export a report for the current range and save it locally
    pub async fn export_report(
        &mut self,
        export_dir: &std::path::Path,
        report_type: &str,
        format: ReportFormat,
    ) -> AppResult<PathBuf> {
        if !self.export.begin() {
            return Err(crate::error::AppError::validation(
                "export",
                "An export is already in progress",
            ));
        }
        match self
            .reports
            .export_to_file(export_dir, report_type, &self.range, format)
            .await
        {
            Ok(path) => {
                self.export.succeed();
                Ok(path)
            }
            Err(err) => {
                self.export.fail(err.user_message());
                Err(err)
            }
        }
    }
}

/// First through last day of the month containing `date`
fn month_of(date: NaiveDate) -> DateRange {
    let start = date.with_day(1).unwrap_or(date);
    let end = start
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    DateRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_of_spans_calendar_month() {
        let range = month_of(date(2026, 8, 24));
        assert_eq!(range.start, date(2026, 8, 1));
        assert_eq!(range.end, date(2026, 8, 31));

        let range = month_of(date(2026, 2, 10));
        assert_eq!(range.end, date(2026, 2, 28));
    }

    #[test]
    fn test_set_range_clears_summary() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/v1");
        let mut screen = ReportsScreen::new(&client, date(2026, 8, 24));
        screen.summary = Some((FinancialSummary::default(), SummarySource::Server));

        screen.set_range(DateRange {
            start: date(2026, 7, 1),
            end: date(2026, 7, 31),
        });
        assert!(screen.summary().is_none());
        assert!(screen.error().is_none());
    }
}
