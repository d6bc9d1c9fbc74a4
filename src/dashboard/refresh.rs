//! Refresh Orchestration
//!
//! A refresh reads the full filtered records, then the statistics for the
//! same filter, and turns both into a [`DashboardView`]. Every refresh is
//! stamped with a [`RefreshToken`]; when another refresh starts before this
//! one finishes, the older result is reported as superseded and never
//! reaches the page.

use std::sync::atomic::{AtomicU64, Ordering};

use super::view::DashboardView;
use crate::client::{DashboardApi, FetchError};
use crate::model::FilterState;
use crate::render::Locale;

/// Monotonic id of one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Issues refresh tokens and remembers the latest one
#[derive(Debug, Default)]
pub struct RefreshTokens {
    latest: AtomicU64,
}

impl RefreshTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RefreshToken {
        RefreshToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: RefreshToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// Result of one refresh
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// Both reads succeeded; apply this view
    Rendered(DashboardView),
    /// A newer refresh was started while this one was in flight
    Superseded,
    /// A read failed; the loading placeholders stay up
    Failed(FetchError),
}

/// Refresh orchestrator over any [`DashboardApi`]
pub struct Dashboard<A> {
    api: A,
    tokens: RefreshTokens,
    locale: Locale,
}

impl<A: DashboardApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tokens: RefreshTokens::new(),
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Run one refresh for the filter
    pub async fn refresh(&self, filter: &FilterState) -> RefreshOutcome {
        let token = self.tokens.issue();
        tracing::debug!(
            token = token.id(),
            countries = filter.countries().len(),
            years = %filter.years().label(),
            "Refresh started"
        );

        let result = self.fetch(filter).await;

        if let Err(err) = &result {
            tracing::error!(token = token.id(), error = %err, "Failed to fetch dashboard data");
        }

        if !self.tokens.is_latest(token) {
            tracing::debug!(token = token.id(), "Refresh superseded, discarding result");
            return RefreshOutcome::Superseded;
        }

        match result {
            Ok(view) => RefreshOutcome::Rendered(view),
            Err(err) => RefreshOutcome::Failed(err),
        }
    }

    async fn fetch(&self, filter: &FilterState) -> Result<DashboardView, FetchError> {
        let records = self.api.filtered_records(filter).await?;
        let stats = self.api.statistics(filter).await?;

        tracing::info!(
            records = records.len(),
            stats = stats.len(),
            "Fetched dashboard data"
        );
        Ok(DashboardView::render(filter, &records, &stats, self.locale))
    }
}
