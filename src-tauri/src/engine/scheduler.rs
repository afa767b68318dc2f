use std::time::Duration;

use chrono::Utc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::holding::Holding;
use crate::models::insight::PublishedInsights;
use crate::models::news::NewsItem;

use super::insights::generate_insights;
use super::relevance::filter_relevant;

/// Runs insight generation behind an optional delay and publishes the result
/// of the most recent request only.
///
/// Every request (and every input change reported through [`invalidate`])
/// takes a new ticket. A request whose ticket is no longer the latest is
/// dropped, whether it is still waiting out the delay or has just finished
/// computing, so an older request can never overwrite a newer report.
///
/// [`invalidate`]: InsightScheduler::invalidate
pub struct InsightScheduler {
    delay: Duration,
    latest_ticket: watch::Sender<u64>,
    published: Mutex<Option<PublishedInsights>>,
}

impl InsightScheduler {
    pub fn new(delay: Duration) -> Self {
        let (latest_ticket, _) = watch::channel(0);
        InsightScheduler {
            delay,
            latest_ticket,
            published: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Take a ticket for a new request, superseding all older ones.
    pub fn request(&self) -> u64 {
        let mut ticket = 0;
        self.latest_ticket.send_modify(|latest| {
            *latest += 1;
            ticket = *latest;
        });
        ticket
    }

    /// Inputs changed: drop whatever is pending.
    pub fn invalidate(&self) {
        let ticket = self.request();
        debug!("Insight inputs changed, pending requests before #{} dropped", ticket);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        *self.latest_ticket.borrow() == ticket
    }

    /// Request and run in one step.
    pub async fn generate(
        &self,
        news: Vec<NewsItem>,
        holdings: Vec<Holding>,
    ) -> Result<PublishedInsights, AppError> {
        let ticket = self.request();
        self.run(ticket, news, holdings).await
    }

    /// Wait out the delay, compute over the captured snapshot and publish if
    /// `ticket` is still the latest request.
    pub async fn run(
        &self,
        ticket: u64,
        news: Vec<NewsItem>,
        holdings: Vec<Holding>,
    ) -> Result<PublishedInsights, AppError> {
        debug!("Insight request #{}: {} news, {} holdings", ticket, news.len(), holdings.len());

        if !self.delay.is_zero() {
            let mut latest = self.latest_ticket.subscribe();
            let superseded = async move {
                // Only errors once the sender is dropped, which cannot happen while `self` lives.
                let _ = latest.wait_for(|latest| *latest != ticket).await;
            };
            tokio::select! {
                _ = tokio::time::sleep(self.delay) => {}
                _ = superseded => {
                    info!("Insight request #{} superseded while waiting", ticket);
                    return Err(AppError::InsightsSuperseded);
                }
            }
        }

        if !self.is_current(ticket) {
            info!("Insight request #{} superseded", ticket);
            return Err(AppError::InsightsSuperseded);
        }

        let filtered = filter_relevant(&news, &holdings);
        let report = generate_insights(&filtered, &holdings);

        let mut slot = self.published.lock().await;
        let newer_published = slot.as_ref().is_some_and(|p| p.ticket >= ticket);
        if !self.is_current(ticket) || newer_published {
            info!("Insight request #{} superseded before publishing", ticket);
            return Err(AppError::InsightsSuperseded);
        }

        let published = PublishedInsights {
            ticket,
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            report,
        };
        *slot = Some(published.clone());

        info!(
            "Insight request #{} published: {} insights, market {:?}",
            ticket,
            published.report.insights.len(),
            published.report.market_sentiment
        );
        Ok(published)
    }

    /// Last published report, if any.
    pub async fn latest(&self) -> Option<PublishedInsights> {
        self.published.lock().await.clone()
    }
}
