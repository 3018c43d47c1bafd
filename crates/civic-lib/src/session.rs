//! Session controller: one event in, one freshly rendered screen out.
//!
//! Owns the [`IssueStore`], the active [`ViewFilter`], the theme flag and
//! the transient success notice. Every handler runs to completion,
//! including its persistence write, before the next one starts; callers
//! re-render with [`Session::screen`] afterwards.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::{CivicError, Result};
use crate::intake::IssueForm;
use crate::kv::KeyValueStore;
use crate::model::{Category, Comment, Issue, IssueId, Status};
use crate::query::{StatusCounters, ViewFilter, compute_counters, derive_view};
use crate::render::{CardAction, ListView, Renderer};
use crate::store::IssueStore;

/// Message shown after a successful submission.
pub const SUBMITTED_NOTICE: &str = "Issue submitted successfully!";

/// How long the success notice stays up by default.
pub const DEFAULT_NOTICE_SECS: i64 = 2;

/// A transient message with a dismissal deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Everything the display region shows after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub counters: StatusCounters,
    pub list: ListView,
    pub dark: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// What handling a [`CardAction`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    StatusChanged { id: IssueId, status: Status },
    Deleted { id: IssueId },
    Commented { id: IssueId, comment: Comment },
    /// Display the image reference enlarged.
    OpenImage { id: IssueId, image: String },
    /// Navigate to the map search URL.
    OpenMap { id: IssueId, url: String },
    /// Unknown id, blank comment, or no image: nothing happened.
    Ignored { id: IssueId },
}

/// A single user's session over one store.
#[derive(Debug)]
pub struct Session<S> {
    store: IssueStore<S>,
    renderer: Renderer,
    filter: ViewFilter,
    dark: bool,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl<S: KeyValueStore> Session<S> {
    /// Load issues and theme from `backend`.
    #[must_use]
    pub fn open(backend: S) -> Self {
        let store = IssueStore::open(backend);
        let dark = store.persistence().load_theme();
        Self {
            store,
            renderer: Renderer::default(),
            filter: ViewFilter::default(),
            dark,
            notice: None,
            notice_ttl: Duration::seconds(DEFAULT_NOTICE_SECS),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[must_use]
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &IssueStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Submit the form. On success the form is cleared and a notice raised,
    /// unless its deadline would fall outside the representable range.
    ///
    /// # Errors
    ///
    /// Returns validation errors (form untouched) or a persistence error.
    pub fn submit(&mut self, form: &mut IssueForm) -> Result<Issue> {
        let draft = form.validate().inspect_err(|e| {
            tracing::debug!(fields = ?e.invalid_fields(), "submission rejected");
        })?;
        let issue = self.store.create(draft)?;
        form.clear();
        self.notice = Utc::now()
            .checked_add_signed(self.notice_ttl)
            .map(|expires_at| Notice {
                message: SUBMITTED_NOTICE.to_string(),
                expires_at,
            });
        tracing::info!(id = issue.id, "issue submitted");
        Ok(issue)
    }

    /// Dispatch a card action back into the store.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if a mutation cannot be written.
    pub fn apply(&mut self, action: CardAction) -> Result<ActionOutcome> {
        let outcome = match action {
            CardAction::CycleStatus { id } => match self.store.cycle_status(id)? {
                Some(status) => ActionOutcome::StatusChanged { id, status },
                None => ActionOutcome::Ignored { id },
            },
            CardAction::Delete { id } => {
                if self.store.delete(id)? {
                    ActionOutcome::Deleted { id }
                } else {
                    ActionOutcome::Ignored { id }
                }
            }
            CardAction::AddComment { id, text } => match self.store.add_comment(id, &text)? {
                Some(comment) => ActionOutcome::Commented { id, comment },
                None => ActionOutcome::Ignored { id },
            },
            CardAction::OpenImage { id } => self
                .store
                .get(id)
                .and_then(|issue| issue.image.clone())
                .map_or(ActionOutcome::Ignored { id }, |image| {
                    ActionOutcome::OpenImage { id, image }
                }),
            CardAction::OpenMap { id } => self.store.get(id).map_or(
                ActionOutcome::Ignored { id },
                |issue| ActionOutcome::OpenMap {
                    id,
                    url: self.renderer.map_url(&issue.location),
                },
            ),
        };
        tracing::debug!(?outcome, "handled card action");
        Ok(outcome)
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.filter.category = category;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
    }

    /// Set and persist the theme flag.
    ///
    /// # Errors
    ///
    /// Returns a persistence error; the in-memory flag is left unchanged.
    pub fn set_dark(&mut self, dark: bool) -> Result<()> {
        self.store.persistence_mut().save_theme(dark)?;
        self.dark = dark;
        Ok(())
    }

    /// Flip the theme flag, returning the new value.
    ///
    /// # Errors
    ///
    /// Returns a persistence error.
    pub fn toggle_dark(&mut self) -> Result<bool> {
        self.set_dark(!self.dark)?;
        Ok(self.dark)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Issues passing the active filter, in stored order.
    #[must_use]
    pub fn view(&self) -> Vec<&Issue> {
        derive_view(self.store.issues(), &self.filter)
    }

    /// Counters over every issue, ignoring the filter.
    #[must_use]
    pub fn counters(&self) -> StatusCounters {
        compute_counters(self.store.issues())
    }

    /// Render the full screen as of now.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen_at(Utc::now())
    }

    /// Render the full screen as of `now`; an expired notice is omitted.
    #[must_use]
    pub fn screen_at(&self, now: DateTime<Utc>) -> Screen {
        Screen {
            counters: self.counters(),
            list: self.renderer.list(&self.view()),
            dark: self.dark,
            notice: self
                .notice
                .as_ref()
                .filter(|n| now < n.expires_at)
                .map(|n| n.message.clone()),
        }
    }

    /// Look up an issue, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound`.
    pub fn require(&self, id: IssueId) -> Result<&Issue> {
        self.store.require(id)
    }
}

/// Parse a user-supplied issue id.
///
/// # Errors
///
/// Returns `InvalidId` if `input` is not a non-negative integer.
pub fn parse_id(input: &str) -> Result<IssueId> {
    input
        .trim()
        .parse()
        .map_err(|_| CivicError::InvalidId {
            id: input.to_string(),
        })
}
