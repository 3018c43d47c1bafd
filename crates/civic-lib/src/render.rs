//! Rendering pipeline: issues to display-ready view models.
//!
//! Everything here is pure. Writing a [`ListView`] somewhere (terminal,
//! JSON, a web page) is the caller's side effect.

use serde::Serialize;

use crate::model::{Category, Issue, IssueId, Status};
use crate::util::{format_time, format_timestamp};

/// Default map search endpoint; the urlencoded location is appended.
pub const DEFAULT_MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Placeholder shown when the derived view is empty.
pub const EMPTY_PLACEHOLDER: &str = "No issues found.";

/// A user action on a card, keyed by the issue it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CardAction {
    CycleStatus { id: IssueId },
    Delete { id: IssueId },
    AddComment { id: IssueId, text: String },
    OpenImage { id: IssueId },
    OpenMap { id: IssueId },
}

impl CardAction {
    #[must_use]
    pub const fn issue_id(&self) -> IssueId {
        match self {
            Self::CycleStatus { id }
            | Self::Delete { id }
            | Self::AddComment { id, .. }
            | Self::OpenImage { id }
            | Self::OpenMap { id } => *id,
        }
    }
}

/// One rendered comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub text: String,
    pub posted_at: String,
}

/// One rendered issue card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: IssueId,
    pub category: Category,
    pub category_badge: String,
    pub status: Status,
    pub status_label: String,
    pub status_class: String,
    pub title: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: String,
    pub map_url: String,
    pub comments: Vec<CommentView>,
}

impl CardView {
    /// Payload-free actions this card offers, in display order.
    #[must_use]
    pub fn actions(&self) -> Vec<CardAction> {
        let id = self.id;
        let mut actions = vec![CardAction::CycleStatus { id }];
        if self.image.is_some() {
            actions.push(CardAction::OpenImage { id });
        }
        actions.push(CardAction::OpenMap { id });
        actions.push(CardAction::Delete { id });
        actions
    }

    /// The action submitted by this card's comment box.
    #[must_use]
    pub fn comment_action(&self, text: impl Into<String>) -> CardAction {
        CardAction::AddComment {
            id: self.id,
            text: text.into(),
        }
    }
}

/// The display region: cards, or a placeholder when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
    Empty { message: String },
    Cards { cards: Vec<CardView> },
}

impl ListView {
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards { cards } => cards.as_slice(),
        }
    }
}

/// Card renderer; owns the map search endpoint.
#[derive(Debug, Clone)]
pub struct Renderer {
    map_search_base: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_SEARCH_BASE)
    }
}

impl Renderer {
    #[must_use]
    pub fn new(map_search_base: impl Into<String>) -> Self {
        Self {
            map_search_base: map_search_base.into(),
        }
    }

    /// Map search URL for a free-text location.
    #[must_use]
    pub fn map_url(&self, location: &str) -> String {
        format!("{}{}", self.map_search_base, urlencoding::encode(location))
    }

    #[must_use]
    pub fn card(&self, issue: &Issue) -> CardView {
        CardView {
            id: issue.id,
            category: issue.category,
            category_badge: issue.category.as_str().to_string(),
            status: issue.status,
            status_label: issue.status.as_str().to_string(),
            status_class: issue.status.css_class(),
            title: issue.title.clone(),
            location: issue.location.clone(),
            description: issue.description.clone(),
            image: issue.image.clone(),
            created_at: format_timestamp(issue.created_at),
            map_url: self.map_url(&issue.location),
            comments: issue
                .comments
                .iter()
                .map(|c| CommentView {
                    text: c.text.clone(),
                    posted_at: format_time(c.posted_at),
                })
                .collect(),
        }
    }

    /// Full replacement of the display region for a derived view.
    #[must_use]
    pub fn list(&self, view: &[&Issue]) -> ListView {
        if view.is_empty() {
            return ListView::Empty {
                message: EMPTY_PLACEHOLDER.to_string(),
            };
        }
        ListView::Cards {
            cards: view.iter().map(|issue| self.card(issue)).collect(),
        }
    }
}

/// [`Renderer::card`] with the default map endpoint.
#[must_use]
pub fn render_card(issue: &Issue) -> CardView {
    Renderer::default().card(issue)
}
