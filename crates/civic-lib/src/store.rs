//! In-memory issue store with write-through persistence.
//!
//! The collection is an insertion-ordered `Vec`; that order is the display
//! order before filtering. Every mutation writes the complete collection
//! back through the [`Persistence`] adapter. If that write fails the
//! mutation is undone, so memory and storage never disagree.

use chrono::{DateTime, Utc};

use crate::error::{CivicError, Result};
use crate::kv::KeyValueStore;
use crate::model::{Comment, Issue, IssueDraft, IssueId, Status};
use crate::persist::Persistence;
use crate::util::next_id;

/// Owned, ordered collection of issues.
#[derive(Debug)]
pub struct IssueStore<S> {
    issues: Vec<Issue>,
    persistence: Persistence<S>,
    last_id: Option<IssueId>,
}

impl<S: KeyValueStore> IssueStore<S> {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Load the collection once from the backend.
    ///
    /// A missing or corrupt collection yields an empty store.
    #[must_use]
    pub fn open(backend: S) -> Self {
        let persistence = Persistence::new(backend);
        let issues = persistence.load_issues();
        let last_id = issues.iter().map(|i| i.id).max();
        Self {
            issues,
            persistence,
            last_id,
        }
    }

    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut Persistence<S> {
        &mut self.persistence
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a new issue at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if a required text field is blank, or the
    /// persistence error if the collection cannot be written.
    pub fn create(&mut self, draft: IssueDraft) -> Result<Issue> {
        self.create_at(draft, Utc::now())
    }

    fn create_at(&mut self, draft: IssueDraft, now: DateTime<Utc>) -> Result<Issue> {
        let title = required("title", &draft.title)?;
        let description = required("description", &draft.description)?;
        let location = required("location", &draft.location)?;

        let id = next_id(now, self.last_id);
        let issue = Issue {
            id,
            title,
            description,
            location,
            category: draft.category,
            status: Status::New,
            created_at: now,
            image: draft
                .image
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
            comments: Vec::new(),
        };

        self.issues.push(issue.clone());
        if let Err(e) = self.persist() {
            self.issues.pop();
            return Err(e);
        }
        self.last_id = Some(id);

        tracing::debug!(id, category = %issue.category, "created issue");
        Ok(issue)
    }

    /// Delete an issue. Returns `false` (and writes nothing) if absent.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the collection cannot be written.
    pub fn delete(&mut self, id: IssueId) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "delete: no such issue");
            return Ok(false);
        };

        let removed = self.issues.remove(pos);
        if let Err(e) = self.persist() {
            self.issues.insert(pos, removed);
            return Err(e);
        }

        tracing::debug!(id, "deleted issue");
        Ok(true)
    }

    /// Advance an issue one step along the status cycle.
    ///
    /// Returns the new status, or `None` if the issue is absent.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the collection cannot be written.
    pub fn cycle_status(&mut self, id: IssueId) -> Result<Option<Status>> {
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "cycle_status: no such issue");
            return Ok(None);
        };

        let old = self.issues[pos].status;
        let new = old.next();
        self.issues[pos].status = new;
        if let Err(e) = self.persist() {
            self.issues[pos].status = old;
            return Err(e);
        }

        tracing::debug!(id, from = %old, to = %new, "status changed");
        Ok(Some(new))
    }

    /// Append a comment. Blank text or an absent issue is a no-op (`None`).
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the collection cannot be written.
    pub fn add_comment(&mut self, id: IssueId, text: &str) -> Result<Option<Comment>> {
        self.add_comment_at(id, text, Utc::now())
    }

    fn add_comment_at(
        &mut self,
        id: IssueId,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Comment>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let Some(pos) = self.position(id) else {
            tracing::debug!(id, "add_comment: no such issue");
            return Ok(None);
        };

        let comment = Comment {
            text: text.to_string(),
            posted_at: now,
        };
        self.issues[pos].comments.push(comment.clone());
        if let Err(e) = self.persist() {
            self.issues[pos].comments.pop();
            return Err(e);
        }

        tracing::debug!(id, "comment added");
        Ok(Some(comment))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All issues in insertion order.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub fn get(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// Like [`Self::get`] but absence is an error.
    ///
    /// # Errors
    ///
    /// Returns `IssueNotFound` if no issue has this id.
    pub fn require(&self, id: IssueId) -> Result<&Issue> {
        self.get(id).ok_or(CivicError::IssueNotFound { id })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn position(&self, id: IssueId) -> Option<usize> {
        self.issues.iter().position(|i| i.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        self.persistence.save_issues(&self.issues)
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CivicError::validation(field, "cannot be empty"));
    }
    Ok(value.to_string())
}
