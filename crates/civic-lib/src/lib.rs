//! `civic-lib` - In-process civic issue tracking library.
//!
//! Holds the issue collection in memory and writes it through to a durable
//! key-value store after every mutation. Rendering produces plain view
//! models, so nothing here depends on a UI toolkit.
//!
//! # Quick Start
//!
//! ```no_run
//! use civic_lib::{CardAction, FileKv, IssueForm, Session};
//!
//! let backend = FileKv::open("path/to/.civic/data").unwrap();
//! let mut session = Session::open(backend);
//!
//! // Submit
//! let mut form = IssueForm {
//!     title: "Pothole".into(),
//!     description: "Deep hole near the crossing".into(),
//!     location: "Main St".into(),
//!     category: "Pothole".into(),
//!     image: None,
//! };
//! let issue = session.submit(&mut form).unwrap();
//!
//! // Act on a card
//! session.apply(CardAction::CycleStatus { id: issue.id }).unwrap();
//!
//! // Filter and redraw
//! session.set_search("main");
//! let screen = session.screen();
//! ```

pub mod error;
pub mod intake;
pub mod kv;
pub mod model;
pub mod persist;
pub mod query;
pub mod render;
pub mod session;
pub mod store;
pub mod util;

pub use error::{CivicError, Result, ValidationError};
pub use intake::IssueForm;
pub use kv::{FileKv, KeyValueStore, MemoryKv};
pub use model::{Category, Comment, Issue, IssueDraft, IssueId, Status};
pub use persist::Persistence;
pub use query::{StatusCounters, ViewFilter, compute_counters, derive_view};
pub use render::{CardAction, CardView, ListView, Renderer, render_card};
pub use session::{ActionOutcome, Screen, Session};
pub use store::IssueStore;
