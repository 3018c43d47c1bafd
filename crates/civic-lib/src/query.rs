//! Derived views and status counters.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Issue, Status};

/// Active category filter and free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    /// Exact category match; `None` passes everything.
    pub category: Option<Category>,
    /// Case-insensitive substring of title or location; blank passes everything.
    pub query: String,
}

impl ViewFilter {
    /// Whether `issue` passes both constraints.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if self.category.is_some_and(|category| category != issue.category) {
            return false;
        }

        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        issue.title.to_lowercase().contains(&query) || issue.location.to_lowercase().contains(&query)
    }
}

/// Filter `issues`, keeping stored order.
#[must_use]
pub fn derive_view<'a>(issues: &'a [Issue], filter: &ViewFilter) -> Vec<&'a Issue> {
    issues.iter().filter(|i| filter.matches(i)).collect()
}

/// Issue counts per status over a whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounters {
    pub new: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounters {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.new + self.in_progress + self.resolved
    }

    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::New => self.new,
            Status::InProgress => self.in_progress,
            Status::Resolved => self.resolved,
        }
    }
}

/// Count every issue by status. Filters never apply here.
#[must_use]
pub fn compute_counters(issues: &[Issue]) -> StatusCounters {
    issues
        .iter()
        .fold(StatusCounters::default(), |mut acc, issue| {
            match issue.status {
                Status::New => acc.new += 1,
                Status::InProgress => acc.in_progress += 1,
                Status::Resolved => acc.resolved += 1,
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn issue(id: u64, title: &str, location: &str, category: Category, status: Status) -> Issue {
        Issue {
            id,
            title: title.to_string(),
            description: String::new(),
            location: location.to_string(),
            category,
            status,
            created_at: Utc::now(),
            image: None,
            comments: Vec::new(),
        }
    }

    fn sample() -> Vec<Issue> {
        vec![
            issue(1, "Deep pothole", "Main St", Category::Pothole, Status::New),
            issue(2, "Streetlight out", "Oak Ave", Category::Lighting, Status::InProgress),
            issue(3, "Flickering lamp", "Main St", Category::Lighting, Status::Resolved),
            issue(4, "Overflowing bin", "Pine Rd", Category::Garbage, Status::New),
        ]
    }

    fn ids(view: &[&Issue]) -> Vec<u64> {
        view.iter().map(|i| i.id).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let issues = sample();
        let view = derive_view(&issues, &ViewFilter::default());
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_filter_is_exact() {
        let issues = sample();
        let filter = ViewFilter {
            category: Some(Category::Lighting),
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&issues, &filter)), vec![2, 3]);
    }

    #[test]
    fn search_matches_title_or_location_case_insensitively() {
        let issues = sample();
        let by_location = ViewFilter {
            query: "  MAIN ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&issues, &by_location)), vec![1, 3]);

        let by_title = ViewFilter {
            query: "bin".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&derive_view(&issues, &by_title)), vec![4]);
    }

    #[test]
    fn search_ignores_description() {
        let mut issues = sample();
        issues[0].description = "zebra crossing".to_string();
        let filter = ViewFilter {
            query: "zebra".to_string(),
            ..Default::default()
        };
        assert!(derive_view(&issues, &filter).is_empty());
    }

    #[test]
    fn filters_compose_with_and() {
        let issues = sample();
        let filter = ViewFilter {
            category: Some(Category::Lighting),
            query: "main".to_string(),
        };
        assert_eq!(ids(&derive_view(&issues, &filter)), vec![3]);
    }

    #[test]
    fn counters_cover_whole_collection() {
        let counters = compute_counters(&sample());
        assert_eq!(
            counters,
            StatusCounters {
                new: 2,
                in_progress: 1,
                resolved: 1
            }
        );
        assert_eq!(counters.total(), 4);
        assert_eq!(counters.get(Status::Resolved), 1);
    }

    fn arb_issue() -> impl Strategy<Value = Issue> {
        (
            any::<u64>(),
            "[a-zA-Z ]{0,12}",
            "[a-zA-Z ]{0,12}",
            prop::sample::select(Category::ALL.to_vec()),
            prop::sample::select(Status::ALL.to_vec()),
        )
            .prop_map(|(id, title, location, category, status)| {
                issue(id, &title, &location, category, status)
            })
    }

    proptest! {
        #[test]
        fn view_is_ordered_subsequence_satisfying_filter(
            issues in prop::collection::vec(arb_issue(), 0..24),
            category in prop::option::of(prop::sample::select(Category::ALL.to_vec())),
            query in "[a-zA-Z]{0,3}",
        ) {
            let filter = ViewFilter { category, query: query.clone() };
            let view = derive_view(&issues, &filter);

            let mut cursor = issues.iter();
            for shown in &view {
                prop_assert!(cursor.any(|i| std::ptr::eq(i, *shown)));
                if let Some(c) = category {
                    prop_assert_eq!(shown.category, c);
                }
                let q = query.to_lowercase();
                prop_assert!(
                    shown.title.to_lowercase().contains(&q)
                        || shown.location.to_lowercase().contains(&q)
                );
            }
        }

        #[test]
        fn counters_partition_collection(issues in prop::collection::vec(arb_issue(), 0..24)) {
            let counters = compute_counters(&issues);
            prop_assert_eq!(counters.total(), issues.len());
            for status in Status::ALL {
                prop_assert_eq!(
                    counters.get(status),
                    issues.iter().filter(|i| i.status == status).count()
                );
            }
        }
    }
}
