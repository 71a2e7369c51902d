use std::time::Duration;

use tokio::task::JoinHandle;

use crate::catalog::Region;

pub const MAX_SUGGESTIONS: usize = 5;
pub const MIN_QUERY_LEN: usize = 2;
pub const DISMISS_GRACE: Duration = Duration::from_millis(200);

// Autocomplete over the static place directory. Queries shorter than two
// characters and unknown regions both come back empty; callers derive panel
// visibility from emptiness.
pub fn suggest(query: &str, region: &str, regions: &[Region]) -> Vec<String> {
    if query.chars().count() < MIN_QUERY_LEN {
        return vec![];
    }

    let places = match regions.iter().find(|r| r.name == region) {
        Some(region) => &region.places,
        None => return vec![],
    };

    let needle = query.to_ascii_lowercase();

    places
        .iter()
        .filter(|place| place.to_ascii_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

// Deferred close of the suggestion panel after the input blurs. The grace
// period lets a click on a suggestion land before the panel goes away; the
// click path cancels the timer. Dropping the timer also cancels it.
pub struct DismissTimer {
    handle: JoinHandle<()>,
}

impl DismissTimer {
    pub fn start<F>(grace: Duration, on_dismiss: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            on_dismiss();
        });

        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn vi_matches_victoria_island() {
        let result = suggest("vi", "Lagos", &catalog::regions());
        assert_eq!(result, ["Victoria Island"]);
    }

    #[test]
    fn single_character_queries_are_suppressed() {
        let result = suggest("a", "Lagos", &catalog::regions());
        assert!(result.is_empty());
    }

    #[test]
    fn matches_keep_directory_order() {
        let result = suggest("mile", "Rivers", &catalog::regions());
        assert_eq!(result, ["Mile 1", "Mile 2", "Mile 3"]);
    }

    #[test]
    fn unknown_regions_have_no_suggestions() {
        let result = suggest("mile", "Atlantis", &catalog::regions());
        assert!(result.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_and_results_keep_casing() {
        let result = suggest("VICTORIA", "Lagos", &catalog::regions());
        assert_eq!(result, ["Victoria Island"]);
    }

    #[test]
    fn matches_are_capped() {
        let regions = vec![Region {
            name: "Campus".into(),
            places: (1..=7).map(|n| format!("Gate {}", n)).collect(),
        }];

        let result = suggest("gate", "Campus", &regions);

        assert_eq!(result.len(), MAX_SUGGESTIONS);
        assert_eq!(result[0], "Gate 1");
        assert_eq!(result[4], "Gate 5");
    }

    #[test]
    fn repeated_queries_agree() {
        let regions = catalog::regions();

        assert_eq!(
            suggest("ik", "Lagos", &regions),
            suggest("ik", "Lagos", &regions)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn panel_dismisses_after_the_grace_period() {
        let dismissed = Arc::new(AtomicBool::new(false));
        let flag = dismissed.clone();

        let timer = DismissTimer::start(DISMISS_GRACE, move || flag.store(true, Ordering::SeqCst));

        tokio::time::sleep(DISMISS_GRACE * 2).await;

        assert!(dismissed.load(Ordering::SeqCst));
        drop(timer);
    }

    #[tokio::test(start_paused = true)]
    async fn click_before_the_grace_period_keeps_the_panel() {
        let dismissed = Arc::new(AtomicBool::new(false));
        let flag = dismissed.clone();

        let timer = DismissTimer::start(DISMISS_GRACE, move || flag.store(true, Ordering::SeqCst));

        tokio::time::sleep(DISMISS_GRACE / 2).await;
        timer.cancel();
        tokio::time::sleep(DISMISS_GRACE * 2).await;

        assert!(!dismissed.load(Ordering::SeqCst));
    }

    #[test]
    fn cancelling_twice_is_harmless() {
        tokio_test::block_on(async {
            let timer = DismissTimer::start(Duration::from_millis(1), || {});

            timer.cancel();
            timer.cancel();
        });
    }
}
