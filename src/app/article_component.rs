//! Article component facade
//!
//! Manages a load-on-init / clear-on-destroy lifecycle around a single
//! article fetch. The hazard is teardown racing a pending fetch: the
//! destroyed flag is checked at the point the fetch settles, not at the
//! point it was issued, so a late-arriving response can never resurrect
//! state the user already navigated away from. The in-flight request
//! itself is not cancelled; only its effect on local state is
//! suppressed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{Article, ArticleId};
use crate::domain::ports::{ArticleApi, UserMessenger};

#[derive(Default)]
struct ComponentState {
    article: Option<Article>,
    loading: bool,
    confirm_delete_visible: bool,
}

/// Query/lifecycle facade around a single article
pub struct ArticleComponent<A, M>
where
    A: ArticleApi,
    M: UserMessenger,
{
    api: Arc<A>,
    messenger: Arc<M>,
    article_id: ArticleId,
    state: Mutex<ComponentState>,
    destroyed: AtomicBool,
}

impl<A, M> ArticleComponent<A, M>
where
    A: ArticleApi,
    M: UserMessenger,
{
    pub fn new(api: Arc<A>, messenger: Arc<M>, article_id: ArticleId) -> Self {
        Self {
            api,
            messenger,
            article_id,
            state: Mutex::new(ComponentState::default()),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Fetch the article. Issues exactly one `get`; on settlement the
    /// destroyed flag decides whether the result may touch local state.
    /// `loading` drops back to `false` either way.
    pub async fn initialize(&self) {
        self.lock_state().loading = true;

        match self.api.get(self.article_id).await {
            Ok(article) => {
                if !self.destroyed() {
                    self.lock_state().article = Some(article);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, id = %self.article_id, "article fetch failed");
                if !self.destroyed() {
                    self.messenger.error(&format!(
                        "Could not fetch article id: '{}'. Please try again.",
                        self.article_id
                    ));
                }
            }
        }

        self.lock_state().loading = false;
    }

    /// Tear the component down. Clears the article synchronously; any
    /// fetch still in flight is left to complete and gets suppressed at
    /// settlement.
    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::SeqCst);

        let mut state = self.lock_state();
        state.article = None;
        state.confirm_delete_visible = false;
    }

    /// Ask the user to confirm deleting the article
    pub fn request_delete(&self) {
        self.lock_state().confirm_delete_visible = true;
    }

    /// Dismiss the confirmation dialog without deleting
    pub fn cancel_delete(&self) {
        self.lock_state().confirm_delete_visible = false;
    }

    /// Delete the article after the user confirmed. The outcome is
    /// reported through the messenger, never raised.
    pub async fn confirm_delete(&self) {
        self.lock_state().confirm_delete_visible = false;

        match self.api.delete(self.article_id).await {
            Ok(()) => {
                if !self.destroyed() {
                    self.messenger.info("Article successfully deleted");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, id = %self.article_id, "article delete failed");
                if !self.destroyed() {
                    self.messenger.error(&format!(
                        "Could not delete article id: '{}'. Please try again.",
                        self.article_id
                    ));
                }
            }
        }
    }

    pub fn article(&self) -> Option<Article> {
        self.lock_state().article.clone()
    }

    pub fn loading(&self) -> bool {
        self.lock_state().loading
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    pub fn delete_confirmation_visible(&self) -> bool {
        self.lock_state().confirm_delete_visible
    }

    fn lock_state(&self) -> MutexGuard<'_, ComponentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
