use std::sync::Arc;

use tracing::info;

use super::require_token;
use crate::client::{
    api::ProfileApi, auth_session::AuthSession, notice::Notice, scope::ScreenScope,
    screen_state::ScreenState,
};

/// Editor for the single about text.
pub struct AboutScreen<A: ProfileApi> {
    api: Arc<A>,
    scope: ScreenScope,
    state: ScreenState<String>,
    draft: String,
    saving: bool,
    notice: Option<Notice>,
}

impl<A: ProfileApi> AboutScreen<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            state: ScreenState::Loading,
            draft: String::new(),
            saving: false,
            notice: None,
        }
    }

    pub async fn mount(api: Arc<A>) -> Self {
        let mut screen = Self::new(api);
        screen.refresh().await;
        screen
    }

    /// Reloads the saved text and resets the draft to it.
    pub async fn refresh(&mut self) {
        let Ok(result) = self.scope.run(self.api.fetch_about()).await else {
            return;
        };

        match result {
            Ok(about) => {
                self.draft = about.clone();
                self.state = ScreenState::Ready(about);
            }
            Err(e) => {
                self.state =
                    ScreenState::LoadError(Notice::from_error("Failed to load about data", &e))
            }
        }
    }

    pub fn state(&self) -> &ScreenState<String> {
        &self.state
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Draft differs from what the server last returned.
    pub fn is_dirty(&self) -> bool {
        self.state.ready().is_some_and(|saved| *saved != self.draft)
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub async fn save(&mut self, session: &AuthSession) {
        let token = match require_token(session) {
            Ok(token) => token,
            Err(notice) => {
                self.notice = Some(notice);
                return;
            }
        };

        self.saving = true;
        let outcome = self.scope.run(self.api.update_about(&self.draft, token)).await;
        self.saving = false;

        let Ok(result) = outcome else {
            return;
        };

        self.notice = Some(match result {
            Ok(saved) => {
                info!("About section updated");
                self.draft = saved.clone();
                self.state = ScreenState::Ready(saved);
                Notice::new("About section updated successfully!")
            }
            Err(e) => Notice::from_error("Failed to update about section", &e),
        });
    }
}
