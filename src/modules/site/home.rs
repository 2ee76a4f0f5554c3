use std::sync::Arc;

use tracing::debug;

use crate::client::{
    api::{ContentApi, ProfileApi},
    notice::Notice,
    scope::ScreenScope,
    screen_state::ScreenState,
};
use crate::content::application::domain::{
    ArticleEntry, CertificationEntry, ExperienceEntry, Record, TestimonialEntry,
};
use crate::profile::application::domain::PortfolioProfile;

/// Everything the home page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub profile: PortfolioProfile,
    pub experience: Vec<Record<ExperienceEntry>>,
    pub certifications: Vec<Record<CertificationEntry>>,
    pub testimonials: Vec<Record<TestimonialEntry>>,
    pub articles: Vec<Record<ArticleEntry>>,
}

pub struct HomePage<A> {
    api: Arc<A>,
    scope: ScreenScope,
    state: ScreenState<HomeData>,
}

impl<A: ProfileApi + ContentApi> HomePage<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            state: ScreenState::Loading,
        }
    }

    pub async fn mount(api: Arc<A>) -> Self {
        let mut page = Self::new(api);
        page.load().await;
        page
    }

    /// Runs the five fetches together. The page is ready only if all succeed.
    pub async fn load(&mut self) {
        self.state = ScreenState::Loading;
        let api = self.api.as_ref();
        let fetches = async {
            tokio::try_join!(
                api.fetch_portfolio(),
                api.list::<ExperienceEntry>(),
                api.list::<CertificationEntry>(),
                api.list::<TestimonialEntry>(),
                api.list::<ArticleEntry>(),
            )
        };

        let Ok(result) = self.scope.run(fetches).await else {
            return;
        };

        self.state = match result {
            Ok((profile, experience, certifications, testimonials, articles)) => {
                ScreenState::Ready(HomeData {
                    profile,
                    experience,
                    certifications,
                    testimonials,
                    articles,
                })
            }
            Err(e) => {
                debug!(error = %e, "Home page failed to load");
                ScreenState::LoadError(Notice::from_error("Failed to load portfolio data", &e))
            }
        };
    }

    /// Reloads when the page becomes visible again, e.g. after a visit to the admin area.
    pub async fn on_visibility_change(&mut self, visible: bool) {
        if visible {
            self.load().await;
        }
    }

    pub fn state(&self) -> &ScreenState<HomeData> {
        &self.state
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }
}
