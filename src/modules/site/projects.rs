use std::sync::Arc;

use crate::client::{
    api::ContentApi, notice::Notice, scope::ScreenScope, screen_state::ScreenState,
};
use crate::content::application::domain::{ProjectEntry, Record};

/// Facet that shows every project.
pub const ALL_CATEGORIES: &str = "All";

/// Public project gallery with category facets.
pub struct ProjectsPage<A: ContentApi> {
    api: Arc<A>,
    scope: ScreenScope,
    state: ScreenState<Vec<Record<ProjectEntry>>>,
    selected: String,
}

impl<A: ContentApi> ProjectsPage<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            state: ScreenState::Loading,
            selected: ALL_CATEGORIES.to_string(),
        }
    }

    pub async fn mount(api: Arc<A>) -> Self {
        let mut page = Self::new(api);
        page.load().await;
        page
    }

    pub async fn load(&mut self) {
        let Ok(result) = self.scope.run(self.api.list::<ProjectEntry>()).await else {
            return;
        };

        self.state = match result {
            Ok(projects) => ScreenState::Ready(projects),
            Err(e) => ScreenState::LoadError(Notice::from_error("Failed to load projects data", &e)),
        };
    }

    pub fn state(&self) -> &ScreenState<Vec<Record<ProjectEntry>>> {
        &self.state
    }

    /// `"All"` followed by each distinct category in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for project in self.state.ready().into_iter().flatten() {
            let category = project.fields.category.as_str();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Filters in memory; never refetches.
    pub fn select(&mut self, category: &str) {
        self.selected = category.to_string();
    }

    pub fn visible(&self) -> Vec<&Record<ProjectEntry>> {
        self.state
            .ready()
            .into_iter()
            .flatten()
            .filter(|p| self.selected == ALL_CATEGORIES || p.fields.category == self.selected)
            .collect()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self.state {
            ScreenState::Ready(_) if self.visible().is_empty() => {
                Some("No projects available in this category.")
            }
            _ => None,
        }
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }
}
