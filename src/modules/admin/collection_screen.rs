use std::sync::Arc;

use tracing::{debug, info};

use super::form::{empty_form, fill_form, parse_form, AdminForm, FormValues};
use super::require_token;
use crate::client::{
    api::ContentApi, auth_session::AuthSession, notice::Notice, scope::ScreenScope,
    screen_state::ScreenState,
};
use crate::content::application::domain::Record;

/// Admin screen for one content collection: list, create, edit, delete.
///
/// Every mutation is followed by a full refetch. Edits and deletes address
/// records by their server id.
pub struct CollectionScreen<T: AdminForm, A: ContentApi> {
    api: Arc<A>,
    scope: ScreenScope,
    state: ScreenState<Vec<Record<T>>>,
    form: FormValues,
    editing: Option<i64>,
    pending_delete: Option<i64>,
    saving: bool,
    notice: Option<Notice>,
}

impl<T: AdminForm, A: ContentApi> CollectionScreen<T, A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            state: ScreenState::Loading,
            form: empty_form::<T>(),
            editing: None,
            pending_delete: None,
            saving: false,
            notice: None,
        }
    }

    /// Creates the screen and runs the initial fetch.
    pub async fn mount(api: Arc<A>) -> Self {
        let mut screen = Self::new(api);
        screen.refresh().await;
        screen
    }

    pub async fn refresh(&mut self) {
        let Ok(result) = self.scope.run(self.api.list::<T>()).await else {
            return;
        };

        match result {
            Ok(records) => self.state = ScreenState::Ready(records),
            Err(e) => {
                debug!(error = %e, "Failed to load {}", T::RESOURCE);
                let notice =
                    Notice::from_error(&format!("Failed to load {} data", T::RESOURCE), &e);
                match self.state {
                    // Keep showing the last good list.
                    ScreenState::Ready(_) => self.notice = Some(notice),
                    _ => self.state = ScreenState::LoadError(notice),
                }
            }
        }
    }

    pub fn state(&self) -> &ScreenState<Vec<Record<T>>> {
        &self.state
    }

    pub fn records(&self) -> &[Record<T>] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Shown in place of an empty list.
    pub fn empty_message(&self) -> Option<String> {
        match &self.state {
            ScreenState::Ready(records) if records.is_empty() => {
                Some(format!("No {} yet.", T::LIST_KEY))
            }
            _ => None,
        }
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.insert(name.to_string(), value.into());
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Loads the record into the form. Returns `false` for an unknown id.
    pub fn start_edit(&mut self, id: i64) -> bool {
        match self.records().iter().find(|r| r.id == id) {
            Some(record) => {
                self.form = fill_form(&record.fields);
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = empty_form::<T>();
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

    /// Creates a record, or updates the one being edited.
    ///
    /// On failure the form keeps its content.
    pub async fn submit(&mut self, session: &AuthSession) {
        let label = T::LABEL.to_lowercase();

        let token = if T::PUBLIC_CREATE && self.editing.is_none() {
            session.token()
        } else {
            match require_token(session) {
                Ok(token) => Some(token),
                Err(notice) => {
                    self.notice = Some(notice);
                    return;
                }
            }
        };

        let fields: T = match parse_form(&self.form) {
            Ok(fields) => fields,
            Err(e) => {
                self.notice = Some(Notice::new(e.to_string()));
                return;
            }
        };

        self.saving = true;
        self.notice = None;
        let outcome = match (self.editing, token) {
            (Some(id), Some(token)) => {
                let record = Record::new(id, fields);
                self.scope
                    .run(self.api.update(&record, token))
                    .await
                    .map(|r| r.map(|_| format!("{} updated successfully!", T::LABEL)))
            }
            (_, token) => self
                .scope
                .run(self.api.create(&fields, token))
                .await
                .map(|r| r.map(|_| format!("{} added successfully!", T::LABEL))),
        };
        self.saving = false;

        let Ok(outcome) = outcome else {
            return;
        };

        match outcome {
            Ok(message) => {
                info!("{}", message);
                self.notice = Some(Notice::new(message));
                self.form = empty_form::<T>();
                self.editing = None;
                self.refresh().await;
            }
            Err(e) => {
                let action = if self.editing.is_some() { "update" } else { "add" };
                self.notice = Some(Notice::from_error(
                    &format!("Failed to {action} {label}"),
                    &e,
                ));
            }
        }
    }

    /// Asks for confirmation before deleting.
    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the confirmed record, then refetches whatever the outcome.
    pub async fn confirm_delete(&mut self, session: &AuthSession) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        let token = match require_token(session) {
            Ok(token) => token,
            Err(notice) => {
                self.notice = Some(notice);
                return;
            }
        };

        let Ok(result) = self.scope.run(self.api.delete::<T>(id, token)).await else {
            return;
        };

        self.notice = Some(match result {
            Ok(()) => {
                info!("{} {} deleted", T::LABEL, id);
                Notice::new(format!("{} deleted successfully!", T::LABEL))
            }
            Err(e) => Notice::from_error(
                &format!("Failed to delete {}", T::LABEL.to_lowercase()),
                &e,
            ),
        });
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.refresh().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::notice::NoticeTone;
    use crate::content::application::domain::{
        ProjectEntry, SkillEntry, TagList, TestimonialEntry,
    };
    use crate::tests::support::fake_api::{FakeApi, ADMIN_TOKEN};
    use std::time::Duration;

    fn admin() -> AuthSession {
        AuthSession::authenticated(ADMIN_TOKEN, "admin@example.com")
    }

    fn project(title: &str) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            technologies: TagList::new(["Rust"]),
            category: "Web".to_string(),
            ..Default::default()
        }
    }

    // ──────────────────────────────────────────────────────────
    // Read
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn mount_loads_the_collection() {
        let api = Arc::new(FakeApi::new());
        api.seed(project("Existing"));

        let screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;

        assert_eq!(screen.records().len(), 1);
        assert_eq!(screen.records()[0].fields.title, "Existing");
        assert_eq!(screen.empty_message(), None);
    }

    #[tokio::test]
    async fn empty_collection_says_none_yet() {
        let api = Arc::new(FakeApi::new());

        let screen = CollectionScreen::<ProjectEntry, _>::mount(api).await;

        assert_eq!(screen.empty_message().as_deref(), Some("No projects yet."));
    }

    #[tokio::test]
    async fn failed_load_is_a_load_error() {
        let api = Arc::new(FakeApi::new());
        api.fail("skills");

        let screen = CollectionScreen::<SkillEntry, _>::mount(api).await;

        match screen.state() {
            ScreenState::LoadError(notice) => assert_eq!(notice.tone, NoticeTone::Error),
            other => panic!("expected load error, got {:?}", other),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Create
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_clears_form_and_refetches() {
        // Arrange
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;
        screen.set_field("title", "Portfolio Site");
        screen.set_field("technologies", "React, Node.js");

        // Act
        screen.submit(&admin()).await;

        // Assert
        assert_eq!(
            api.calls(),
            vec!["GET projects", "POST projects", "GET projects"]
        );
        assert_eq!(screen.records().len(), 1);
        assert_eq!(
            screen.records()[0].fields.technologies,
            TagList::new(["React", "Node.js"])
        );
        assert!(screen.form().values().all(String::is_empty));
        let notice = screen.notice().unwrap();
        assert_eq!(notice.text, "Project added successfully!");
        assert!(notice.is_success());
    }

    #[tokio::test]
    async fn missing_required_field_sends_nothing() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;
        screen.set_field("description", "No title");

        screen.submit(&admin()).await;

        assert_eq!(api.count_calls("POST projects"), 0);
        assert_eq!(screen.notice().unwrap().text, "Title is required");
        assert_eq!(screen.form()["description"], "No title");
    }

    #[tokio::test]
    async fn failed_create_keeps_the_form() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;
        screen.set_field("title", "Portfolio Site");
        api.fail("projects");

        screen.submit(&admin()).await;

        assert_eq!(screen.form()["title"], "Portfolio Site");
        assert_eq!(screen.notice().unwrap().tone, NoticeTone::Error);
        assert!(!screen.is_saving());
    }

    #[tokio::test]
    async fn anonymous_admin_is_asked_to_log_in() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;
        screen.set_field("title", "Portfolio Site");

        screen.submit(&AuthSession::new()).await;

        assert_eq!(api.count_calls("POST projects"), 0);
        assert_eq!(screen.notice().unwrap().text, crate::admin::LOGIN_REQUIRED);
    }

    #[tokio::test]
    async fn skill_level_is_clamped_before_sending() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<SkillEntry, _>::mount(api.clone()).await;
        screen.set_field("name", "Rust");
        screen.set_field("level", "150");

        screen.submit(&admin()).await;

        assert_eq!(api.records::<SkillEntry>()[0].fields.level.value(), 100);
    }

    // ──────────────────────────────────────────────────────────
    // Update
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn edit_prefills_and_updates_by_id() {
        // Arrange
        let api = Arc::new(FakeApi::new());
        api.seed(project("First"));
        let second = api.seed(ProjectEntry {
            technologies: TagList::new(["Rust", "Tokio"]),
            ..project("Second")
        });
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;

        // Act
        assert!(screen.start_edit(second.id));
        let prefilled = screen.form()["technologies"].clone();
        screen.set_field("title", "Second (renamed)");
        screen.submit(&admin()).await;

        // Assert
        assert_eq!(prefilled, "Rust, Tokio");
        let stored = api.records::<ProjectEntry>();
        assert_eq!(stored[0].fields.title, "First");
        assert_eq!(stored[1].id, second.id);
        assert_eq!(stored[1].fields.title, "Second (renamed)");
        assert_eq!(stored[1].fields.technologies, TagList::new(["Rust", "Tokio"]));
        assert_eq!(screen.editing(), None);
        assert_eq!(screen.notice().unwrap().text, "Project updated successfully!");
    }

    #[tokio::test]
    async fn start_edit_with_unknown_id_does_nothing() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api).await;

        assert!(!screen.start_edit(99));
        assert_eq!(screen.editing(), None);
    }

    // ──────────────────────────────────────────────────────────
    // Delete
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_needs_confirmation() {
        let api = Arc::new(FakeApi::new());
        let record = api.seed(project("Doomed"));
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;

        screen.request_delete(record.id);
        screen.cancel_delete();
        screen.confirm_delete(&admin()).await;

        assert_eq!(api.count_calls("DELETE projects"), 0);
        assert_eq!(screen.records().len(), 1);
    }

    #[tokio::test]
    async fn confirmed_delete_refetches() {
        let api = Arc::new(FakeApi::new());
        let keep = api.seed(project("Keep"));
        let doomed = api.seed(project("Doomed"));
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;

        screen.request_delete(doomed.id);
        screen.confirm_delete(&admin()).await;

        assert_eq!(
            screen.records().iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![keep.id]
        );
        assert_eq!(screen.notice().unwrap().text, "Project deleted successfully!");
    }

    #[tokio::test]
    async fn failed_delete_still_refetches() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<ProjectEntry, _>::mount(api.clone()).await;

        screen.request_delete(42);
        screen.confirm_delete(&admin()).await;

        assert_eq!(api.calls(), vec!["GET projects", "DELETE projects", "GET projects"]);
        assert_eq!(screen.notice().unwrap().tone, NoticeTone::Error);
    }

    // ──────────────────────────────────────────────────────────
    // Scope
    // ──────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn closed_screen_ignores_late_results() {
        // Arrange
        let api = Arc::new(FakeApi::new());
        api.seed(project("Existing"));
        api.hold("projects");
        let mut screen = CollectionScreen::<ProjectEntry, _>::new(api.clone());
        let closer = screen.scope().closer();

        // Act
        tokio::join!(screen.refresh(), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            closer.close();
            api.release("projects");
        });

        // Assert
        assert!(screen.state().is_loading());
    }

    // ──────────────────────────────────────────────────────────
    // Public create
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn visitor_testimonial_shows_up_after_admin_refetch() {
        let api = Arc::new(FakeApi::new());
        let mut screen = CollectionScreen::<TestimonialEntry, _>::mount(api.clone()).await;

        api.create(
            &TestimonialEntry {
                name: "Ana".to_string(),
                content: "Great work".to_string(),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
        assert!(screen.records().is_empty());

        screen.refresh().await;
        assert_eq!(screen.records()[0].fields.name, "Ana");
    }
}
