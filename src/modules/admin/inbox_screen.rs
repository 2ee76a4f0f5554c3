use std::fmt::Debug;
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::info;

use super::require_token;
use crate::client::{
    api::{ApiError, InboxApi},
    auth_session::AuthSession,
    notice::Notice,
    scope::ScreenScope,
    screen_state::ScreenState,
};
use crate::inbox::application::domain::{ContactMessage, NewsletterSubscriber};

/// One of the read-only admin inboxes.
pub trait InboxFeed {
    type Item: Clone + Debug + PartialEq + Send;

    /// Plural, used in the empty and load-failure texts.
    const LIST_KEY: &'static str;
    const LABEL: &'static str;

    fn id(item: &Self::Item) -> i64;

    fn fetch<'a, A: InboxApi>(
        api: &'a A,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Vec<Self::Item>, ApiError>>;

    fn remove<'a, A: InboxApi>(
        api: &'a A,
        id: i64,
        token: &'a str,
    ) -> BoxFuture<'a, Result<(), ApiError>>;
}

/// Messages sent through the public contact form, newest first.
#[derive(Debug)]
pub enum ContactMessages {}

/// Newsletter subscribers in subscription order.
#[derive(Debug)]
pub enum Subscribers {}

impl InboxFeed for ContactMessages {
    type Item = ContactMessage;
    const LIST_KEY: &'static str = "messages";
    const LABEL: &'static str = "Message";

    fn id(item: &ContactMessage) -> i64 {
        item.id
    }

    fn fetch<'a, A: InboxApi>(
        api: &'a A,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Vec<ContactMessage>, ApiError>> {
        api.list_contact_messages(token)
    }

    fn remove<'a, A: InboxApi>(
        api: &'a A,
        id: i64,
        token: &'a str,
    ) -> BoxFuture<'a, Result<(), ApiError>> {
        api.delete_contact_message(id, token)
    }
}

impl InboxFeed for Subscribers {
    type Item = NewsletterSubscriber;
    const LIST_KEY: &'static str = "subscribers";
    const LABEL: &'static str = "Subscriber";

    fn id(item: &NewsletterSubscriber) -> i64 {
        item.id
    }

    fn fetch<'a, A: InboxApi>(
        api: &'a A,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Vec<NewsletterSubscriber>, ApiError>> {
        api.list_subscribers(token)
    }

    fn remove<'a, A: InboxApi>(
        api: &'a A,
        id: i64,
        token: &'a str,
    ) -> BoxFuture<'a, Result<(), ApiError>> {
        api.delete_subscriber(id, token)
    }
}

/// Admin list of contact messages or subscribers with confirmed delete.
pub struct InboxScreen<K: InboxFeed, A: InboxApi> {
    api: Arc<A>,
    scope: ScreenScope,
    state: ScreenState<Vec<K::Item>>,
    pending_delete: Option<i64>,
    notice: Option<Notice>,
}

pub type MessagesScreen<A> = InboxScreen<ContactMessages, A>;
pub type SubscribersScreen<A> = InboxScreen<Subscribers, A>;

impl<K: InboxFeed, A: InboxApi> InboxScreen<K, A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            scope: ScreenScope::new(),
            state: ScreenState::Loading,
            pending_delete: None,
            notice: None,
        }
    }

    pub async fn mount(api: Arc<A>, session: &AuthSession) -> Self {
        let mut screen = Self::new(api);
        screen.refresh(session).await;
        screen
    }

    pub async fn refresh(&mut self, session: &AuthSession) {
        let token = match require_token(session) {
            Ok(token) => token,
            Err(notice) => {
                self.state = ScreenState::LoadError(notice);
                return;
            }
        };

        let Ok(result) = self.scope.run(K::fetch(self.api.as_ref(), token)).await else {
            return;
        };

        self.state = match result {
            Ok(items) => ScreenState::Ready(items),
            Err(e) => ScreenState::LoadError(Notice::from_error(
                &format!("Failed to load {}", K::LIST_KEY),
                &e,
            )),
        };
    }

    pub fn state(&self) -> &ScreenState<Vec<K::Item>> {
        &self.state
    }

    pub fn items(&self) -> &[K::Item] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn empty_message(&self) -> Option<String> {
        match &self.state {
            ScreenState::Ready(items) if items.is_empty() => {
                Some(format!("No {} yet.", K::LIST_KEY))
            }
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn request_delete(&mut self, id: i64) {
        if self.items().iter().any(|item| K::id(item) == id) {
            self.pending_delete = Some(id);
        }
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

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

        let Ok(result) = self.scope.run(K::remove(self.api.as_ref(), id, token)).await else {
            return;
        };

        self.notice = Some(match result {
            Ok(()) => {
                info!("{} {} deleted", K::LABEL, id);
                Notice::new(format!("{} deleted successfully!", K::LABEL))
            }
            Err(e) => Notice::from_error(
                &format!("Failed to delete {}", K::LABEL.to_lowercase()),
                &e,
            ),
        });
        self.refresh(session).await;
    }
}
