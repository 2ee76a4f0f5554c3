mod contact_messages;
mod newsletter;

pub use contact_messages::{
    DeleteContactMessageUseCase, InboxError, ListContactMessagesUseCase, SubmitContactUseCase,
};
pub use newsletter::{ListSubscribersUseCase, SubscribeError, SubscribeUseCase, UnsubscribeUseCase};
