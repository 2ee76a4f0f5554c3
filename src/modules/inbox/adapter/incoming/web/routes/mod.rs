mod contact_routes;
mod newsletter_routes;

pub use contact_routes::{
    delete_contact_message_handler, list_contact_messages_handler, submit_contact_handler,
    ContactRequest,
};
pub use newsletter_routes::{
    list_subscribers_handler, subscribe_handler, unsubscribe_handler, SubscribeRequest,
};
#[doc(hidden)]
pub use contact_routes::{
    __path_delete_contact_message_handler, __path_list_contact_messages_handler,
    __path_submit_contact_handler,
};
#[doc(hidden)]
pub use newsletter_routes::{
    __path_list_subscribers_handler, __path_subscribe_handler, __path_unsubscribe_handler,
};
