mod content_routes;

pub use content_routes::{
    configure_content_routes, create_content_handler, delete_content_handler,
    list_content_handler, update_content_handler, ContentSlot, DeleteRecordRequest,
};
