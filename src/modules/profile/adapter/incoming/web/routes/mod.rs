mod about;
mod portfolio;

pub use about::{get_about_handler, update_about_handler, AboutBody, AboutRequest};
pub use portfolio::{get_contact_details_handler, get_portfolio_handler, update_portfolio_handler};
#[doc(hidden)]
pub use about::{__path_get_about_handler, __path_update_about_handler};
#[doc(hidden)]
pub use portfolio::{
    __path_get_contact_details_handler, __path_get_portfolio_handler,
    __path_update_portfolio_handler,
};
