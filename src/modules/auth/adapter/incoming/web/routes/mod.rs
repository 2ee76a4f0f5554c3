mod login_admin;

pub use login_admin::{login_admin_handler, LoginRequestDto, LoginResponse};
#[doc(hidden)]
pub use login_admin::__path_login_admin_handler;
