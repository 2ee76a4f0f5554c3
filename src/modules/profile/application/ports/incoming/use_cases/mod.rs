mod get_portfolio;
mod update_profile;

pub use get_portfolio::{GetPortfolioUseCase, ProfileError};
pub use update_profile::{UpdateProfileError, UpdateProfileUseCase};
