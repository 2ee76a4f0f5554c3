mod entities;

pub use entities::{PortfolioProfile, ProfileDetails, ProfileUpdate, ProfileValidationError};
