use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::AdminAccount,
    ports::outgoing::{AdminDirectory, AdminDirectoryError},
};

/// Single administrator taken from configuration.
#[derive(Debug, Clone)]
pub struct StaticAdminDirectory {
    account: AdminAccount,
}

impl StaticAdminDirectory {
    pub fn new(account: AdminAccount) -> Self {
        Self { account }
    }
}

#[async_trait]
impl AdminDirectory for StaticAdminDirectory {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminDirectoryError> {
        Ok((self.account.email == email).then(|| self.account.clone()))
    }
}
