use std::sync::Arc;

use crate::content::application::{
    domain::ContentResource,
    ports::{
        incoming::use_cases::{
            CreateContentUseCase, DeleteContentUseCase, ListContentUseCase, UpdateContentUseCase,
        },
        outgoing::ContentRepository,
    },
    services::ContentService,
};

/// The four CRUD use cases of one collection, as handed to the web layer.
pub struct ContentUseCases<T: ContentResource> {
    pub list: Arc<dyn ListContentUseCase<T> + Send + Sync>,
    pub create: Arc<dyn CreateContentUseCase<T> + Send + Sync>,
    pub update: Arc<dyn UpdateContentUseCase<T> + Send + Sync>,
    pub delete: Arc<dyn DeleteContentUseCase<T> + Send + Sync>,
}

impl<T: ContentResource> Clone for ContentUseCases<T> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
            create: Arc::clone(&self.create),
            update: Arc::clone(&self.update),
            delete: Arc::clone(&self.delete),
        }
    }
}

impl<T: ContentResource> ContentUseCases<T> {
    /// Backs all four use cases with one shared service.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ContentRepository<T> + 'static,
    {
        let service = Arc::new(ContentService::new(repository));
        Self {
            list: service.clone(),
            create: service.clone(),
            update: service.clone(),
            delete: service,
        }
    }
}
