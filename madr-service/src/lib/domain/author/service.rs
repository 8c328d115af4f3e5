use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::author::errors::AuthorError;
use crate::domain::author::models::Author;
use crate::domain::author::models::AuthorId;
use crate::domain::author::models::AuthorName;
use crate::domain::author::models::AuthorSearch;
use crate::domain::author::ports::AuthorRepository;
use crate::domain::author::ports::AuthorServicePort;

pub struct AuthorService<AR>
where
    AR: AuthorRepository,
{
    repository: Arc<AR>,
}

impl<AR> AuthorService<AR>
where
    AR: AuthorRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AuthorServicePort for AuthorService<AR>
where
    AR: AuthorRepository,
{
    async fn create_author(&self, name: AuthorName) -> Result<Author, AuthorError> {
        if self.repository.find_by_name(&name).await?.is_some() {
            return Err(AuthorError::AlreadyExists(name.to_string()));
        }

        let author = self.repository.create(name).await?;
        tracing::info!(author_id = %author.id, "Author added");

        Ok(author)
    }

    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound(*id))
    }

    async fn update_author(
        &self,
        id: &AuthorId,
        name: AuthorName,
    ) -> Result<Author, AuthorError> {
        let mut author = self.get_author(id).await?;

        if let Some(existing) = self.repository.find_by_name(&name).await? {
            if existing.id != author.id {
                return Err(AuthorError::AlreadyExists(name.to_string()));
            }
        }

        author.name = name;
        self.repository.update(author).await
    }

    async fn delete_author(&self, id: &AuthorId) -> Result<(), AuthorError> {
        self.repository.delete(id).await?;
        tracing::info!(author_id = %id, "Author deleted");
        Ok(())
    }

    async fn search_authors(&self, search: AuthorSearch) -> Result<Vec<Author>, AuthorError> {
        if search.name.is_empty() {
            return Ok(Vec::new());
        }

        self.repository
            .search(&search.name, search.limit, search.offset)
            .await
    }
}
