//! Where a list screen loads its rows from and sends its writes to.

use async_trait::async_trait;
use gym_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::CollectionApi;
use crate::error::ClientError;

/// The remote side of one collection, seen from a list screen.
#[async_trait]
pub trait CollectionSource<T>: Send + Sync {
    /// Body accepted by insert and update.
    type Input: Send + Sync;

    /// The full, unfiltered collection.
    async fn fetch_all(&self) -> Result<Vec<T>, ClientError>;

    async fn insert(&self, input: &Self::Input) -> Result<T, ClientError>;

    /// Replace the whole record with the given ID.
    async fn update(&self, id: DbId, input: &Self::Input) -> Result<T, ClientError>;

    async fn remove(&self, id: DbId) -> Result<(), ClientError>;
}

#[async_trait]
impl<T, I> CollectionSource<T> for CollectionApi<T, I>
where
    T: DeserializeOwned + Send + Sync,
    I: Serialize + Send + Sync,
{
    type Input = I;

    async fn fetch_all(&self) -> Result<Vec<T>, ClientError> {
        self.list_all().await
    }

    async fn insert(&self, input: &I) -> Result<T, ClientError> {
        self.create(input).await
    }

    async fn update(&self, id: DbId, input: &I) -> Result<T, ClientError> {
        self.replace(id, input).await
    }

    async fn remove(&self, id: DbId) -> Result<(), ClientError> {
        self.delete(id).await
    }
}
