use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use roster_model::{CreatedUser, RawUser, UserDraft};

use crate::api_client::ApiClient;

/// Routes on the remote resource endpoint.
pub mod routes {
    pub const USERS: &str = "/users";

    pub fn user_item(id: u64) -> String {
        format!("{USERS}/{id}")
    }
}

/// CRUD seam to the remote user directory.
///
/// One method per HTTP operation on the collection endpoint. No retries:
/// a failure is reported once and surfaced to the operator.
#[async_trait]
pub trait UserDirectoryService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<RawUser>>;
    async fn create_user(&self, draft: &UserDraft) -> Result<CreatedUser>;
    async fn update_user(&self, id: u64, draft: &UserDraft) -> Result<()>;
    async fn delete_user(&self, id: u64) -> Result<()>;
}

/// Live adapter speaking to the HTTP resource endpoint.
#[derive(Clone, Debug)]
pub struct UserDirectoryApiAdapter {
    client: Arc<ApiClient>,
}

impl UserDirectoryApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectoryService for UserDirectoryApiAdapter {
    async fn list_users(&self) -> Result<Vec<RawUser>> {
        Ok(self.client.get(routes::USERS).await?)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<CreatedUser> {
        Ok(self.client.post(routes::USERS, draft).await?)
    }

    async fn update_user(&self, id: u64, draft: &UserDraft) -> Result<()> {
        let path = routes::user_item(id);
        let _: serde_json::Value = self.client.put(&path, draft).await?;
        Ok(())
    }

    async fn delete_user(&self, id: u64) -> Result<()> {
        let path = routes::user_item(id);
        let _: serde_json::Value = self.client.delete(&path).await?;
        Ok(())
    }
}
