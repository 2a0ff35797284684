//! Delete CastMember

use std::sync::Arc;

use crate::domain::{CastMemberGateway, CastMemberId};
use crate::error::AppResult;

pub struct DeleteCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl DeleteCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, id: &str) -> AppResult<()> {
        let id = CastMemberId::from(id);
        self.gateway.delete_by_id(&id).await?;
        tracing::info!(cast_member_id = %id, "Cast member deleted");
        Ok(())
    }
}
