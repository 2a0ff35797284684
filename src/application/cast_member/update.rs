//! Update CastMember

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::cast_member::CAST_MEMBER;
use crate::domain::{CastMemberGateway, CastMemberId, CastMemberType, DomainError};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCastMemberCommand {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
}

impl UpdateCastMemberCommand {
    pub fn new(id: impl Into<String>, name: Option<String>, kind: Option<CastMemberType>) -> Self {
        Self {
            id: id.into(),
            name,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCastMemberOutput {
    pub id: String,
}

pub struct UpdateCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl UpdateCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, command: UpdateCastMemberCommand) -> AppResult<UpdateCastMemberOutput> {
        let id = CastMemberId::from(command.id);
        let member = self
            .gateway
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::not_found(CAST_MEMBER, &id))?;

        let member = member.update(command.name.as_deref(), command.kind)?;

        let member = self.gateway.update(member).await?;
        tracing::info!(cast_member_id = %member.id(), "Cast member updated");

        Ok(UpdateCastMemberOutput {
            id: member.id().to_string(),
        })
    }
}
