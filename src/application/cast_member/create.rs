//! Create CastMember

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{CastMember, CastMemberGateway, CastMemberType};
use crate::error::AppResult;

/// Command to create a cast member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCastMemberCommand {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
}

impl CreateCastMemberCommand {
    pub fn new(name: Option<String>, kind: Option<CastMemberType>) -> Self {
        Self { name, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCastMemberOutput {
    pub id: String,
}

pub struct CreateCastMemberUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl CreateCastMemberUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, command: CreateCastMemberCommand) -> AppResult<CreateCastMemberOutput> {
        let member = CastMember::new_member(command.name.as_deref(), command.kind)?;

        let member = self.gateway.create(member).await?;
        tracing::info!(cast_member_id = %member.id(), kind = %member.kind(), "Cast member created");

        Ok(CreateCastMemberOutput {
            id: member.id().to_string(),
        })
    }
}
