//! List CastMembers

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CastMember, CastMemberGateway, CastMemberType, Pagination, SearchQuery};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberListOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CastMemberType,
    pub created_at: DateTime<Utc>,
}

impl From<CastMember> for CastMemberListOutput {
    fn from(member: CastMember) -> Self {
        Self {
            id: member.id().to_string(),
            name: member.name().to_string(),
            kind: member.kind(),
            created_at: member.created_at(),
        }
    }
}

pub struct ListCastMembersUseCase {
    gateway: Arc<dyn CastMemberGateway>,
}

impl ListCastMembersUseCase {
    pub fn new(gateway: Arc<dyn CastMemberGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, query: SearchQuery) -> AppResult<Pagination<CastMemberListOutput>> {
        let page = self.gateway.find_all(&query).await?;
        Ok(page.map(CastMemberListOutput::from))
    }
}
