//! CastMember persistence port

use async_trait::async_trait;

use crate::domain::{CastMemberId, GatewayError, Pagination, SearchQuery};

use super::CastMember;

#[async_trait]
pub trait CastMemberGateway: Send + Sync {
    async fn create(&self, member: CastMember) -> Result<CastMember, GatewayError>;

    async fn update(&self, member: CastMember) -> Result<CastMember, GatewayError>;

    /// Remove a cast member. Absent ids are not an error.
    async fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError>;

    async fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError>;
}
