use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    CastMember, CastMemberGateway, CastMemberId, GatewayError, Pagination, SearchQuery,
};

use super::{contains_ignore_case, paginate};

#[derive(Debug, Default)]
pub struct InMemoryCastMemberGateway {
    members: RwLock<HashMap<CastMemberId, CastMember>>,
}

impl InMemoryCastMemberGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CastMemberGateway for InMemoryCastMemberGateway {
    async fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.members
            .write()
            .await
            .insert(member.id().clone(), member.clone());
        Ok(member)
    }

    async fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        if let Some(stored) = self.members.write().await.get_mut(member.id()) {
            *stored = member.clone();
        }
        Ok(member)
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError> {
        self.members.write().await.remove(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        let snapshot: Vec<CastMember> = self.members.read().await.values().cloned().collect();

        Ok(paginate(
            snapshot,
            query,
            |member, terms| contains_ignore_case(member.name(), terms),
            |a, b, sort| {
                let ordering = match sort {
                    "createdAt" | "created_at" => a.created_at().cmp(&b.created_at()),
                    "type" => a.kind().as_str().cmp(b.kind().as_str()),
                    _ => a.name().cmp(b.name()),
                };
                ordering.then_with(|| a.id().cmp(b.id()))
            },
        ))
    }
}
