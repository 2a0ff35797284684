//! Gateway fakes for use case tests
//!
//! Wrap the in-memory gateways, count every call and can be switched to
//! fail every call with a storage error.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{
    CastMember, CastMemberGateway, CastMemberId, Category, CategoryGateway, CategoryId,
    GatewayError, Genre, GenreGateway, GenreId, Pagination, SearchQuery,
};
use crate::infrastructure::{
    InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway,
};

#[derive(Debug, Default)]
pub struct Calls {
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete_by_id: AtomicUsize,
    pub find_by_id: AtomicUsize,
    pub find_all: AtomicUsize,
    pub exists_by_ids: AtomicUsize,
}

impl Calls {
    fn hit(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn unavailable() -> GatewayError {
    GatewayError::storage(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "gateway unavailable",
    ))
}

macro_rules! guard {
    ($self:ident, $counter:ident) => {
        Calls::hit(&$self.calls.$counter);
        if $self.failing {
            return Err(unavailable());
        }
    };
}

// =========================================================================
// Category
// =========================================================================

#[derive(Debug, Default)]
pub struct FakeCategoryGateway {
    inner: InMemoryCategoryGateway,
    pub calls: Calls,
    pub last_query: Mutex<Option<SearchQuery>>,
    failing: bool,
}

impl FakeCategoryGateway {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, category: Category) -> Category {
        self.inner.create(category).await.unwrap()
    }
}

#[async_trait]
impl CategoryGateway for FakeCategoryGateway {
    async fn create(&self, category: Category) -> Result<Category, GatewayError> {
        guard!(self, create);
        self.inner.create(category).await
    }

    async fn update(&self, category: Category) -> Result<Category, GatewayError> {
        guard!(self, update);
        self.inner.update(category).await
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        guard!(self, delete_by_id);
        self.inner.delete_by_id(id).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        guard!(self, find_by_id);
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        guard!(self, find_all);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.inner.find_all(query).await
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        guard!(self, exists_by_ids);
        self.inner.exists_by_ids(ids).await
    }
}

// =========================================================================
// Genre
// =========================================================================

#[derive(Debug, Default)]
pub struct FakeGenreGateway {
    inner: InMemoryGenreGateway,
    pub calls: Calls,
    pub last_query: Mutex<Option<SearchQuery>>,
    failing: bool,
}

impl FakeGenreGateway {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, genre: Genre) -> Genre {
        self.inner.create(genre).await.unwrap()
    }
}

#[async_trait]
impl GenreGateway for FakeGenreGateway {
    async fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        guard!(self, create);
        self.inner.create(genre).await
    }

    async fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        guard!(self, update);
        self.inner.update(genre).await
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError> {
        guard!(self, delete_by_id);
        self.inner.delete_by_id(id).await
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        guard!(self, find_by_id);
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        guard!(self, find_all);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.inner.find_all(query).await
    }
}

// =========================================================================
// CastMember
// =========================================================================

#[derive(Debug, Default)]
pub struct FakeCastMemberGateway {
    inner: InMemoryCastMemberGateway,
    pub calls: Calls,
    pub last_query: Mutex<Option<SearchQuery>>,
    failing: bool,
}

impl FakeCastMemberGateway {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn seed(&self, member: CastMember) -> CastMember {
        self.inner.create(member).await.unwrap()
    }
}

#[async_trait]
impl CastMemberGateway for FakeCastMemberGateway {
    async fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        guard!(self, create);
        self.inner.create(member).await
    }

    async fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        guard!(self, update);
        self.inner.update(member).await
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError> {
        guard!(self, delete_by_id);
        self.inner.delete_by_id(id).await
    }

    async fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        guard!(self, find_by_id);
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        guard!(self, find_all);
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.inner.find_all(query).await
    }
}
