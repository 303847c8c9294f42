//! Vector-backed store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use roster_core::error::NotFoundError;
use roster_core::traits::{Props, Searchable, SearchableStore, Store};
use roster_core::{Entity, EntityId, Result, SearchParams, SearchResult, search};

/// Non-persistent store holding records in a vector.
///
/// Lookups are linear scans. The vector sits behind a read/write lock, and
/// `update`/`delete` hold the write lock from scan to mutation.
#[derive(Debug)]
pub struct MemoryStore<P> {
    items: RwLock<Vec<Entity<P>>>,
}

impl<P> MemoryStore<P> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::from_entities(Vec::new())
    }

    /// Create a store pre-populated with records, in the given order.
    pub fn from_entities(items: Vec<Entity<P>>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Replace the whole contents.
    pub async fn replace_all(&self, items: Vec<Entity<P>>) {
        *self.items.write().await = items;
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<P> Default for MemoryStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn position<P>(items: &[Entity<P>], id: &EntityId) -> Option<usize> {
    items.iter().position(|e| e.id() == id)
}

#[async_trait]
impl<P: Props> Store for MemoryStore<P> {
    type Props = P;

    #[instrument(skip(self, entity), fields(kind = P::KIND, id = %entity.id()))]
    async fn insert(&self, entity: Entity<P>) -> Result<()> {
        let mut items = self.items.write().await;
        items.push(entity);
        debug!(len = items.len(), "Inserted record");
        Ok(())
    }

    #[instrument(skip(self), fields(kind = P::KIND))]
    async fn find_by_id(&self, id: &EntityId) -> Result<Entity<P>> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| NotFoundError::of::<P>(id).into())
    }

    async fn find_all(&self) -> Result<Vec<Entity<P>>> {
        Ok(self.items.read().await.clone())
    }

    #[instrument(skip(self, entity), fields(kind = P::KIND, id = %entity.id()))]
    async fn update(&self, entity: Entity<P>) -> Result<()> {
        let mut items = self.items.write().await;
        let idx = position(&items, entity.id()).ok_or_else(|| NotFoundError::of::<P>(entity.id()))?;
        items[idx] = entity;
        debug!(position = idx, "Updated record");
        Ok(())
    }

    #[instrument(skip(self), fields(kind = P::KIND))]
    async fn delete(&self, id: &EntityId) -> Result<()> {
        let mut items = self.items.write().await;
        let idx = position(&items, id).ok_or_else(|| NotFoundError::of::<P>(id))?;
        items.remove(idx);
        debug!(position = idx, len = items.len(), "Deleted record");
        Ok(())
    }
}

#[async_trait]
impl<P: Searchable> SearchableStore for MemoryStore<P> {
    #[instrument(skip(self, params), fields(kind = P::KIND, page = params.page()))]
    async fn search(&self, params: &SearchParams) -> Result<SearchResult<Entity<P>>> {
        let items = self.items.read().await.clone();
        let result = search::run(items, params);
        debug!(total = result.total(), returned = result.items().len(), "Searched records");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use roster_core::traits::SortValue;
    use roster_core::{SearchInput, SortDirection};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct StubProps {
        name: String,
        price: i64,
        created_at: DateTime<Utc>,
    }

    impl Props for StubProps {}

    impl Searchable for StubProps {
        const SORTABLE_FIELDS: &'static [&'static str] = &["name", "createdAt"];

        fn filter_field(&self) -> &str {
            &self.name
        }

        fn sort_value(&self, field: &str) -> Option<SortValue<'_>> {
            match field {
                "name" => Some(self.name.as_str().into()),
                "createdAt" => Some(self.created_at.into()),
                _ => None,
            }
        }
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn stub(name: &str) -> Entity<StubProps> {
        Entity::new(StubProps {
            name: name.to_string(),
            price: 50,
            created_at: epoch(),
        })
    }

    fn names(entities: &[Entity<StubProps>]) -> Vec<String> {
        entities.iter().map(|e| e.props().name.clone()).collect()
    }

    #[tokio::test]
    async fn inserts_a_new_entity() {
        let sut = MemoryStore::new();
        let entity = stub("test name");
        sut.insert(entity.clone()).await.unwrap();

        let items = sut.find_all().await.unwrap();
        assert_eq!(items[0].to_snapshot().unwrap(), entity.to_snapshot().unwrap());
    }

    #[tokio::test]
    async fn find_by_id_fails_when_absent() {
        let sut = MemoryStore::<StubProps>::new();
        let err = sut.find_by_id(&EntityId::new("fakeId")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found");
    }

    #[tokio::test]
    async fn find_by_id_returns_inserted_snapshot() {
        let sut = MemoryStore::new();
        let entity = stub("test name");
        sut.insert(entity.clone()).await.unwrap();

        let found = sut.find_by_id(entity.id()).await.unwrap();
        assert_eq!(found.to_snapshot().unwrap(), entity.to_snapshot().unwrap());
    }

    #[tokio::test]
    async fn update_fails_when_absent() {
        let sut = MemoryStore::new();
        let err = sut.update(stub("test name")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let first = stub("first");
        let second = stub("second");
        let sut = MemoryStore::from_entities(vec![first.clone(), second.clone()]);

        let replacement = Entity::with_id(
            StubProps {
                name: "updated".to_string(),
                price: 10,
                created_at: epoch(),
            },
            first.id().clone(),
        );
        sut.update(replacement.clone()).await.unwrap();

        let items = sut.find_all().await.unwrap();
        assert_eq!(names(&items), ["updated", "second"]);
        assert_eq!(items[0].to_snapshot().unwrap(), replacement.to_snapshot().unwrap());
    }

    #[tokio::test]
    async fn delete_fails_when_absent() {
        let sut = MemoryStore::<StubProps>::new();
        let err = sut.delete(&EntityId::new("fakeId")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_keeps_order_of_the_rest() {
        let items = vec![stub("a"), stub("b"), stub("c")];
        let sut = MemoryStore::from_entities(items.clone());

        sut.delete(items[1].id()).await.unwrap();

        assert_eq!(names(&sut.find_all().await.unwrap()), ["a", "c"]);
        assert_eq!(sut.len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_ids_are_not_rejected() {
        let entity = stub("a");
        let sut = MemoryStore::new();
        sut.insert(entity.clone()).await.unwrap();
        sut.insert(entity.clone()).await.unwrap();
        assert_eq!(sut.len().await, 2);

        sut.delete(entity.id()).await.unwrap();
        assert_eq!(sut.len().await, 1);
    }

    #[tokio::test]
    async fn default_search_is_newest_first() {
        let sut = MemoryStore::new();
        for i in 0..16 {
            let props = StubProps {
                name: format!("user {i}"),
                price: i,
                created_at: epoch() + Duration::milliseconds(i),
            };
            sut.insert(Entity::new(props)).await.unwrap();
        }

        let result = sut.search(&SearchParams::default()).await.unwrap();
        assert_eq!(result.total(), 16);
        assert_eq!(result.items().len(), 15);
        assert_eq!(result.last_page(), 2);
        assert_eq!(result.items()[0].props().name, "user 15");
        assert_eq!(result.items()[14].props().name, "user 1");

        let created: Vec<_> = result.items().iter().map(|e| e.props().created_at).collect();
        assert!(created.windows(2).all(|w| w[0] > w[1]));
    }

    #[tokio::test]
    async fn search_filters_sorts_and_paginates() {
        let items: Vec<_> = ["test", "a", "TEST", "b", "TeSt"].into_iter().map(stub).collect();
        let sut = MemoryStore::from_entities(items);

        let input = SearchInput::default()
            .with_per_page(2)
            .with_sort("name")
            .with_sort_dir("asc")
            .with_filter("TEST");

        let page1 = sut
            .search(&SearchParams::new(input.clone().with_page(1)))
            .await
            .unwrap();
        assert_eq!(names(page1.items()), ["TEST", "TeSt"]);
        assert_eq!(page1.total(), 3);
        assert_eq!(page1.last_page(), 2);
        assert_eq!(page1.sort_dir(), Some(SortDirection::Asc));

        let page2 = sut
            .search(&SearchParams::new(input.with_page(2)))
            .await
            .unwrap();
        assert_eq!(names(page2.items()), ["test"]);
        assert_eq!(page2.total(), 3);
    }

    #[tokio::test]
    async fn search_sorts_descending_by_name() {
        let items: Vec<_> = ["b", "a", "d", "e", "c"].into_iter().map(stub).collect();
        let sut = MemoryStore::from_entities(items);

        let params = SearchParams::new(
            SearchInput::default()
                .with_per_page(2)
                .with_sort("name"),
        );
        let result = sut.search(&params).await.unwrap();
        assert_eq!(names(result.items()), ["e", "d"]);
        assert_eq!(result.sort_dir(), Some(SortDirection::Desc));
    }

    #[tokio::test]
    async fn search_with_large_page_size_fits_one_page() {
        let items: Vec<_> = ["a", "b", "c", "d"].into_iter().map(stub).collect();
        let sut = MemoryStore::from_entities(items);

        let params = SearchParams::new(SearchInput::default().with_per_page(10));
        let result = sut.search(&params).await.unwrap();
        assert_eq!(result.items().len(), 4);
        assert_eq!(result.last_page(), 1);
    }

    #[tokio::test]
    async fn deleted_records_leave_search_results() {
        let items: Vec<_> = ["a", "b", "c"].into_iter().map(stub).collect();
        let sut = MemoryStore::from_entities(items.clone());
        sut.delete(items[1].id()).await.unwrap();

        let params = SearchParams::new(SearchInput::default().with_sort("unknown"));
        let result = sut.search(&params).await.unwrap();
        assert_eq!(names(result.items()), ["a", "c"]);
        assert_eq!(result.total(), 2);
    }
}
