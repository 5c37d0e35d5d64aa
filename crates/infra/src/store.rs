use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_core::{CatalogError, CatalogResult, DEFAULT_ID_SEED, ProductId};
use catalog_products::Product;

/// Map contents plus the id counter, guarded together so they never drift apart.
#[derive(Debug)]
pub(crate) struct StoreState {
    pub(crate) products: BTreeMap<ProductId, Product>,
    /// `None` once `u64::MAX` has been handed out.
    next_id: Option<ProductId>,
}

/// Shared in-memory product storage.
///
/// Both repositories hold the same `Arc<InMemoryProductStore>`. Reads are open
/// to the crate; minting ids and mutating the map go through crate-private
/// methods that only [`ProductWriteRepository`](crate::ProductWriteRepository)
/// calls.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<StoreState>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_ID_SEED)
    }

    /// Empty store whose first minted id is `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: RwLock::new(StoreState {
                products: BTreeMap::new(),
                next_id: Some(ProductId::new(seed)),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().products.is_empty()
    }

    /// The id the next successful creation will receive; `None` when exhausted.
    pub fn peek_next_id(&self) -> Option<ProductId> {
        self.read().next_id
    }

    // Poisoning is recovered: every mutation is a single map call, so a
    // panicking holder cannot leave the map half-written.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mint an id and insert the product under it, in one critical section.
    ///
    /// Fails without touching the map once the counter is exhausted.
    pub(crate) fn insert_new(&self, mut product: Product) -> CatalogResult<Product> {
        let mut state = self.write();
        let id = state.next_id.ok_or(CatalogError::IdsExhausted)?;
        state.next_id = id.next();
        product.assign_id(id);
        state.products.insert(id, product.clone());
        Ok(product)
    }

    /// Overwrite an existing entry; `false` (and no change) when absent.
    pub(crate) fn replace(&self, id: ProductId, product: Product) -> bool {
        let mut state = self.write();
        match state.products.get_mut(&id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&self, id: ProductId) -> bool {
        self.write().products.remove(&id).is_some()
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Entity;
    use catalog_products::ProductDraft;

    fn pen() -> Product {
        Product::new(ProductDraft::new("Pen", 1.50))
    }

    #[test]
    fn new_store_is_empty_with_default_seed() {
        let store = InMemoryProductStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.peek_next_id(), Some(ProductId::new(1)));
    }

    #[test]
    fn insert_new_mints_sequential_ids() {
        let store = InMemoryProductStore::with_seed(100);
        let a = store.insert_new(pen()).unwrap();
        let b = store.insert_new(pen()).unwrap();

        assert_eq!(a.id(), Some(ProductId::new(100)));
        assert_eq!(b.id(), Some(ProductId::new(101)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.peek_next_id(), Some(ProductId::new(102)));
    }

    #[test]
    fn last_id_is_minted_once_then_counter_is_exhausted() {
        let store = InMemoryProductStore::with_seed(u64::MAX);

        let last = store.insert_new(pen()).unwrap();
        assert_eq!(last.id(), Some(ProductId::new(u64::MAX)));
        assert_eq!(store.peek_next_id(), None);

        assert_eq!(store.insert_new(pen()), Err(CatalogError::IdsExhausted));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_ids_are_never_reused() {
        let store = InMemoryProductStore::new();
        let a = store.insert_new(pen()).unwrap();
        assert!(store.remove(a.id().unwrap()));

        let b = store.insert_new(pen()).unwrap();
        assert_eq!(b.id(), Some(ProductId::new(2)));
    }

    #[test]
    fn replace_requires_existing_entry() {
        let store = InMemoryProductStore::new();
        assert!(!store.replace(ProductId::new(1), pen()));
        assert!(store.is_empty());

        let stored = store.insert_new(pen()).unwrap();
        let id = stored.id().unwrap();
        let renamed = stored.with_fields(ProductDraft::new("Pencil", 0.80));
        assert!(store.replace(id, renamed));
        assert_eq!(store.read().products[&id].name(), "Pencil");
    }

    #[test]
    fn remove_absent_is_false() {
        let store = InMemoryProductStore::new();
        assert!(!store.remove(ProductId::new(42)));
    }
}
