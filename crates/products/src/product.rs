use serde::{Deserialize, Serialize};

use catalog_core::{Entity, ProductId};

/// Caller-supplied fields for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Catalog record.
///
/// Built without an identifier; the write repository assigns one when the
/// product is first stored, and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: Option<ProductId>,
    name: String,
    description: Option<String>,
    price: f64,
    category: Option<String>,
}

impl Product {
    /// Create an unpersisted product from caller-supplied fields.
    pub fn new(draft: ProductDraft) -> Self {
        Self {
            id: None,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
        }
    }

    /// Staged copy carrying this product's identity and the draft's fields.
    ///
    /// The receiver is left untouched, so a copy that fails validation never
    /// leaks into the stored record.
    pub fn with_fields(&self, draft: ProductDraft) -> Self {
        Self {
            id: self.id,
            ..Self::new(draft)
        }
    }

    /// Attach the identifier minted by the store.
    ///
    /// Storage-layer hook. An id set by hand registers nothing: the write
    /// repository overwrites it with a freshly minted one on `add`.
    #[doc(hidden)]
    pub fn assign_id(&mut self, id: ProductId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Inclusive on both bounds.
    pub fn priced_between(&self, min: f64, max: f64) -> bool {
        min <= self.price && self.price <= max
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}
