use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use catalog_core::{AggregateRoot, Clock, Entity, Money};

use crate::error::{CatalogError, ProductError};
use crate::name::ProductName;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

catalog_core::uuid_identifier!(ProductId, "ProductId");

/// Aggregate root: Product.
///
/// Name and price arrive as already-validated value objects; the aggregate
/// itself only guards `quantity >= 0`. Zero prices are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    price: Money,
    quantity: i64,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a brand-new product with a fresh id; both timestamps are set to
    /// the clock's current time.
    pub fn create<C: Clock + ?Sized>(
        clock: &C,
        name: ProductName,
        price: Money,
        quantity: i64,
        description: Option<&str>,
    ) -> Result<Self, ProductError> {
        let now = clock.utc();
        let product = Self::new(
            ProductId::generate(),
            name,
            price,
            quantity,
            sanitize_description(description),
            now,
            now,
        )?;

        debug!(product_id = %product.id, quantity, "product created");
        Ok(product)
    }

    /// Rebuild a product from previously stored state.
    ///
    /// Id, description and timestamps are trusted as-is; only the quantity
    /// guard runs again.
    pub fn from_persistence(
        id: ProductId,
        name: ProductName,
        price: Money,
        quantity: i64,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ProductError> {
        Self::new(id, name, price, quantity, description, created_at, updated_at)
    }

    fn new(
        id: ProductId,
        name: ProductName,
        price: Money,
        quantity: i64,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ProductError> {
        ensure_non_negative(quantity)?;
        Ok(Self {
            id,
            name,
            price,
            quantity,
            description,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the editable fields in one step. Nothing changes on failure.
    pub fn update<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        name: ProductName,
        price: Money,
        quantity: i64,
        description: Option<&str>,
    ) -> Result<(), ProductError> {
        ensure_non_negative(quantity)?;

        self.name = name;
        self.price = price;
        self.quantity = quantity;
        self.description = sanitize_description(description);
        self.touch(clock);

        debug!(product_id = %self.id, quantity, "product updated");
        Ok(())
    }

    pub fn increase_quantity<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        amount: i64,
    ) -> Result<(), ProductError> {
        if amount <= 0 {
            return Err(ProductError::InvalidQuantityIncrease { amount });
        }
        let new_quantity =
            self.quantity
                .checked_add(amount)
                .ok_or(ProductError::QuantityOverflow {
                    quantity: self.quantity,
                    amount,
                })?;

        debug!(product_id = %self.id, from = self.quantity, to = new_quantity, "quantity increased");
        self.quantity = new_quantity;
        self.touch(clock);
        Ok(())
    }

    pub fn decrease_quantity<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        amount: i64,
    ) -> Result<(), ProductError> {
        if amount <= 0 {
            return Err(ProductError::InvalidQuantityDecrease { amount });
        }
        // Both operands are non-negative here, so the subtraction cannot overflow.
        let new_quantity = self.quantity - amount;
        ensure_non_negative(new_quantity)?;

        debug!(product_id = %self.id, from = self.quantity, to = new_quantity, "quantity decreased");
        self.quantity = new_quantity;
        self.touch(clock);
        Ok(())
    }

    /// In stock.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    pub fn can_fulfill_order(&self, requested: i64) -> bool {
        self.quantity >= requested
    }

    /// Flat record for the persistence layer.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price.to_minor_units(),
            currency: self.price.currency().code().to_string(),
            quantity: self.quantity,
            description: self.description.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch<C: Clock + ?Sized>(&mut self, clock: &C) {
        self.updated_at = clock.utc();
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product{{id={}, name={}, price={}}}",
            self.id,
            self.name,
            self.price.to_float()
        )
    }
}

/// Stored form of a [`Product`].
///
/// Price is kept as integer minor units plus a currency code; timestamps use
/// RFC 3339 via chrono's serde support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
    pub quantity: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProductSnapshot> for Product {
    type Error = CatalogError;

    fn try_from(snapshot: ProductSnapshot) -> Result<Self, Self::Error> {
        let id = ProductId::parse(&snapshot.id)?;
        let name = ProductName::new(&snapshot.name)?;
        let price = Money::from_minor_units(snapshot.price, &snapshot.currency)?;
        Ok(Product::from_persistence(
            id,
            name,
            price,
            snapshot.quantity,
            snapshot.description,
            snapshot.created_at,
            snapshot.updated_at,
        )?)
    }
}

fn ensure_non_negative(quantity: i64) -> Result<(), ProductError> {
    if quantity < 0 {
        return Err(ProductError::negative_quantity(quantity));
    }
    Ok(())
}

fn sanitize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
