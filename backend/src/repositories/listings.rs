//! Listing repository for database operations

use chrono::{DateTime, Utc};
use neighborly_shared::types::{ListingKind, ListingResponse};
use neighborly_shared::validation::ValidListing;
use sqlx::PgPool;
use uuid::Uuid;

/// Listing record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl ListingRecord {
    pub fn into_response(self) -> ListingResponse {
        ListingResponse {
            id: self.id.to_string(),
            owner_id: self.owner_id.to_string(),
            title: self.title,
            description: self.description,
            // Stored values come from the validated kind set
            kind: ListingKind::parse(&self.kind).unwrap_or(ListingKind::Offer),
            category: self.category,
            created_at: self.created_at,
        }
    }
}

/// Listing repository for database operations
pub struct ListingRepository;

impl ListingRepository {
    /// Insert a validated listing
    pub async fn create(
        pool: &PgPool,
        owner_id: Uuid,
        listing: &ValidListing,
    ) -> Result<ListingRecord, sqlx::Error> {
        sqlx::query_as::<_, ListingRecord>(
            r#"
            INSERT INTO listings (owner_id, title, description, kind, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, title, description, kind, category, created_at
            "#,
        )
        .bind(owner_id)
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.kind.as_str())
        .bind(&listing.category)
        .fetch_one(pool)
        .await
    }
}
