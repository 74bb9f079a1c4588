//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user, safe to hand to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Issued session returned by signup and login
///
/// The client persists this pair in its session store; the token also
/// travels separately in the `authToken` cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserSummary,
}

/// Listing kind: a member either offers something or asks for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Offer,
    Request,
}

impl ListingKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "offer" => Some(Self::Offer),
            "request" => Some(Self::Request),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Request => "request",
        }
    }
}

/// The fixed set of listing categories
pub const LISTING_CATEGORIES: &[&str] = &[
    "tools",
    "household",
    "garden",
    "electronics",
    "books",
    "clothing",
    "sports",
    "food",
    "services",
    "other",
];

/// New listing request (raw, unvalidated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListingRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
}

/// Listing returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_kind_parse() {
        assert_eq!(ListingKind::parse("offer"), Some(ListingKind::Offer));
        assert_eq!(ListingKind::parse("request"), Some(ListingKind::Request));
        assert_eq!(ListingKind::parse("Offer"), None);
        assert_eq!(ListingKind::parse(""), None);
    }

    #[test]
    fn test_listing_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ListingKind::Offer).unwrap();
        assert_eq!(json, "\"offer\"");
    }

    #[test]
    fn test_categories_contain_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for category in LISTING_CATEGORIES {
            assert!(seen.insert(category), "duplicate category: {}", category);
        }
    }
}
