//! Domain DTOs for the shopping-list API.
//!
//! # Design
//! The canonical wire contract uses the remote resource's Portuguese field
//! names (`titulo`, `quantidade`, `preco`); Rust identifiers stay English
//! via serde renames. These types are defined independently from the
//! mock-server crate; integration tests catch schema drift.
//!
//! Ids are assigned by the server and treated as opaque. Deployments have
//! returned both JSON strings and JSON numbers, so `ItemId` accepts both on
//! the wire and always serializes back as a string. The client never
//! fabricates an id.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placeholder rendered for a missing quantity or price.
pub const MISSING_FIELD: &str = "—";

/// Opaque server-assigned item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the id carries no usable value — the delete precondition.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ItemId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ItemId, E> {
                Ok(ItemId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A single shopping-list item returned by the API.
///
/// Quantity and price are free-form text and optional on the wire; records
/// created by other clients may omit them entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    #[serde(rename = "titulo", default)]
    pub title: String,
    #[serde(rename = "quantidade", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(rename = "preco", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Item {
    /// Quantity for display, with the em-dash placeholder when absent.
    pub fn quantity_display(&self) -> &str {
        display_or_placeholder(self.quantity.as_deref())
    }

    /// Price for display, with the em-dash placeholder when absent.
    pub fn price_display(&self) -> &str {
        display_or_placeholder(self.price.as_deref())
    }
}

fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => MISSING_FIELD,
    }
}

/// Submission payload for create and update.
///
/// All three keys are always present on the wire; update replaces the
/// server record's fields wholesale rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDraft {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "quantidade", default)]
    pub quantity: String,
    #[serde(rename = "preco", default)]
    pub price: String,
}

impl ItemDraft {
    /// Build a draft from raw field values, trimming each.
    pub fn trimmed(title: &str, quantity: &str, price: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            quantity: quantity.trim().to_string(),
            price: price.trim().to_string(),
        }
    }
}
