//! A pie or crust recipe in the catalog.
//!
//! # Actor Framework
//! [`Recipe`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! so it can be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//! Creation and replacement both take a [`RecipeCreate`] payload; searches take a
//! [`RecipeQuery`].
//!
//! The wire shape uses camelCase names and `type` for the kind, so a serialized recipe
//! looks like `{"id":1,"title":"Apple Pie","type":"pie","imageType":"berry-red",...}`.

use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::catalog;

/// Type-safe identifier for Recipes.
///
/// Serialized as a bare integer. Any integer parses, including ids that were never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = ParseIntError;

    /// Accepts integers only, with surrounding whitespace ignored. Forms such as `"1.0"`
    /// or `"1e2"` are rejected, so a path id like that names no recipe.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Whether a recipe is a whole pie or just a crust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeKind {
    Pie,
    Crust,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
    /// Display order matters.
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub notes: Option<String>,
    pub image_type: String,
    pub tags: Vec<String>,
    /// `None` for no-bake and chilled recipes.
    pub bake_temp: Option<i32>,
    pub difficulty: Difficulty,
}

impl Recipe {
    /// Builds the stored form of a payload. The payload never carries an id.
    pub fn new(id: RecipeId, params: RecipeCreate) -> Self {
        Self {
            id,
            title: params.title,
            kind: params.kind,
            ingredients: params.ingredients,
            instructions: params.instructions,
            notes: params.notes,
            image_type: params.image_type,
            tags: params.tags,
            bake_temp: params.bake_temp,
            difficulty: params.difficulty,
        }
    }

    /// Case-insensitive substring match on the title or any ingredient line.
    pub fn matches_query(&self, query: &RecipeQuery) -> bool {
        let needle = query.needle();
        self.title.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|line| line.to_lowercase().contains(needle))
    }

    /// Ids of the crust recipes this recipe's tags point at, in tag order.
    pub fn crust_references(&self) -> Vec<RecipeId> {
        self.tags
            .iter()
            .filter_map(|tag| catalog::parse_crust_tag(tag))
            .collect()
    }

    /// The first tag that belongs to the status group (`tried`, `to-do`).
    pub fn status_tag(&self) -> Option<&str> {
        self.tags
            .iter()
            .map(String::as_str)
            .find(|tag| catalog::STATUS_TAGS.contains(tag))
    }
}

/// Payload for creating a recipe or replacing one wholesale.
///
/// Deserialization enforces the shape: required fields present, enums in range,
/// `bakeTemp` an integer. Defaults fill `tags` (empty) and `difficulty` (medium).
/// An `id` in the incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCreate {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub image_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bake_temp: Option<i32>,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl RecipeCreate {
    /// Returns the name of the first required text field that is empty, if any.
    ///
    /// Only `""` counts as empty; whitespace is kept as the client sent it.
    pub fn blank_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.instructions.is_empty() {
            Some("instructions")
        } else {
            None
        }
    }
}

/// A search over titles and ingredients. Matching ignores case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    needle: String,
}

impl RecipeQuery {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            needle: text.as_ref().to_lowercase(),
        }
    }

    /// The lowercased search text.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}
