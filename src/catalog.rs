//! # Catalog
//!
//! Fixed vocabularies the UI draws from: illustration variants per recipe kind, the tag
//! groups offered in the editor, and the `"<id>-crust"` tag convention a pie uses to point
//! at the crust recipe it is built on.
//!
//! None of this is enforced by the store. A recipe may carry any `imageType` and any tags;
//! these helpers only describe the values the catalog itself knows about.

use crate::model::{RecipeId, RecipeKind};

/// One illustration a recipe card can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageVariant {
    pub id: &'static str,
    pub description: &'static str,
}

pub const PIE_IMAGES: &[ImageVariant] = &[
    ImageVariant { id: "berry-red", description: "Red berry pie" },
    ImageVariant { id: "berry-blue", description: "Blueberry pie" },
    ImageVariant { id: "chocolate", description: "Chocolate pie" },
    ImageVariant { id: "lattice", description: "Classic lattice pattern" },
    ImageVariant { id: "cheesecake", description: "Simple cheesecake" },
];

pub const CRUST_IMAGES: &[ImageVariant] = &[
    ImageVariant { id: "classic", description: "Traditional pie crust" },
    ImageVariant { id: "graham", description: "Graham cracker crust" },
    ImageVariant { id: "cookie", description: "Cookie crust" },
];

pub const BAKING_TAGS: &[&str] = &["baked", "no-bake"];
pub const FILLING_TAGS: &[&str] = &["fruit", "chocolate", "cream", "custard", "misc"];
pub const STATUS_TAGS: &[&str] = &["tried", "to-do"];

/// Tag groups in the order the editor shows them.
pub const TAG_GROUPS: &[(&str, &[&str])] = &[
    ("baking", BAKING_TAGS),
    ("filling", FILLING_TAGS),
    ("status", STATUS_TAGS),
];

const CRUST_TAG_SUFFIX: &str = "-crust";

/// The illustration variants available for `kind`. The first entry is the default.
pub fn image_variants(kind: RecipeKind) -> &'static [ImageVariant] {
    match kind {
        RecipeKind::Pie => PIE_IMAGES,
        RecipeKind::Crust => CRUST_IMAGES,
    }
}

/// Picks the first variant of `kind` whose description mentions `flavor`, ignoring case.
///
/// Falls back to the kind's default (`berry-red` or `classic`), so the result is always
/// a known variant id.
pub fn select_image_type(kind: RecipeKind, flavor: &str) -> &'static str {
    let variants = image_variants(kind);
    let flavor = flavor.trim().to_lowercase();
    if !flavor.is_empty() {
        if let Some(variant) = variants
            .iter()
            .find(|v| v.description.to_lowercase().contains(&flavor))
        {
            return variant.id;
        }
    }
    variants[0].id
}

/// The group a known tag belongs to. Crust references and free-form tags have none.
pub fn tag_group(tag: &str) -> Option<&'static str> {
    TAG_GROUPS
        .iter()
        .find(|(_, tags)| tags.contains(&tag))
        .map(|(group, _)| *group)
}

/// The tag a recipe carries to reference crust recipe `id`.
pub fn crust_tag(id: RecipeId) -> String {
    format!("{id}{CRUST_TAG_SUFFIX}")
}

/// The crust id referenced by `tag`, if it follows the `"<id>-crust"` form.
pub fn parse_crust_tag(tag: &str) -> Option<RecipeId> {
    let id = tag.strip_suffix(CRUST_TAG_SUFFIX)?;
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_image_type_matches_description() {
        assert_eq!(select_image_type(RecipeKind::Pie, "blueberry"), "berry-blue");
        assert_eq!(select_image_type(RecipeKind::Pie, "CHOCOLATE"), "chocolate");
        assert_eq!(select_image_type(RecipeKind::Crust, "graham"), "graham");
    }

    #[test]
    fn test_select_image_type_falls_back_to_default() {
        assert_eq!(select_image_type(RecipeKind::Pie, "key lime"), "berry-red");
        assert_eq!(select_image_type(RecipeKind::Pie, ""), "berry-red");
        assert_eq!(select_image_type(RecipeKind::Crust, "pretzel"), "classic");
    }

    #[test]
    fn test_image_variants_per_kind() {
        let pies: Vec<_> = image_variants(RecipeKind::Pie).iter().map(|v| v.id).collect();
        assert_eq!(pies, ["berry-red", "berry-blue", "chocolate", "lattice", "cheesecake"]);
        assert_eq!(image_variants(RecipeKind::Crust).len(), 3);
    }

    #[test]
    fn test_tag_group_covers_every_group() {
        for tag in BAKING_TAGS {
            assert_eq!(tag_group(tag), Some("baking"));
        }
        for tag in FILLING_TAGS {
            assert_eq!(tag_group(tag), Some("filling"));
        }
        for tag in STATUS_TAGS {
            assert_eq!(tag_group(tag), Some("status"));
        }
        assert_eq!(tag_group("3-crust"), None);
        assert_eq!(tag_group("Fruit"), None);
    }

    #[test]
    fn test_crust_tag_round_trip() {
        assert_eq!(crust_tag(RecipeId(12)), "12-crust");
        assert_eq!(parse_crust_tag("12-crust"), Some(RecipeId(12)));
    }

    #[test]
    fn test_parse_crust_tag_rejects_other_tags() {
        for tag in ["fruit", "-crust", "graham-crust", "+3-crust", "3-crusty", "3"] {
            assert_eq!(parse_crust_tag(tag), None, "parsed {tag}");
        }
    }
}
