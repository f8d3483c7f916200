//! Wardrobe data model shared with the external application
//!
//! Items and preferences are read-only inputs to the engine. Tags serialize to
//! the exact lowercase strings the application stores, and parsing performs no
//! normalization beyond exact matching.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Identifier of a wardrobe item, owned by the persistence layer
pub type ItemId = u64;

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact tag string used by the application
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(EngineError::UnknownTag {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

tag_enum! {
    /// Named color assigned to a garment
    ColorCategory, "color" {
        Black => "black",
        White => "white",
        Gray => "gray",
        Red => "red",
        Blue => "blue",
        Green => "green",
        Yellow => "yellow",
        Purple => "purple",
        Pink => "pink",
        Brown => "brown",
        Orange => "orange",
        Other => "other",
    }
}

tag_enum! {
    /// Visual pattern of a garment
    PatternCategory, "pattern" {
        Solid => "solid",
        Striped => "striped",
        Plaid => "plaid",
        Floral => "floral",
        PolkaDot => "polka_dot",
        Graphic => "graphic",
    }
}

tag_enum! {
    /// Garment category
    CategoryTag, "category" {
        Tops => "tops",
        Bottoms => "bottoms",
        Dresses => "dresses",
        Outerwear => "outerwear",
        Shoes => "shoes",
        Accessories => "accessories",
    }
}

tag_enum! {
    /// Season a garment is worn in; `All` matches every season
    SeasonTag, "season" {
        Spring => "spring",
        Summer => "summer",
        Fall => "fall",
        Winter => "winter",
        All => "all",
    }
}

tag_enum! {
    /// Occasion an outfit is proposed for
    OccasionTag, "occasion" {
        Casual => "casual",
        Formal => "formal",
        Business => "business",
        Party => "party",
        Date => "date",
        Workout => "workout",
        Beach => "beach",
        Everyday => "everyday",
    }
}

tag_enum! {
    /// Overall style preference carried onto proposals
    StyleTag, "style" {
        Casual => "casual",
        Formal => "formal",
        Sporty => "sporty",
        Vintage => "vintage",
        Minimalist => "minimalist",
        Bohemian => "bohemian",
        Streetwear => "streetwear",
        Business => "business",
    }
}

impl SeasonTag {
    /// The four concrete seasons, used when no season preference is set
    pub const CALENDAR: [SeasonTag; 4] = [
        SeasonTag::Spring,
        SeasonTag::Summer,
        SeasonTag::Fall,
        SeasonTag::Winter,
    ];
}

/// Attributes derived from a garment photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentAttributes {
    pub color: ColorCategory,
    pub pattern: PatternCategory,
}

impl GarmentAttributes {
    /// Combine analysis output with values the caller already has.
    ///
    /// Explicit caller values always win; analysis only fills the gaps. A
    /// failed analysis (`None`) leaves the caller's values untouched.
    pub fn resolve(
        analysis: Option<&GarmentAttributes>,
        explicit_color: Option<ColorCategory>,
        explicit_pattern: Option<PatternCategory>,
    ) -> (Option<ColorCategory>, Option<PatternCategory>) {
        (
            explicit_color.or(analysis.map(|a| a.color)),
            explicit_pattern.or(analysis.map(|a| a.pattern)),
        )
    }
}

/// A garment in the user's wardrobe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: ItemId,
    pub category: CategoryTag,
    pub color: ColorCategory,
    pub pattern: PatternCategory,
    pub season: SeasonTag,
}

impl WardrobeItem {
    pub fn new(
        id: ItemId,
        category: CategoryTag,
        color: ColorCategory,
        pattern: PatternCategory,
        season: SeasonTag,
    ) -> Self {
        Self {
            id,
            category,
            color,
            pattern,
            season,
        }
    }

    /// True if the item can be worn in `season`
    pub fn fits_season(&self, season: SeasonTag) -> bool {
        self.season == season || self.season == SeasonTag::All
    }
}

/// A user's style preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePreferences {
    pub favorite_colors: BTreeSet<ColorCategory>,
    pub preferred_patterns: BTreeSet<PatternCategory>,
    pub style_preference: StyleTag,
    /// 0 = fully casual, 100 = fully formal
    pub casual_formal_balance: u8,
    pub seasonal_preferences: BTreeMap<SeasonTag, bool>,
    pub occasion_preferences: BTreeSet<OccasionTag>,
    pub sustainability_focus: bool,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            favorite_colors: BTreeSet::new(),
            preferred_patterns: BTreeSet::new(),
            style_preference: StyleTag::Casual,
            casual_formal_balance: 50,
            seasonal_preferences: BTreeMap::new(),
            occasion_preferences: BTreeSet::new(),
            sustainability_focus: false,
        }
    }
}

impl StylePreferences {
    /// Seasons explicitly marked as preferred, in canonical order
    pub fn preferred_seasons(&self) -> Vec<SeasonTag> {
        self.seasonal_preferences
            .iter()
            .filter(|(_, preferred)| **preferred)
            .map(|(season, _)| *season)
            .collect()
    }
}

/// A generated outfit suggestion, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitProposal {
    name: String,
    item_ids: Vec<ItemId>,
    occasion: OccasionTag,
    season: SeasonTag,
    style: StyleTag,
    style_notes: String,
    score: u8,
}

impl OutfitProposal {
    pub(crate) fn new(
        name: String,
        item_ids: Vec<ItemId>,
        occasion: OccasionTag,
        season: SeasonTag,
        style: StyleTag,
        style_notes: String,
        score: u8,
    ) -> Self {
        Self {
            name,
            item_ids,
            occasion,
            season,
            style,
            style_notes,
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in selection order
    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    pub fn occasion(&self) -> OccasionTag {
        self.occasion
    }

    pub fn season(&self) -> SeasonTag {
        self.season
    }

    pub fn style(&self) -> StyleTag {
        self.style
    }

    pub fn style_notes(&self) -> &str {
        &self.style_notes
    }

    /// Compatibility score in `0..=100`
    pub fn score(&self) -> u8 {
        self.score
    }
}
