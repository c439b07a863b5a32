use std::{collections::BTreeSet, fmt, str::FromStr};

use strum::{EnumIter, EnumString, IntoEnumIterator};
use thiserror::Error;

/// Canonical texts of all bar-like classifications.
pub const BAR_LIKE_CLASSIFICATIONS: [&str; 3] = ["bar", "nightclub", "bar+nightclub"];

const TAG_SEPARATOR: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ClassTag {
    #[strum(serialize = "bar")]
    Bar,
    #[strum(serialize = "nightclub", serialize = "night_club")]
    Nightclub,
    #[strum(serialize = "restaurant")]
    Restaurant,
    #[strum(serialize = "other")]
    Other,
}

impl ClassTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Nightclub => "nightclub",
            Self::Restaurant => "restaurant",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty set of classification tags.
///
/// The canonical text form joins the tags in declaration order
/// with `+`, e.g. `bar+nightclub`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification(BTreeSet<ClassTag>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassificationParseError {
    #[error("Empty classification")]
    Empty,
    #[error("Unknown classification tag '{0}'")]
    UnknownTag(String),
}

impl Classification {
    pub fn new(tags: impl IntoIterator<Item = ClassTag>) -> Option<Self> {
        let tags: BTreeSet<_> = tags.into_iter().collect();
        (!tags.is_empty()).then_some(Self(tags))
    }

    pub fn single(tag: ClassTag) -> Self {
        Self(BTreeSet::from([tag]))
    }

    pub fn bar() -> Self {
        Self::single(ClassTag::Bar)
    }

    pub fn nightclub() -> Self {
        Self::single(ClassTag::Nightclub)
    }

    pub fn bar_and_nightclub() -> Self {
        Self(BTreeSet::from([ClassTag::Bar, ClassTag::Nightclub]))
    }

    pub fn restaurant() -> Self {
        Self::single(ClassTag::Restaurant)
    }

    pub fn other() -> Self {
        Self::single(ClassTag::Other)
    }

    pub fn contains(&self, tag: ClassTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = ClassTag> + '_ {
        self.0.iter().copied()
    }

    /// Only {bar}, {nightclub} and {bar, nightclub} count as bar-like.
    pub fn is_bar_like(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|tag| matches!(tag, ClassTag::Bar | ClassTag::Nightclub))
    }

    /// All classifications that pass the bar-like gate.
    pub fn all_bar_like() -> [Self; 3] {
        [Self::bar(), Self::nightclub(), Self::bar_and_nightclub()]
    }

    /// Derives a classification from the type list of a places record.
    ///
    /// Restaurant is only kept if no bar tag is present.
    pub fn from_place_types<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tags: BTreeSet<ClassTag> = types
            .into_iter()
            .filter_map(|t| ClassTag::from_str(t).ok())
            .filter(|t| *t != ClassTag::Other)
            .collect();
        if tags.contains(&ClassTag::Bar) || tags.contains(&ClassTag::Nightclub) {
            tags.remove(&ClassTag::Restaurant);
        }
        if tags.is_empty() {
            return Self::other();
        }
        Self(tags)
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::bar()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, tag) in ClassTag::iter().filter(|t| self.0.contains(t)).enumerate() {
            if i > 0 {
                write!(f, "{TAG_SEPARATOR}")?;
            }
            f.write_str(tag.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Classification {
    type Err = ClassificationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags = s
            .split(TAG_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| {
                ClassTag::from_str(t).map_err(|_| ClassificationParseError::UnknownTag(t.to_owned()))
            })
            .collect::<Result<BTreeSet<_>, _>>()?;
        if tags.is_empty() {
            return Err(ClassificationParseError::Empty);
        }
        Ok(Self(tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_order() {
        let c = Classification::new([ClassTag::Nightclub, ClassTag::Bar]).unwrap();
        assert_eq!("bar+nightclub", c.to_string());
        let c = Classification::new([ClassTag::Other, ClassTag::Restaurant, ClassTag::Bar]).unwrap();
        assert_eq!("bar+restaurant+other", c.to_string());
    }

    #[test]
    fn parse_text() {
        assert_eq!(Ok(Classification::bar()), "bar".parse());
        assert_eq!(Ok(Classification::nightclub()), "night_club".parse());
        assert_eq!(Ok(Classification::bar_and_nightclub()), "nightclub+bar".parse());
        assert_eq!(Ok(Classification::restaurant()), "Restaurant".parse());
        assert_eq!(
            Err(ClassificationParseError::UnknownTag("pub".into())),
            "bar+pub".parse::<Classification>()
        );
        assert_eq!(Err(ClassificationParseError::Empty), "".parse::<Classification>());
    }

    #[test]
    fn bar_like_membership() {
        assert!(Classification::bar().is_bar_like());
        assert!(Classification::nightclub().is_bar_like());
        assert!(Classification::bar_and_nightclub().is_bar_like());
        assert!(!Classification::restaurant().is_bar_like());
        assert!(!Classification::other().is_bar_like());
        let mixed = Classification::new([ClassTag::Bar, ClassTag::Restaurant]).unwrap();
        assert!(!mixed.is_bar_like());
    }

    #[test]
    fn bar_like_texts_match_classifications() {
        let texts: Vec<_> = Classification::all_bar_like()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(texts, BAR_LIKE_CLASSIFICATIONS);
    }

    #[test]
    fn derive_from_place_types() {
        let c = Classification::from_place_types(["bar", "restaurant", "food", "point_of_interest"]);
        assert_eq!(Classification::bar(), c);
        let c = Classification::from_place_types(["night_club", "bar"]);
        assert_eq!(Classification::bar_and_nightclub(), c);
        let c = Classification::from_place_types(["restaurant", "food"]);
        assert_eq!(Classification::restaurant(), c);
        let c = Classification::from_place_types(["cafe"]);
        assert_eq!(Classification::other(), c);
        // no substring matching
        let c = Classification::from_place_types(["sushi_bar"]);
        assert_eq!(Classification::other(), c);
    }
}
