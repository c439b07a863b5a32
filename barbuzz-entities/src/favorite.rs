use crate::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStatus {
    Favorited,
    Unfavorited,
}

impl FavoriteStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Favorited => "favorited",
            Self::Unfavorited => "unfavorited",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Favorite {
    pub user_id: Id,
    pub establishment_id: Id,
}
