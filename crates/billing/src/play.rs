use serde::{Deserialize, Serialize};

/// Play category. Each genre has its own pricing and credit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Tragedy,
    Comedy,
}

impl Genre {
    /// Interpret a genre tag as loaded from catalog data. Matching is exact.
    pub fn parse(tag: &str) -> Option<Genre> {
        match tag {
            "tragedy" => Some(Genre::Tragedy),
            "comedy" => Some(Genre::Comedy),
            _ => None,
        }
    }
}

/// Play metadata as held by the catalog.
///
/// The genre is kept as the raw tag the data provider supplied. Catalog data is
/// open-ended, so a tag may name a genre with no pricing rule; that surfaces as
/// `DomainError::UnknownPlayGenre` when the play is priced (or earlier, from
/// `Catalog::validate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    name: String,
    #[serde(alias = "type")]
    genre: String,
}

impl Play {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw genre tag.
    pub fn genre_tag(&self) -> &str {
        &self.genre
    }

    /// Parsed genre, if the tag names one with a pricing rule.
    pub fn genre(&self) -> Option<Genre> {
        Genre::parse(&self.genre)
    }
}
