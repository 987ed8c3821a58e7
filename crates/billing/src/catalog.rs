use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult, PlayId};

use crate::play::Play;

/// Immutable lookup from play id to play metadata.
///
/// Serializes as a JSON object keyed by play id. A document that repeats a
/// play id is rejected rather than letting the later entry win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: BTreeMap<PlayId, Play>,
}

impl Catalog {
    pub fn new(plays: BTreeMap<PlayId, Play>) -> Self {
        Self { plays }
    }

    /// Build a catalog from `(id, play)` pairs, rejecting a repeated id.
    pub fn try_from_plays<I>(plays: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (PlayId, Play)>,
    {
        let mut map = BTreeMap::new();
        for (play_id, play) in plays {
            insert_unique(&mut map, play_id, play)?;
        }
        Ok(Self { plays: map })
    }

    pub fn get(&self, play_id: &PlayId) -> Option<&Play> {
        self.plays.get(play_id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayId, &Play)> {
        self.plays.iter()
    }

    /// Check every play's genre up front.
    ///
    /// Loaders call this to reject a catalog at construction time instead of
    /// failing on the first statement that prices the bad play. Plays are
    /// checked in id order, so the reported play is deterministic.
    pub fn validate(&self) -> DomainResult<()> {
        for (play_id, play) in &self.plays {
            if play.genre().is_none() {
                return Err(DomainError::unknown_genre(play.genre_tag(), play_id.as_str()));
            }
        }
        Ok(())
    }
}

fn insert_unique(
    plays: &mut BTreeMap<PlayId, Play>,
    play_id: PlayId,
    play: Play,
) -> DomainResult<()> {
    match plays.entry(play_id) {
        Entry::Vacant(slot) => {
            slot.insert(play);
            Ok(())
        }
        Entry::Occupied(slot) => Err(DomainError::validation(format!(
            "duplicate play id: {}",
            slot.key()
        ))),
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of play id to play")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut plays = BTreeMap::new();
                while let Some((play_id, play)) = access.next_entry::<PlayId, Play>()? {
                    insert_unique(&mut plays, play_id, play).map_err(de::Error::custom)?;
                }
                Ok(Catalog { plays })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
