use std::fmt;

use anyhow::{Context, Result};
use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::models::{Game, Player};

/// One `{players, games}` data set as of a single fetch, immutable for
/// the duration of an aggregation call.
///
/// The backend represents `players` either as an ordered list or as a
/// mapping keyed by opaque strings; both normalize into the same ordered
/// list here so nothing downstream branches on input shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "players_list_or_map")]
    pub players: Vec<Player>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl Snapshot {
    /// Parse a raw backend response and normalize it.
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(text).context("Failed to parse snapshot JSON")?;
        Ok(snapshot.normalized())
    }

    /// Fill in missing game ids, sequentially after the highest id present.
    pub fn normalized(mut self) -> Self {
        let mut next_id = self.games.iter().filter_map(|g| g.id).max().unwrap_or(0);
        for game in &mut self.games {
            if game.id.is_none() {
                next_id += 1;
                game.id = Some(next_id);
            }
        }
        self
    }
}

fn players_list_or_map<'de, D>(deserializer: D) -> Result<Vec<Player>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PlayersShape;

    impl<'de> Visitor<'de> for PlayersShape {
        type Value = Vec<Player>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a player list or a map of players keyed by opaque strings")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut players = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(player) = seq.next_element()? {
                players.push(player);
            }
            Ok(players)
        }

        // Entries arrive in document order, which is the order we keep.
        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut players = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_key, player)) = map.next_entry::<IgnoredAny, Player>()? {
                players.push(player);
            }
            Ok(players)
        }
    }

    deserializer.deserialize_any(PlayersShape)
}
