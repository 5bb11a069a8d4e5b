use entity::sea_orm_active_enums::Gender;
use serde::Deserialize;

/// One tour's ranking list as served by the upstream rankings endpoint,
/// fetched once per tour (`atp`, `wta`).
#[derive(Debug, Clone, Deserialize)]
pub struct RankingFeed {
    pub rankings: Vec<RankingRow>,
}

/// A single ranking entry. Depending on the feed revision the player
/// object is keyed `player` or `team`.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingRow {
    pub ranking: i32,
    pub points: Option<i32>,
    #[serde(alias = "team")]
    pub player: RankedPlayer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankedPlayer {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub country: Option<CountryRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRef {
    pub name: Option<String>,
}

impl RankingRow {
    /// Feed gender when present, otherwise inferred from the tour the
    /// list belongs to.
    pub fn gender(&self, tour: &str) -> Gender {
        match self.player.gender.as_deref() {
            Some("F") => Gender::F,
            Some("M") => Gender::M,
            _ if tour.eq_ignore_ascii_case("wta") => Gender::F,
            _ => Gender::M,
        }
    }

    pub fn country(&self) -> Option<String> {
        self.player.country.as_ref().and_then(|c| c.name.clone())
    }
}
