//! Records exchanged with the draft backend.
//!
//! Every record is flat and keyed by an optional `id` assigned by the backend on creation.
//! Records that take part in duplicate detection also expose a natural key, the set of fields
//! that identify the same real-world thing regardless of its `id`.

pub mod api;
pub mod combine_score;
pub mod draft_pick;
pub mod draft_selection;
pub mod player;
pub mod player_award;
pub mod player_team;
pub mod position;
pub mod schedule;
pub mod team;

pub use combine_score::CombineScore;
pub use draft_pick::DraftPick;
pub use draft_selection::DraftSelection;
pub use player::Player;
pub use player_award::PlayerAward;
pub use player_team::PlayerTeam;
pub use position::Position;
pub use schedule::Schedule;
pub use team::Team;

/// A record stored by the backend under a numeric identifier.
pub trait Entity: Clone {
    /// Type name reported in duplicate errors, e.g. `DraftPick`
    const NAME: &'static str;
    /// Lower case name used in store messages, e.g. `draft pick`
    const LABEL: &'static str;

    /// Identifier assigned by the backend, `None` until the record is created
    fn id(&self) -> Option<i32>;
}

/// Fields that semantically identify a record independent of its identifier.
///
/// String components are lower cased when the key is built so comparing two keys is
/// case-insensitive.
pub trait NaturalKey {
    type Key: Eq + std::fmt::Debug;

    fn natural_key(&self) -> Self::Key;
}
