//! REST repositories.
//!
//! Each repository translates domain operations for one entity into requests against the
//! backend and implements the queries used by duplicate detection. The backend offers no
//! uniqueness query, so duplicate lookups fetch a superset of records and filter them in
//! memory: Player, Team and draft slot lookups fetch the whole collection, award, combine
//! score, schedule and drafted-player lookups fetch only one player's or team's records.

pub mod combine_score;
pub mod draft_pick;
pub mod player;
pub mod player_award;
pub mod player_team;
pub mod schedule;
pub mod team;

#[cfg(test)]
mod tests;
