//! Utility functions shared by services and stores.
//!
//! Draft helpers compute the round of a pick and the default start date of a drafted
//! player's team link.

pub mod draft;
