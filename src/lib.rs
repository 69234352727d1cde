//! A double Poisson model of football scorelines. Turns each team's recent scoring and conceding
//! averages, together with form, opponent strength and weather adjustments, into scoring rates;
//! derives truncated goal distributions from those rates; and combines them into a scoregrid from
//! which the home win, draw and away win probabilities and the most likely scoreline are read.

pub mod display;
pub mod error;
pub mod file;
pub mod fixture;
pub mod form;
pub mod linear;
pub mod outcome;
pub mod poisson;
pub mod predict;
pub mod print;
pub mod probs;
pub mod rate;
pub mod scoregrid;
pub mod weather;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
