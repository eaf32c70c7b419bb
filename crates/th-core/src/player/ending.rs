//! Terminal outcomes of a game

use serde::{Deserialize, Serialize};

use crate::news::News;

/// How a game ended
///
/// Returned by the checks on [`super::Hunter`] instead of stopping the
/// process, so the driving loop decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// All three treasures found
    Victory { report: News },
    /// Gold fell below zero after a lost brawl
    Defeat { deficit: i32, report: News },
}

impl Ending {
    pub const fn is_victory(&self) -> bool {
        matches!(self, Ending::Victory { .. })
    }

    /// The final report shown to the player
    pub fn report(&self) -> &News {
        match self {
            Ending::Victory { report } | Ending::Defeat { report, .. } => report,
        }
    }

    pub fn into_report(self) -> News {
        match self {
            Ending::Victory { report } | Ending::Defeat { report, .. } => report,
        }
    }
}
