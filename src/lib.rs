//! navlayout library exports

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod cli;
pub mod core;

#[cfg(test)]
pub mod test_support;

/// Which of the two navigation lists a node lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSide {
    #[default]
    Top,
    Bottom,
}

impl ListSide {
    /// The other list.
    pub fn opposite(self) -> Self {
        match self {
            ListSide::Top => ListSide::Bottom,
            ListSide::Bottom => ListSide::Top,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListSide::Top => "top",
            ListSide::Bottom => "bottom",
        }
    }
}
