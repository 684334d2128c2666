use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::OptionError;
use crate::section::{SectionIndex, parse_index_list};

/// Which sections refuse user toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Disabled {
    #[default]
    None,
    All,
    Set(BTreeSet<SectionIndex>),
}

impl Disabled {
    pub fn contains(&self, index: SectionIndex) -> bool {
        match self {
            Disabled::None => false,
            Disabled::All => true,
            Disabled::Set(set) => set.contains(&index),
        }
    }
}

impl From<bool> for Disabled {
    fn from(all: bool) -> Self {
        if all { Disabled::All } else { Disabled::None }
    }
}

impl From<Vec<SectionIndex>> for Disabled {
    fn from(indices: Vec<SectionIndex>) -> Self {
        indices.into_iter().collect()
    }
}

impl<const N: usize> From<[SectionIndex; N]> for Disabled {
    fn from(indices: [SectionIndex; N]) -> Self {
        indices.into_iter().collect()
    }
}

impl FromIterator<SectionIndex> for Disabled {
    fn from_iter<T: IntoIterator<Item = SectionIndex>>(iter: T) -> Self {
        Disabled::Set(iter.into_iter().collect())
    }
}

impl FromStr for Disabled {
    type Err = OptionError;

    /// `true`, `false`, or a comma separated index list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "true" => Ok(Disabled::All),
            "false" => Ok(Disabled::None),
            list => parse_index_list(list, "disabled").map(Disabled::from),
        }
    }
}
