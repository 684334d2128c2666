//! Section addressing and the active-set state machine.

use std::str::FromStr;

use crate::error::OptionError;

/// Zero-based position of a section in the current section sequence.
///
/// Positional: reordering the sequence reassigns indices.
pub type SectionIndex = usize;

/// The ordered set of expanded sections.
///
/// The accordion never mutates an `ActiveSet` it was given; toggling produces
/// a new value that is handed back to the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActiveSet(Vec<SectionIndex>);

impl ActiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: SectionIndex) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionIndex> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[SectionIndex] {
        &self.0
    }

    /// Compute the set that results from toggling `index`.
    ///
    /// An active index is removed. Otherwise it is appended when
    /// `expand_multiple` is set, or replaces the whole set when it isn't.
    pub fn toggled(&self, index: SectionIndex, expand_multiple: bool) -> ActiveSet {
        if self.contains(index) {
            ActiveSet(self.iter().filter(|&i| i != index).collect())
        } else if expand_multiple {
            let mut next = self.0.clone();
            next.push(index);
            ActiveSet(next)
        } else {
            ActiveSet(vec![index])
        }
    }
}

impl From<Vec<SectionIndex>> for ActiveSet {
    fn from(indices: Vec<SectionIndex>) -> Self {
        Self(indices)
    }
}

impl<const N: usize> From<[SectionIndex; N]> for ActiveSet {
    fn from(indices: [SectionIndex; N]) -> Self {
        Self(indices.to_vec())
    }
}

impl FromIterator<SectionIndex> for ActiveSet {
    fn from_iter<T: IntoIterator<Item = SectionIndex>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<ActiveSet> for Vec<SectionIndex> {
    fn from(set: ActiveSet) -> Self {
        set.0
    }
}

impl FromStr for ActiveSet {
    type Err = OptionError;

    /// Parses a comma separated index list; an empty string is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_index_list(s, "activeSections").map(Self)
    }
}

pub(crate) fn parse_index_list(
    s: &str,
    option: &'static str,
) -> Result<Vec<SectionIndex>, OptionError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<SectionIndex>()
                .map_err(|_| OptionError::InvalidValue {
                    option,
                    value: s.to_string(),
                })
        })
        .collect()
}

/// Everything a render callback gets to know about one section.
#[derive(Debug)]
pub struct SectionContext<'a, S> {
    pub section: &'a S,
    pub index: SectionIndex,
    pub expanded: bool,
    pub sections: &'a [S],
    pub disabled: bool,
}

// Manual impls: deriving would demand `S: Clone`/`S: Copy`.
impl<S> Clone for SectionContext<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SectionContext<'_, S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_lists() {
        assert_eq!("0, 2".parse::<ActiveSet>().unwrap(), ActiveSet::from([0, 2]));
        assert_eq!("".parse::<ActiveSet>().unwrap(), ActiveSet::new());
        assert!("0,x".parse::<ActiveSet>().is_err());
    }
}
