use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Not};

/// Position of a tag in the configured tag list, starting at 1.
pub type TagId = usize;

/// Upper bound on the number of tags so every set fits in a `u32` mask.
pub const MAX_TAGS: usize = 31;

/// A set of tags stored as a bit mask, where bit `n - 1` represents tag `n`.
///
/// A client is visible on a monitor when its set intersects the monitor's
/// active set. A set may be empty.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct TagSet(u32);

impl TagSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The set holding only `id`. Ids outside `1..=MAX_TAGS` give the empty set.
    #[must_use]
    pub const fn single(id: TagId) -> Self {
        if id == 0 || id > MAX_TAGS {
            return Self::EMPTY;
        }
        Self(1 << (id - 1))
    }

    /// The set of the first `count` tags.
    #[must_use]
    pub const fn mask(count: usize) -> Self {
        if count >= 32 {
            return Self::ALL;
        }
        Self((1u32 << count) - 1)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn contains(self, id: TagId) -> bool {
        self.intersects(Self::single(id))
    }

    /// Ids of the tags in the set, lowest first.
    pub fn ids(self) -> impl Iterator<Item = TagId> {
        (1..=MAX_TAGS).filter(move |id| self.contains(*id))
    }
}

impl BitAnd for TagSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for TagSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TagSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXor for TagSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for TagSet {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl FromIterator<TagId> for TagSet {
    fn from_iter<I: IntoIterator<Item = TagId>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, id| set | Self::single(id))
    }
}

/// The configured tag labels, in order.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Tags {
    labels: Vec<String>,
}

impl Tags {
    /// Builds the tag list from labels, dropping any beyond `MAX_TAGS`.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        let mut labels = labels;
        if labels.len() > MAX_TAGS {
            tracing::warn!("only the first {} tags are used", MAX_TAGS);
            labels.truncate(MAX_TAGS);
        }
        Self { labels }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self, id: TagId) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Mask of every configured tag.
    #[must_use]
    pub const fn mask(&self) -> TagSet {
        TagSet::mask(self.labels.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tags_map_to_bits() {
        assert_eq!(TagSet::single(1).bits(), 0b1);
        assert_eq!(TagSet::single(3).bits(), 0b100);
        assert_eq!(TagSet::single(0), TagSet::EMPTY);
        assert_eq!(TagSet::single(32), TagSet::EMPTY);
    }

    #[test]
    fn mask_covers_configured_tags() {
        assert_eq!(TagSet::mask(0), TagSet::EMPTY);
        assert_eq!(TagSet::mask(9).bits(), 0x1ff);
        assert_eq!(TagSet::mask(31).bits(), 0x7fff_ffff);
    }

    #[test]
    fn ids_are_listed_in_order() {
        let set: TagSet = [5, 2, 9].into_iter().collect();
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![2, 5, 9]);
        assert!(set.contains(5));
        assert!(!set.contains(1));
    }

    #[test]
    fn toggling_a_tag_flips_its_bit() {
        let set = TagSet::single(1) | TagSet::single(2);
        assert_eq!(set ^ TagSet::single(2), TagSet::single(1));
        assert!((set & !TagSet::single(1)).contains(2));
    }

    #[test]
    fn tag_list_is_capped() {
        let labels = (1..=40).map(|i| i.to_string()).collect();
        let tags = Tags::new(labels);
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags.label(1), Some("1"));
        assert_eq!(tags.label(0), None);
        assert_eq!(tags.mask().bits(), 0x7fff_ffff);
    }
}
