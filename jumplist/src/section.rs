use core::fmt;

use crate::InvalidSectionId;

const SYMBOLS: [&str; SectionId::COUNT] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", "#",
];

/// One jump target of the index strip.
///
/// The universe is fixed: the 26 uppercase letters `A`–`Z` in alphabetical order, followed by the
/// catch-all `#` for entries that don't start with a letter. The ordering of this type *is* the
/// strip ordering, regardless of which sections hold data.
///
/// With `feature = "serde"`, this type (de)serializes as its display character.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "char", into = "char"))]
pub struct SectionId(u8);

impl SectionId {
    /// Number of sections in the universe (26 letters + `#`).
    pub const COUNT: usize = 27;

    /// The catch-all section (`#`).
    pub const OTHER: SectionId = SectionId(26);

    /// Every section in strip order.
    pub const ALL: [SectionId; Self::COUNT] = {
        let mut out = [SectionId(0); Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            out[i] = SectionId(i as u8);
            i += 1;
        }
        out
    };

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Position of this section in the strip (`A` = 0, `#` = 26).
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Maps an ASCII letter (either case) or `#` to its section.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A'..='Z' => Some(Self(c as u8 - b'A')),
            'a'..='z' => Some(Self(c as u8 - b'a')),
            '#' => Some(Self::OTHER),
            _ => None,
        }
    }

    /// Buckets a label by its first character. Anything that doesn't start with an ASCII letter
    /// (digits, punctuation, non-latin scripts, the empty string) lands in `#`.
    pub fn for_label(label: &str) -> Self {
        label
            .chars()
            .next()
            .filter(char::is_ascii_alphabetic)
            .and_then(Self::from_char)
            .unwrap_or(Self::OTHER)
    }

    pub fn as_char(self) -> char {
        if self == Self::OTHER {
            '#'
        } else {
            (b'A' + self.0) as char
        }
    }

    pub fn as_str(self) -> &'static str {
        SYMBOLS[self.index()]
    }

    pub fn is_other(self) -> bool {
        self == Self::OTHER
    }

    pub fn iter() -> impl DoubleEndedIterator<Item = SectionId> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for SectionId {
    type Error = InvalidSectionId;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(InvalidSectionId(c))
    }
}

impl From<SectionId> for char {
    fn from(id: SectionId) -> Self {
        id.as_char()
    }
}

/// A compact set of sections (one bit per section).
///
/// Used to describe which sections currently hold entries, which is what the strip's
/// empty-section skip walks over.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionSet(u32);

impl SectionSet {
    pub const EMPTY: SectionSet = SectionSet(0);
    pub const FULL: SectionSet = SectionSet((1 << SectionId::COUNT) - 1);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, id: SectionId) -> bool {
        let bit = 1u32 << id.index();
        let had = self.0 & bit != 0;
        self.0 |= bit;
        !had
    }

    pub fn remove(&mut self, id: SectionId) -> bool {
        let bit = 1u32 << id.index();
        let had = self.0 & bit != 0;
        self.0 &= !bit;
        had
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.0 & (1u32 << id.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates members in strip order.
    pub fn iter(&self) -> impl Iterator<Item = SectionId> + use<> {
        let set = *self;
        SectionId::iter().filter(move |id| set.contains(*id))
    }
}

impl FromIterator<SectionId> for SectionSet {
    fn from_iter<I: IntoIterator<Item = SectionId>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Debug for SectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
