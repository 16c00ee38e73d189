use std::fmt::Debug;
use std::hash::Hash;

/// A node in one protocol version's entity type hierarchy.
///
/// Abstract types (e.g. "any boat") have no protocol id but take part in
/// ancestor queries, which is what the entity data filters key on.
pub trait EntityType: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Dense index of this type within its version's type list, abstract types included.
    fn ordinal(self) -> usize;

    fn parent(self) -> Option<Self>;

    /// Protocol id, `None` for abstract types.
    fn id(self) -> Option<i32>;

    /// Registry name without namespace, e.g. `oak_boat`.
    fn name(self) -> &'static str;

    /// True if `self` is `other` or descends from it.
    fn is_or_has_parent(self, other: Self) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == other {
                return true;
            }
            current = ty.parent();
        }
        false
    }

    /// Number of ancestors above this type (the root has depth 0).
    fn depth(self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(ty) = current {
            depth += 1;
            current = ty.parent();
        }
        depth
    }
}

/// Precomputed "is-a" relation: one bitset per type holding the ordinals of
/// the type itself and all of its ancestors.
#[derive(Debug, Clone)]
pub struct AncestorTable {
    words: usize,
    bits: Vec<u64>,
}

impl AncestorTable {
    /// Build the table from every type of a version, ordered by ordinal.
    pub fn build<T: EntityType>(all: &[T]) -> Self {
        let words = all.len().div_ceil(64).max(1);
        let mut bits = vec![0u64; words * all.len()];
        for ty in all {
            let row = ty.ordinal() * words;
            let mut current = Some(*ty);
            while let Some(ancestor) = current {
                let ord = ancestor.ordinal();
                bits[row + ord / 64] |= 1u64 << (ord % 64);
                current = ancestor.parent();
            }
        }
        Self { words, bits }
    }

    pub fn is_or_has_parent(&self, child: usize, ancestor: usize) -> bool {
        let word = child * self.words + ancestor / 64;
        self.bits
            .get(word)
            .is_some_and(|w| w & (1u64 << (ancestor % 64)) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Tiny {
        Root,
        Vehicle,
        Boat,
        Living,
    }

    const ALL: [Tiny; 4] = [Tiny::Root, Tiny::Vehicle, Tiny::Boat, Tiny::Living];

    impl EntityType for Tiny {
        fn ordinal(self) -> usize {
            self as usize
        }

        fn parent(self) -> Option<Self> {
            match self {
                Tiny::Root => None,
                Tiny::Vehicle | Tiny::Living => Some(Tiny::Root),
                Tiny::Boat => Some(Tiny::Vehicle),
            }
        }

        fn id(self) -> Option<i32> {
            match self {
                Tiny::Boat => Some(0),
                _ => None,
            }
        }

        fn name(self) -> &'static str {
            "tiny"
        }
    }

    #[test]
    fn test_parent_chain_queries() {
        assert!(Tiny::Boat.is_or_has_parent(Tiny::Root));
        assert!(Tiny::Boat.is_or_has_parent(Tiny::Boat));
        assert!(!Tiny::Boat.is_or_has_parent(Tiny::Living));
        assert_eq!(Tiny::Boat.depth(), 2);
        assert_eq!(Tiny::Root.depth(), 0);
    }

    #[test]
    fn test_ancestor_table_matches_parent_chain() {
        let table = AncestorTable::build(&ALL);
        for child in ALL {
            for ancestor in ALL {
                assert_eq!(
                    table.is_or_has_parent(child.ordinal(), ancestor.ordinal()),
                    child.is_or_has_parent(ancestor),
                    "{:?} / {:?}",
                    child,
                    ancestor
                );
            }
        }
    }
}
