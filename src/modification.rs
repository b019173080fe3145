//! Fixed and variable modification tables declared by a search
use std::collections::BTreeMap;
#[cfg(feature = "serialization")]
use serde::Serialize;

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub struct Modification<'s> {
    /// Residues the modification applies to, e.g. `M` or `ST`
    pub amino_acids: &'s str,
    /// Display name, e.g. `Oxidation (M)`
    pub name: &'s str,
    /// Mass delta
    pub mass: f64,
}

/// Modifications indexed by the code used in peptide modification strings.
///
/// The number of usable codes is fixed by the declaration in the parameters
/// section; codes inside that range may be left unpopulated.
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(PartialEq, Clone, Debug, Default)]
pub struct ModificationTable<'s> {
    size: usize,
    entries: BTreeMap<u8, Modification<'s>>,
}

impl<'s> ModificationTable<'s> {
    pub fn with_size(size: usize) -> Self {
        ModificationTable {
            size,
            entries: BTreeMap::new(),
        }
    }

    /// Number of codes this table was declared with
    pub fn size(&self) -> usize {
        self.size
    }

    /// Store a modification under `code`, returning `None` if the code lies
    /// outside the declared range
    pub fn insert(&mut self, code: u8, modification: Modification<'s>) -> Option<()> {
        if (code as usize) < self.size {
            self.entries.insert(code, modification);
            Some(())
        } else {
            None
        }
    }

    pub fn get(&self, code: u8) -> Option<&Modification<'s>> {
        self.entries.get(&code)
    }

    /// Populated entries in ascending code order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Modification<'s>)> {
        self.entries.iter().map(|(code, m)| (*code, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sparse_codes() {
        let ox = Modification {
            amino_acids: "M",
            name: "Oxidation (M)",
            mass: 15.994915,
        };
        let mut table = ModificationTable::with_size(4);
        assert_eq!(table.insert(3, ox), Some(()));
        assert_eq!(table.insert(4, ox), None);
        assert_eq!(table.get(1), None);
        assert_eq!(table.get(3), Some(&ox));
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().map(|(c, _)| c).collect::<Vec<_>>(), vec![3]);
    }
}
