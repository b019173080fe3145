use super::util;
use std::borrow::Cow;
#[cfg(feature = "serialization")]
use serde::Serialize;

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(PartialEq, PartialOrd, Clone, Debug)]
/// Protein entry from the `proteins` section of a search result
pub struct Protein<'s> {
    /// Accession exactly as written, surrounding quotes included
    pub name: &'s str,
    /// Long-form description, quotes included
    pub description: &'s str,
    /// Protein mass
    pub mass: f64,
}

impl<'s> Protein<'s> {
    /// Accession with surrounding double quotes removed
    pub fn accession(&self) -> &'s str {
        self.name.trim_matches('"')
    }

    /// Return a boolean indicating whether this entry is a synthetic decoy
    pub fn is_decoy(&self) -> bool {
        util::contains_decoy_marker(self.name)
    }
}

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
/// Occurrence of a peptide sequence inside a protein
pub struct ProteinLocation<'s> {
    /// Accession token, quotes included
    pub accession: &'s str,
    /// Holds the *end* residue of the match: the search-result reader has
    /// always written the end position into this slot. Kept as-is because
    /// downstream consumers were built against it.
    pub start: u32,
    /// Never populated by the reader, always 0
    pub end: u32,
}

impl<'s> ProteinLocation<'s> {
    /// Accession with surrounding double quotes removed
    pub fn accession(&self) -> &'s str {
        self.accession.trim_matches('"')
    }
}

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(PartialEq, PartialOrd, Clone, Debug)]
/// Candidate peptide identification of a single spectrum
pub struct PeptideHit<'s> {
    /// Peptide sequence, after ambiguous-residue substitutions
    pub sequence: Cow<'s, str>,
    pub score: f64,
    /// Calculated peptide mass
    pub mass: f64,
    /// Difference between experimental and calculated mass
    pub delta: f64,
    /// Modification code for each residue, 0 for unmodified
    pub modifications: Vec<u8>,
    /// N-terminal modification code
    pub n_term: u8,
    /// C-terminal modification code
    pub c_term: u8,
    /// Every protein this sequence occurs in
    pub proteins: Vec<ProteinLocation<'s>>,
}

impl<'s> PeptideHit<'s> {
    /// Protein accessions this hit may belong to, unquoted and without
    /// duplicates, in document order
    pub fn accessions(&self) -> Vec<&'s str> {
        let mut v: Vec<&'s str> = Vec::with_capacity(self.proteins.len());
        for loc in &self.proteins {
            let acc = loc.accession();
            if !v.contains(&acc) {
                v.push(acc);
            }
        }
        v
    }

    /// A hit is a decoy only if every protein it maps to is a decoy
    pub fn is_decoy(&self) -> bool {
        self.proteins
            .iter()
            .all(|loc| util::contains_decoy_marker(loc.accession))
    }

    /// Key used to collapse redundant identifications of the same
    /// modified peptide
    pub fn modified_key(&self) -> (&str, &[u8], u8, u8) {
        (
            self.sequence.as_ref(),
            &self.modifications,
            self.n_term,
            self.c_term,
        )
    }
}
