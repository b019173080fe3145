//! Catalog of spectra, proteins and modifications read from a single
//! search result
use super::*;
#[cfg(feature = "serialization")]
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
/// Container for data read from a Mascot search result file
pub struct ParseResult<'s> {
    /// Spectra in query order
    pub spectra: Vec<Spectrum<'s>>,
    pub proteins: Vec<Protein<'s>>,
    pub fixed_modifications: ModificationTable<'s>,
    pub variable_modifications: ModificationTable<'s>,
    /// Spectra file the search was run on
    pub source_file: Option<&'s str>,
    /// Position in `spectra` by scan number
    scan_index: Vec<Option<usize>>,
}

impl<'s> ParseResult<'s> {
    pub fn new(
        spectra: Vec<Spectrum<'s>>,
        proteins: Vec<Protein<'s>>,
        fixed_modifications: ModificationTable<'s>,
        variable_modifications: ModificationTable<'s>,
        source_file: Option<&'s str>,
    ) -> Self {
        let max = spectra
            .iter()
            .map(|s| s.scan_number as usize)
            .max()
            .unwrap_or(0);
        // A scan number shared by several spectra resolves to the last one
        let mut scan_index = vec![None; max + 1];
        for (i, s) in spectra.iter().enumerate() {
            scan_index[s.scan_number as usize] = Some(i);
        }
        ParseResult {
            spectra,
            proteins,
            fixed_modifications,
            variable_modifications,
            source_file,
            scan_index,
        }
    }

    /// Look up a spectrum by its instrument scan number
    pub fn by_scan(&self, scan_number: u32) -> Option<&Spectrum<'s>> {
        self.scan_index
            .get(scan_number as usize)
            .copied()
            .flatten()
            .map(|i| &self.spectra[i])
    }

    /// Look up a spectrum by its 1-based query number
    pub fn by_query(&self, query: usize) -> Option<&Spectrum<'s>> {
        query.checked_sub(1).and_then(|i| self.spectra.get(i))
    }

    /// Return a set of all protein accessions present in the catalog,
    /// without quotes
    pub fn accessions(&self) -> HashSet<&'s str> {
        self.proteins.iter().map(|pr| pr.accession()).collect()
    }

    /// Create a `HashMap` correlating an unquoted accession to its protein
    pub fn map(&self) -> HashMap<&'s str, &Protein<'s>> {
        self.proteins.iter().map(|pr| (pr.accession(), pr)).collect()
    }

    /// True if the searched database contained decoy entries
    pub fn is_fdr_available(&self) -> bool {
        self.proteins.iter().any(Protein::is_decoy)
    }

    /// Score threshold giving a false discovery rate of `target` percent
    pub fn fdr_threshold(&self, target: f64) -> f64 {
        fdr::threshold_for_fdr(&self.spectra, target)
    }
}
