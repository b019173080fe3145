use super::*;
#[cfg(feature = "serialization")]
use serde::Serialize;

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(PartialEq, PartialOrd, Clone, Debug, Default)]
/// Experimental spectrum (query) and the peptide hits reported for it
pub struct Spectrum<'s> {
    /// 1-based position of the query in the document
    pub query: usize,
    /// Precursor mass
    pub mass: f64,
    /// Precursor mass-to-charge ratio
    pub mz: f64,
    pub charge: u8,
    pub intensity: Option<f64>,
    /// Retention time, in minutes
    pub rt: f64,
    /// Retention time at the apex of the MS1 signal, in minutes
    pub rt_apex: f64,
    /// Instrument scan number, 0 when the document does not carry one
    pub scan_number: u32,
    /// Percent-encoded title of the query
    pub title: &'s str,
    /// Hits in the order the search engine ranked them
    pub peptides: Vec<PeptideHit<'s>>,
}

impl<'s> Spectrum<'s> {
    pub fn new(query: usize) -> Spectrum<'s> {
        Spectrum {
            query,
            ..Default::default()
        }
    }

    /// Best-ranked peptide hit, if the spectrum was identified at all
    pub fn top_hit(&self) -> Option<&PeptideHit<'s>> {
        self.peptides.first()
    }

    pub fn top_score(&self) -> Option<f64> {
        self.top_hit().map(|hit| hit.score)
    }
}
