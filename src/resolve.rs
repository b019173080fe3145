//! Resolve peptide identifications into quantifiable protein groups
//!
//! Resolution runs in stages over the parsed catalog:
//!
//! 1. [`filter_and_dedup`] rejects unidentified and low-scoring spectra and
//!    collapses repeated identifications of the same modified peptide
//! 2. [`disambiguate`] strikes protein accessions that no identification
//!    distinguishes from a co-listed accession
//! 3. [`assign_accessions`] keeps identifications left with exactly one
//!    protein
//! 4. [`group_proteins`] builds protein groups that reach the
//!    peptides-per-protein minimum
//!
//! Every identification that does not end up in a group is kept in the
//! rejection list together with the reason, so the whole run can be audited.
use super::*;
use itertools::Itertools;
#[cfg(feature = "serialization")]
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

/// Description used for accessions missing from the proteins section
pub const UNDESCRIBED: &str =
    "This protein is not described in source .dat file. See initial FASTA file for protein description";

/// Data that make a resolution run impossible
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("score threshold {0} is not a finite number")]
    Threshold(f64),
    #[error("query {query}: {field} of the top peptide hit is not a finite number")]
    NonNumeric { query: usize, field: &'static str },
    #[error("query {query}: {codes} modification codes for sequence {sequence}")]
    ModificationCodes {
        query: usize,
        codes: usize,
        sequence: String,
    },
}

/// Receives coarse progress checkpoints, 0 to 100
pub trait Progress {
    fn report(&mut self, percent: u8);
}

impl<F: FnMut(u8)> Progress for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
/// Top peptide hit of a spectrum that survived filtering
pub struct RetainedIdentification<'a> {
    pub spectrum: &'a Spectrum<'a>,
    pub peptide: &'a PeptideHit<'a>,
    /// Protein accessions still in contention, unquoted
    pub candidates: Vec<&'a str>,
    /// Protein the peptide was finally assigned to
    pub accession: Option<&'a str>,
}

impl<'a> RetainedIdentification<'a> {
    pub fn new(spectrum: &'a Spectrum<'a>, peptide: &'a PeptideHit<'a>) -> Self {
        RetainedIdentification {
            spectrum,
            peptide,
            candidates: peptide.accessions(),
            accession: None,
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
/// Audit record of a spectrum and why it was, or was not, quantified
pub struct RejectedIdentification<'a> {
    pub spectrum: &'a Spectrum<'a>,
    pub peptide: Option<&'a PeptideHit<'a>>,
    pub reason: String,
    /// Set for members of accepted protein groups
    pub quantified: bool,
}

impl<'a> RejectedIdentification<'a> {
    pub fn new(
        spectrum: &'a Spectrum<'a>,
        peptide: Option<&'a PeptideHit<'a>>,
        reason: String,
    ) -> Self {
        RejectedIdentification {
            spectrum,
            peptide,
            reason,
            quantified: false,
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
/// Protein and the identifications resolved to it
pub struct ProteinGroup<'a> {
    /// Unquoted accession
    pub accession: &'a str,
    pub description: &'a str,
    /// Catalog entry, if the search result describes this protein
    pub protein: Option<&'a Protein<'a>>,
    pub peptides: Vec<RetainedIdentification<'a>>,
    /// Abundance estimate, filled in by quantification
    pub estimate: f64,
}

impl<'a> ProteinGroup<'a> {
    pub fn new(
        accession: &'a str,
        proteins: &'a [Protein<'a>],
        peptides: Vec<RetainedIdentification<'a>>,
    ) -> Self {
        let protein = proteins.iter().find(|p| {
            p.name
                .strip_prefix('"')
                .and_then(|n| n.strip_suffix('"'))
                == Some(accession)
        });
        ProteinGroup {
            accession,
            description: protein.map_or(UNDESCRIBED, |p| p.description),
            protein,
            peptides,
            estimate: 0.0,
        }
    }
}

#[cfg_attr(feature = "serialization", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution<'a> {
    /// Protein groups in ascending accession order
    pub groups: Vec<ProteinGroup<'a>>,
    /// Members of every group, ordered by scan number
    pub accepted: Vec<RetainedIdentification<'a>>,
    /// Rejected spectra, followed by an audit entry for each accepted one
    pub rejected: Vec<RejectedIdentification<'a>>,
}

impl<'a> Resolution<'a> {
    /// Write one tab-delimited row per quantified peptide
    pub fn write_groups<W: Write>(&self, mut output: W) -> io::Result<()> {
        writeln!(output, "accession\tdescription\tpeptides\tsequence\tscan\tscore")?;
        for group in &self.groups {
            for pep in &group.peptides {
                writeln!(
                    output,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    group.accession,
                    group.description,
                    group.peptides.len(),
                    pep.peptide.sequence,
                    pep.spectrum.scan_number,
                    pep.peptide.score
                )?;
            }
        }
        Ok(())
    }

    /// Write the audit list as tab-delimited `scan, m/z, reason` rows,
    /// ordered by scan number
    pub fn write_audit<W: Write>(&self, mut output: W) -> io::Result<()> {
        let mut entries = self.rejected.iter().collect::<Vec<_>>();
        entries.sort_by_key(|r| r.spectrum.scan_number);
        for r in entries {
            writeln!(
                output,
                "{}\t{}\t{}",
                r.spectrum.scan_number, r.spectrum.mz, r.reason
            )?;
        }
        Ok(())
    }
}

fn validate(spectrum: &Spectrum, hit: &PeptideHit) -> Result<(), ResolveError> {
    for (field, value) in [("score", hit.score), ("mass", hit.mass), ("delta", hit.delta)] {
        if !value.is_finite() {
            return Err(ResolveError::NonNumeric {
                query: spectrum.query,
                field,
            });
        }
    }
    if hit.modifications.len() != hit.sequence.chars().count() {
        return Err(ResolveError::ModificationCodes {
            query: spectrum.query,
            codes: hit.modifications.len(),
            sequence: hit.sequence.to_string(),
        });
    }
    Ok(())
}

/// Reject unidentified and low-scoring spectra, and keep a single
/// identification of each modified peptide.
///
/// With score filtering the best scoring identification is kept, otherwise
/// the first one in query order.
pub fn filter_and_dedup<'a>(
    spectra: &'a [Spectrum<'a>],
    settings: &Settings,
) -> Result<(Vec<RetainedIdentification<'a>>, Vec<RejectedIdentification<'a>>), ResolveError> {
    if !settings.score_threshold.is_finite() {
        return Err(ResolveError::Threshold(settings.score_threshold));
    }

    let mut retained = Vec::new();
    let mut rejected = Vec::new();
    let mut passing: Vec<(&'a Spectrum<'a>, &'a PeptideHit<'a>)> = Vec::new();
    for spectrum in spectra {
        match spectrum.top_hit() {
            None => rejected.push(RejectedIdentification::new(
                spectrum,
                None,
                "No peptides identified".into(),
            )),
            Some(hit) => {
                validate(spectrum, hit)?;
                if hit.score < settings.score_threshold {
                    rejected.push(RejectedIdentification::new(
                        spectrum,
                        Some(hit),
                        "Peptides identified under score limit".into(),
                    ));
                } else {
                    passing.push((spectrum, hit));
                }
            }
        }
    }

    // Stable, so each run of equal peptides stays in query order
    passing.sort_by(|a, b| a.1.modified_key().cmp(&b.1.modified_key()));

    let mut i = 0;
    while i < passing.len() {
        let key = passing[i].1.modified_key();
        let end = i + passing[i..]
            .iter()
            .take_while(|(_, hit)| hit.modified_key() == key)
            .count();

        let best = if settings.score_filtering {
            (i + 1..end).fold(i, |best, j| {
                if passing[j].1.score > passing[best].1.score {
                    j
                } else {
                    best
                }
            })
        } else {
            i
        };
        let (kept, kept_hit) = passing[best];

        for (j, &(other, other_hit)) in passing.iter().enumerate().take(end).skip(i) {
            if j == best {
                continue;
            }
            let reason = if settings.score_filtering {
                format!(
                    "Not the best score ({}) for peptide {} (Max={})",
                    other_hit.score, other_hit.sequence, kept_hit.score
                )
            } else {
                format!(
                    "Duplicate of query {} for peptide {}",
                    kept.query, other_hit.sequence
                )
            };
            rejected.push(RejectedIdentification::new(other, Some(other_hit), reason));
        }
        retained.push(RetainedIdentification::new(kept, kept_hit));
        i = end;
    }

    log::debug!(
        "{} identifications retained, {} rejected",
        retained.len(),
        rejected.len()
    );
    Ok((retained, rejected))
}

/// Strike every accession that cannot be distinguished from one of its
/// co-listed accessions, returning the number of accessions struck.
///
/// An accession `a` is examined on the first identification listing it. Each
/// other accession on that identification must be missing from at least one
/// identification that lists `a` and was acquired at a different retention
/// time; otherwise `a` is removed from every identification. All decisions
/// are taken against the candidate sets as they stand on entry, and applied
/// together afterwards.
pub fn disambiguate<'a>(retained: &mut [RetainedIdentification<'a>]) -> usize {
    let mut processed: HashSet<&'a str> = HashSet::new();
    let mut strike: HashSet<&'a str> = HashSet::new();

    for current in retained.iter() {
        for &accession in &current.candidates {
            if !processed.insert(accession) {
                continue;
            }
            let peers = current
                .candidates
                .iter()
                .filter(|&&p| p != accession)
                .collect::<Vec<_>>();

            let mut independent: HashSet<&str> = HashSet::new();
            for other in retained.iter() {
                if other.spectrum.rt == current.spectrum.rt
                    || !other.candidates.contains(&accession)
                {
                    continue;
                }
                for &&peer in &peers {
                    if !other.candidates.contains(&peer) {
                        independent.insert(peer);
                    }
                }
            }

            if independent.len() != peers.len() {
                strike.insert(accession);
            }
        }
    }

    if !strike.is_empty() {
        log::debug!("striking {} indistinguishable accessions", strike.len());
        for ident in retained.iter_mut() {
            ident.candidates.retain(|acc| !strike.contains(acc));
        }
    }
    strike.len()
}

fn ambiguous(candidates: &[&str]) -> String {
    if candidates.is_empty() {
        "This entry ambiguously defined as part of 0 proteins".into()
    } else {
        format!(
            "This entry ambiguously defined as part of {} proteins: {}",
            candidates.len(),
            candidates.iter().join(", ")
        )
    }
}

/// Assign the remaining accession to every identification left with exactly
/// one candidate; the rest are rejected
pub fn assign_accessions<'a>(
    retained: Vec<RetainedIdentification<'a>>,
) -> (Vec<RetainedIdentification<'a>>, Vec<RejectedIdentification<'a>>) {
    let mut resolved = Vec::with_capacity(retained.len());
    let mut rejected = Vec::new();
    for mut ident in retained {
        if ident.candidates.len() == 1 {
            ident.accession = ident.candidates.first().copied();
            resolved.push(ident);
        } else {
            rejected.push(RejectedIdentification::new(
                ident.spectrum,
                Some(ident.peptide),
                ambiguous(&ident.candidates),
            ));
        }
    }
    (resolved, rejected)
}

/// Build a protein group for every accession with at least `minimum`
/// resolved identifications.
///
/// Returns the groups, their members, and the rejection list: members of
/// groups that are too small, followed by an audit entry for every member of
/// an accepted group.
pub fn group_proteins<'a>(
    mut resolved: Vec<RetainedIdentification<'a>>,
    proteins: &'a [Protein<'a>],
    minimum: usize,
) -> (
    Vec<ProteinGroup<'a>>,
    Vec<RetainedIdentification<'a>>,
    Vec<RejectedIdentification<'a>>,
) {
    resolved.sort_by(|a, b| a.accession.cmp(&b.accession));

    let mut groups = Vec::new();
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    let mut audit = Vec::new();

    let chunks = resolved.into_iter().chunk_by(|ident| ident.accession);
    for (accession, chunk) in &chunks {
        let accession = accession.unwrap_or_default();
        let members = chunk.collect::<Vec<_>>();
        if members.len() >= minimum {
            for ident in &members {
                audit.push(RejectedIdentification {
                    quantified: true,
                    ..RejectedIdentification::new(
                        ident.spectrum,
                        Some(ident.peptide),
                        format!("This entry belongs to \"{}\" quantified protein", accession),
                    )
                });
            }
            accepted.extend(members.iter().cloned());
            groups.push(ProteinGroup::new(accession, proteins, members));
        } else {
            let count = members.len();
            for ident in members {
                rejected.push(RejectedIdentification::new(
                    ident.spectrum,
                    Some(ident.peptide),
                    format!(
                        "This entry belongs to \"{}\" protein which have only {} uniquely identified peptide(s)",
                        accession, count
                    ),
                ));
            }
        }
    }
    rejected.extend(audit);
    (groups, accepted, rejected)
}

/// Run every resolution stage over a parsed search result
pub fn resolve<'a>(
    result: &'a ParseResult<'a>,
    settings: &Settings,
) -> Result<Resolution<'a>, ResolveError> {
    resolve_with_progress(result, settings, &mut |_: u8| {})
}

/// Run every resolution stage, reporting checkpoints to `progress`
pub fn resolve_with_progress<'a, P: Progress>(
    result: &'a ParseResult<'a>,
    settings: &Settings,
    progress: &mut P,
) -> Result<Resolution<'a>, ResolveError> {
    let (mut retained, mut rejected) = filter_and_dedup(&result.spectra, settings)?;

    let struck = disambiguate(&mut retained);
    progress.report(50);

    let (resolved, ambiguous) = assign_accessions(retained);
    rejected.extend(ambiguous);
    progress.report(60);

    let (groups, mut accepted, audit) =
        group_proteins(resolved, &result.proteins, settings.peptides_per_protein);
    progress.report(70);
    rejected.extend(audit);
    progress.report(80);

    accepted.sort_by_key(|ident| ident.spectrum.scan_number);
    progress.report(90);

    log::info!(
        "{} protein groups from {} identifications ({} accessions struck, {} entries rejected)",
        groups.len(),
        accepted.len(),
        struck,
        rejected.iter().filter(|r| !r.quantified).count()
    );
    progress.report(100);

    Ok(Resolution {
        groups,
        accepted,
        rejected,
    })
}
