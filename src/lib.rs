//! A Rust library for reading Mascot search result files and resolving the
//! peptide identifications they contain into quantifiable protein groups
//!
//! ```ignore
//! let result = mascot_proteomics::read_search_result(&input)?;
//! let resolution = mascot_proteomics::resolve(&result, &Settings::default())?;
//! resolution.write_groups(std::io::stdout())?;
//! ```
mod document;
mod fdr;
mod modification;
mod parser;
mod protein;
mod resolve;
mod settings;
mod spectrum;
pub mod util;

#[cfg(test)]
mod fixtures;

pub use document::ParseResult;
pub use fdr::{compare_by_score, threshold_for_fdr};
pub use modification::{Modification, ModificationTable};
pub use parser::{Error, ErrorKind, Parser, BANNER};
pub use protein::{PeptideHit, Protein, ProteinLocation};
pub use resolve::{
    assign_accessions, disambiguate, filter_and_dedup, group_proteins, resolve,
    resolve_with_progress, Progress, ProteinGroup, RejectedIdentification, Resolution,
    ResolveError, RetainedIdentification, UNDESCRIBED,
};
pub use settings::{Settings, SettingsError};
pub use spectrum::Spectrum;

/// Parse a string containing a complete search result into a `ParseResult`
pub fn read_search_result(input: &str) -> Result<ParseResult<'_>, Error> {
    Parser::new(input).parse()
}
