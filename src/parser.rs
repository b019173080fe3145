//! Parse Mascot search result (.dat) files
//!
//! The document is a MIME multipart file. Each section is located by a
//! marker line and ends at the next line starting with the boundary
//! character `-`.

use super::*;

use regex::Regex;
use std::borrow::Cow;
use std::str::{FromStr, Lines};
use std::sync::LazyLock;

/// First line of every search result document
pub const BANNER: &str = "MIME-Version: 1.0 (Generated by Mascot version 1.0)";

const BOUNDARY: char = '-';

static SCAN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FinneganScanNumber%3a%20([0-9]*)").unwrap());
static ELUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Elution%20from%3a%20(.*)").unwrap());
static RT_APEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"RT%20Apex%3a%20(.*)").unwrap());

#[derive(PartialEq, PartialOrd, Debug, thiserror::Error)]
pub enum ErrorKind {
    /// First line is not the expected banner
    #[error("not a Mascot search result")]
    Banner,
    /// Input ended before a section marker was found
    #[error("section `{0}` not found")]
    MissingSection(&'static str),
    /// Modification in the masses section could not be read
    #[error("inconsistent description of modifications")]
    Modifications,
    /// Error converting to number
    #[error("error converting to number")]
    Conversion,
    /// Line does not have the expected layout
    #[error("malformed line")]
    Malformed,
    /// Unexpected end-of-file
    #[error("unexpected end-of-file")]
    EOF,
}

/// Error that may occur during parsing of a search result
#[derive(PartialEq, PartialOrd, Debug, thiserror::Error)]
#[error("Error parsing file at line {line}: {kind}")]
pub struct Error {
    kind: ErrorKind,
    line: usize,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 1-based number of the line being read when the error occurred
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Sections of the document, in the order they must appear
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Section {
    Header,
    Parameters,
    Masses,
    Summary,
    Peptides,
    Proteins,
    Queries,
    Done,
}

pub struct Parser<'s> {
    input: &'s str,
    iter: Lines<'s>,
    line: usize,
    source_file: Option<&'s str>,
    fixed: ModificationTable<'s>,
    variable: ModificationTable<'s>,
    spectra: Vec<Spectrum<'s>>,
    proteins: Vec<Protein<'s>>,
}

/// Text following the first `=`, or the whole line if there is none
#[inline]
fn value(line: &str) -> &str {
    line.split_once('=').map_or(line, |(_, v)| v)
}

fn number<T: FromStr>(s: &str) -> Result<T, ErrorKind> {
    s.trim().parse::<T>().map_err(|_| ErrorKind::Conversion)
}

/// Read a single-digit code from the start of `s`
fn digit(s: &str) -> Result<u8, ErrorKind> {
    s.chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as u8)
        .ok_or(ErrorKind::Conversion)
}

/// Case-insensitive check of the key at the start of a line
#[inline]
fn key_is(line: &str, key: &str) -> bool {
    line.get(..key.len())
        .map_or(false, |k| k.eq_ignore_ascii_case(key))
}

/// `Name (AA)` style modification description following `code=mass,`
fn modification(line: &str) -> Option<Modification<'_>> {
    let mut tokens = line.split(&['=', ','][..]).skip(1);
    let mass = number::<f64>(tokens.next()?).ok()?;
    let name = tokens.next()?;
    let amino_acids = name.split(&['(', ')'][..]).nth(1)?;
    Some(Modification {
        amino_acids,
        name,
        mass,
    })
}

/// Minutes encoded after `marker` in a title, decoding `%2e` and reading up
/// to the next encoded space. A title without the marker yields 0.
fn encoded_minutes(title: &str, marker: &Regex) -> Result<f64, ErrorKind> {
    match marker.captures(title).and_then(|c| c.get(1)) {
        Some(rest) => {
            let decoded = rest.as_str().replace("%2e", ".");
            let end = decoded.find("%20").ok_or(ErrorKind::Malformed)?;
            number(&decoded[..end])
        }
        None => Ok(0.0),
    }
}

/// Apply a single line of a per-query block to its spectrum. Fields already
/// assigned stay assigned if a later field fails.
fn query_line<'s>(spectrum: &mut Spectrum<'s>, line: &'s str) -> Result<(), ErrorKind> {
    if line.len() > 5 && key_is(line, "title") {
        spectrum.title = line.get(6..).unwrap_or_default();
        spectrum.scan_number = match SCAN_NUMBER.captures(line) {
            Some(c) => number(&c[1])?,
            None => 0,
        };
        spectrum.rt = encoded_minutes(line, &ELUTION)?;
        spectrum.rt_apex = encoded_minutes(line, &RT_APEX)?;
    }
    if line.len() > 6 && key_is(line, "charge") {
        spectrum.charge = digit(line.get(7..).unwrap_or_default())?;
    }
    if line.len() > 5 && key_is(line, "scans") {
        spectrum.scan_number = number(line.get(6..).unwrap_or_default())?;
    }
    if line.len() > 11 && key_is(line, "rtinseconds") {
        spectrum.rt = number::<f64>(line.get(12..).unwrap_or_default())? / 60.0;
    }
    Ok(())
}

impl<'s> Parser<'s> {
    /// Create a new parser operating on input data
    pub fn new(input: &'s str) -> Parser<'s> {
        Parser {
            input,
            iter: input.lines(),
            line: 0,
            source_file: None,
            fixed: ModificationTable::default(),
            variable: ModificationTable::default(),
            spectra: Vec::new(),
            proteins: Vec::new(),
        }
    }

    /// Convenience function for creating Error struct
    fn err(&self, kind: ErrorKind) -> Error {
        Error {
            kind,
            line: self.line,
        }
    }

    fn number<T: FromStr>(&self, s: &str) -> Result<T, Error> {
        number(s).map_err(|kind| self.err(kind))
    }

    fn next(&mut self) -> Result<&'s str, Error> {
        match self.iter.next() {
            Some(line) => {
                self.line += 1;
                Ok(line)
            }
            None => Err(self.err(ErrorKind::EOF)),
        }
    }

    /// Advance past the first line containing `marker`
    fn seek(&mut self, marker: &str) -> bool {
        for line in self.iter.by_ref() {
            self.line += 1;
            if line.contains(marker) {
                return true;
            }
        }
        false
    }

    fn section(&mut self, marker: &'static str) -> Result<(), Error> {
        if self.seek(marker) {
            Ok(())
        } else {
            Err(self.err(ErrorKind::MissingSection(marker)))
        }
    }

    /// Reset the cursor to the first line of the document
    fn rewind(&mut self) {
        self.iter = self.input.lines();
        self.line = 0;
    }

    fn parse_header(&mut self) -> Result<(), Error> {
        if self.next().ok() != Some(BANNER) {
            return Err(self.err(ErrorKind::Banner));
        }
        Ok(())
    }

    fn parse_parameters(&mut self) -> Result<(), Error> {
        self.section("parameters")?;
        loop {
            let line = self.next()?;
            if let Some(pos) = line.find("FILE=") {
                self.source_file = Some(&line[pos + 5..]);
            }
            // Declarations size the tables; entries are filled from the
            // masses section
            if line.starts_with("MODS=") {
                self.fixed = ModificationTable::with_size(line.split(&['=', ','][..]).count());
            }
            if line.contains("IT_MODS=") {
                self.variable = ModificationTable::with_size(line.split(&['=', ','][..]).count());
            }
            if line.starts_with(BOUNDARY) {
                return Ok(());
            }
        }
    }

    fn parse_modification(&mut self, line: &'s str) -> Option<()> {
        if let Some(code) = line.strip_prefix("delta") {
            let code = digit(code).ok()?;
            self.variable.insert(code, modification(line)?)
        } else if let Some(code) = line.strip_prefix("FixedMod") {
            // FixedModResidues1=, FixedModNeutralLoss1=, ...
            if !code.starts_with(|c: char| c.is_ascii_digit()) {
                return Some(());
            }
            let code = digit(code).ok()?;
            self.fixed.insert(code, modification(line)?)
        } else {
            Some(())
        }
    }

    fn parse_masses(&mut self) -> Result<(), Error> {
        self.section("masses")?;
        let mut line = self.next()?;
        while !line.starts_with(BOUNDARY) {
            line = self.next()?;
            self.parse_modification(line)
                .ok_or_else(|| self.err(ErrorKind::Modifications))?;
        }
        Ok(())
    }

    fn parse_summary(&mut self) -> Result<(), Error> {
        self.section("summary")?;
        // spacing
        self.next()?;

        let mut line = self.next()?;
        while !line.contains("num_hits") {
            let mut spectrum = Spectrum::new(self.spectra.len() + 1);
            // qmass1=402.204024
            spectrum.mass = self.number(value(line))?;

            // qexp1=403.211300,1+
            let exp = value(self.next()?);
            let comma = exp
                .find(',')
                .filter(|&c| c > 0)
                .ok_or_else(|| self.err(ErrorKind::Malformed))?;
            // The character in front of the comma is not part of the m/z
            let mz = exp
                .get(..comma - 1)
                .ok_or_else(|| self.err(ErrorKind::Malformed))?;
            spectrum.mz = self.number(mz)?;
            spectrum.charge = digit(&exp[comma + 1..]).map_err(|kind| self.err(kind))?;

            // qintensity1=1.0000 is optional, qmatch1=21075 follows it
            line = self.next()?;
            if line.starts_with("qintensity") {
                spectrum.intensity = Some(self.number(value(line))?);
                self.next()?;
            }
            self.spectra.push(spectrum);

            // qplughole1=29.158475
            self.next()?;
            line = self.next()?;
        }
        Ok(())
    }

    /// Query number encoded in a `q12_p1=` line
    fn query_number(&self, line: &str) -> Result<usize, Error> {
        let end = line
            .find('_')
            .ok_or_else(|| self.err(ErrorKind::Malformed))?;
        self.number(line.get(1..end).unwrap_or_default())
    }

    /// Parse a peptide hit and every follow-up line belonging to it,
    /// returning the hit and the first line that does not belong to it
    fn parse_hit(&mut self, line: &'s str) -> Result<(PeptideHit<'s>, &'s str), Error> {
        let tokens = line.split(&['=', ',', ';'][..]).collect::<Vec<_>>();
        if tokens.len() < 12 {
            return Err(self.err(ErrorKind::Malformed));
        }
        let key = tokens[0];
        let mass = self.number(tokens[2])?;
        let delta = self.number(tokens[3])?;
        let score = self.number(tokens[8])?;

        let mut proteins = Vec::with_capacity(tokens.len() - 12);
        for &token in &tokens[12..] {
            let fields = token.split(':').collect::<Vec<_>>();
            if fields.len() < 4 {
                return Err(self.err(ErrorKind::Malformed));
            }
            let mut location = ProteinLocation {
                accession: fields[0],
                start: 0,
                end: 0,
            };
            // Both position columns are written to `start`; the end column wins
            location.start = self.number(fields[2])?;
            location.start = self.number(fields[3])?;
            proteins.push(location);
        }

        // N-terminal code, one code per residue, C-terminal code
        let length = tokens[5].len();
        let codes = tokens[7];
        if codes.len() < length + 2 {
            return Err(self.err(ErrorKind::Conversion));
        }
        let code = |i: usize| {
            digit(codes.get(i..).unwrap_or_default()).map_err(|kind| self.err(kind))
        };
        let modifications = (1..=length).map(code).collect::<Result<Vec<_>, _>>()?;
        let n_term = code(0)?;
        let c_term = code(length + 1)?;

        let mut sequence = Cow::Borrowed(tokens[5]);
        let mut next = self.next()?;
        while next
            .strip_prefix(key)
            .map_or(false, |rest| rest.starts_with('_'))
        {
            // q1_p1_subst=4,X,L
            if next.contains("subst") {
                let mut fields = next.split(&['=', ','][..]).skip(2);
                match (fields.next(), fields.next()) {
                    (Some(from), Some(to)) if !from.is_empty() => {
                        sequence = Cow::Owned(sequence.replace(from, to));
                    }
                    _ => return Err(self.err(ErrorKind::Malformed)),
                }
            }
            next = self.next()?;
        }

        Ok((
            PeptideHit {
                sequence,
                score,
                mass,
                delta,
                modifications,
                n_term,
                c_term,
                proteins,
            },
            next,
        ))
    }

    fn parse_peptides(&mut self) -> Result<(), Error> {
        self.section("peptides")?;
        // spacing
        self.next()?;

        let mut line = self.next()?;
        for i in 0..self.spectra.len() {
            if value(line) == "-1" {
                // q1_p1=-1, nothing was identified
                line = self.next()?;
                if line.starts_with(BOUNDARY) {
                    break;
                }
                continue;
            }
            let mut query = self.query_number(line)?;
            while query == i + 1 {
                let (hit, next) = self.parse_hit(line)?;
                self.spectra[i].peptides.push(hit);
                line = next;
                if line.starts_with(BOUNDARY) {
                    return Ok(());
                }
                query = self.query_number(line)?;
            }
        }
        Ok(())
    }

    fn parse_proteins(&mut self) -> Result<(), Error> {
        self.section("proteins")?;
        // spacing
        self.next()?;

        let mut line = self.next()?;
        while !line.starts_with(BOUNDARY) {
            // "ALBU_HUMAN"=69321.49,"Serum albumin"
            let (eq, comma) = match (line.find('='), line.find(',')) {
                (Some(eq), Some(comma)) if eq < comma => (eq, comma),
                _ => return Err(self.err(ErrorKind::Malformed)),
            };
            self.proteins.push(Protein {
                name: &line[..eq],
                description: &line[comma + 1..],
                mass: self.number(&line[eq + 1..comma])?,
            });
            line = self.next()?;
            // "ZN726_HUMAN"_tax=9606
            while line.contains("\"_tax=") {
                line = self.next()?;
            }
        }
        Ok(())
    }

    fn parse_query(&mut self, index: usize) -> Result<(), Error> {
        if !self.seek(&format!("query{}", index + 1)) {
            return Err(self.err(ErrorKind::EOF));
        }
        loop {
            let line = self.next()?;
            query_line(&mut self.spectra[index], line).map_err(|kind| self.err(kind))?;
            if line.starts_with(BOUNDARY) {
                return Ok(());
            }
        }
    }

    /// A block that cannot be read leaves its spectrum as far as it got, and
    /// the next block is searched for from the start of the document
    fn parse_queries(&mut self) {
        for index in 0..self.spectra.len() {
            if let Err(e) = self.parse_query(index) {
                log::warn!("query{}: {}, restarting from the top", index + 1, e);
                self.rewind();
            }
        }
    }

    fn finish(self) -> ParseResult<'s> {
        log::info!(
            "parsed {} spectra, {} proteins, {} fixed and {} variable modifications",
            self.spectra.len(),
            self.proteins.len(),
            self.fixed.len(),
            self.variable.len()
        );
        ParseResult::new(
            self.spectra,
            self.proteins,
            self.fixed,
            self.variable,
            self.source_file,
        )
    }

    pub fn parse(mut self) -> Result<ParseResult<'s>, Error> {
        let mut section = Section::Header;
        while section != Section::Done {
            log::debug!("line {}: {:?}", self.line, section);
            section = match section {
                Section::Header => {
                    self.parse_header()?;
                    Section::Parameters
                }
                Section::Parameters => {
                    self.parse_parameters()?;
                    Section::Masses
                }
                Section::Masses => {
                    self.parse_masses()?;
                    Section::Summary
                }
                Section::Summary => {
                    self.parse_summary()?;
                    Section::Peptides
                }
                Section::Peptides => {
                    self.parse_peptides()?;
                    Section::Proteins
                }
                Section::Proteins => {
                    self.parse_proteins()?;
                    Section::Queries
                }
                Section::Queries => {
                    self.parse_queries();
                    Section::Done
                }
                Section::Done => Section::Done,
            };
        }
        Ok(self.finish())
    }
}
