/// Substring that marks a protein entry as a decoy
pub const DECOY_MARKER: &str = "REVERSED";

/// Case-insensitive check for the decoy marker
#[inline]
pub fn contains_decoy_marker(name: &str) -> bool {
    name.to_ascii_uppercase().contains(DECOY_MARKER)
}

/// Compare two sequences residue by residue, treating I and L as identical
/// since they cannot be told apart by mass
pub fn ms_equal(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes().zip(b.bytes()).all(|(x, y)| {
            x == y || matches!((x, y), (b'I', b'L') | (b'L', b'I'))
        })
}

/// Contribution of a single residue to the relative intensity of the first
/// isotope peak
#[inline]
fn isotope_contribution(residue: u8) -> f64 {
    match residue {
        b'A' => 0.037096769,
        b'C' => 0.071153682,
        b'D' => 0.048674349,
        b'E' => 0.059720103,
        b'F' => 0.102451192,
        b'G' => 0.026051014,
        b'H' => 0.077161165,
        b'I' => 0.070234033,
        b'K' => 0.074042639,
        b'L' => 0.070234033,
        b'M' => 0.067194178,
        b'N' => 0.052102029,
        b'P' => 0.058958252,
        b'Q' => 0.063147783,
        b'R' => 0.081429824,
        b'S' => 0.037477695,
        b'T' => 0.048523449,
        b'V' => 0.059188279,
        b'W' => 0.127891254,
        b'Y' => 0.102832117,
        _ => 0.0,
    }
}

/// Isotopic score of a peptide sequence. Unknown residues contribute
/// nothing. The sum is carried at single precision.
pub fn isotopic_score(sequence: &str) -> f64 {
    let score = sequence
        .bytes()
        .map(isotope_contribution)
        .fold(0.0f64, |acc, x| acc + x);
    score as f32 as f64
}

/// Isotopic score estimated from mass alone, using the averagine model
#[inline]
pub fn averagine_isotopic_score(mass: f64) -> f64 {
    mass * 0.00052945
}
