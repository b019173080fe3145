//! Score threshold estimation from decoy hit counts
use super::*;
use std::cmp::Ordering;

/// Total order on spectra by descending top score, with unidentified
/// spectra placed after every identified one
pub fn compare_by_score(a: &Spectrum, b: &Spectrum) -> Ordering {
    match (a.top_score(), b.top_score()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return the score at which the decoy/target ratio first exceeds `target`
/// percent.
///
/// Spectra are walked from best to worst top score. A hit counts as a decoy
/// only when every protein it maps to carries the decoy marker. If the walk
/// runs into unidentified spectra before exceeding the target, the threshold
/// is 0. If every spectrum is identified and the target is never exceeded,
/// the score of the last spectrum is returned.
pub fn threshold_for_fdr(spectra: &[Spectrum], target: f64) -> f64 {
    let mut sorted = spectra.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| compare_by_score(a, b));

    let mut decoy = 0usize;
    let mut direct = 0usize;
    for spectrum in &sorted {
        let hit = match spectrum.top_hit() {
            Some(hit) => hit,
            None => return 0.0,
        };
        if hit.is_decoy() {
            decoy += 1;
        } else {
            direct += 1;
        }
        let ratio = decoy as f64 / direct as f64 * 100.0;
        if ratio > target {
            log::debug!(
                "FDR {:.2}% exceeded after {} targets and {} decoys",
                ratio,
                direct,
                decoy
            );
            return hit.score;
        }
    }

    sorted
        .last()
        .and_then(|spectrum| spectrum.top_score())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn hit(score: f64, accession: &'static str) -> PeptideHit<'static> {
        PeptideHit {
            sequence: "PEPTIDE".into(),
            score,
            mass: 799.36,
            delta: 0.0,
            modifications: vec![0; 7],
            n_term: 0,
            c_term: 0,
            proteins: vec![ProteinLocation {
                accession,
                start: 0,
                end: 0,
            }],
        }
    }

    fn spectrum(query: usize, top: Option<PeptideHit<'static>>) -> Spectrum<'static> {
        let mut s = Spectrum::new(query);
        s.peptides.extend(top);
        s
    }

    fn catalog() -> Vec<Spectrum<'static>> {
        vec![
            spectrum(1, Some(hit(60.0, "\"P1\""))),
            spectrum(2, None),
            spectrum(3, Some(hit(50.0, "\"P2\""))),
            spectrum(4, Some(hit(40.0, "\"REVERSED_P3\""))),
            spectrum(5, Some(hit(30.0, "\"P4\""))),
            spectrum(6, Some(hit(20.0, "\"REVERSED_P5\""))),
            spectrum(7, Some(hit(10.0, "\"P6\""))),
        ]
    }

    #[test]
    fn unidentified_sorts_last() {
        let mut v = catalog();
        v.sort_by(compare_by_score);
        assert_eq!(
            v.iter().map(|s| s.query).collect::<Vec<_>>(),
            vec![1, 3, 4, 5, 6, 7, 2]
        );
    }

    #[test]
    fn threshold_at_boundary() {
        let v = catalog();
        // 1 decoy / 2 targets = 50%
        assert_eq!(threshold_for_fdr(&v, 40.0), 40.0);
        // 2 decoys / 3 targets = 66%
        assert_eq!(threshold_for_fdr(&v, 60.0), 20.0);
        // never exceeded, walk ends on the unidentified spectrum
        assert_eq!(threshold_for_fdr(&v, 100.0), 0.0);
        // catalog order is untouched
        assert_eq!(v[1].query, 2);
    }

    #[test]
    fn exhausted_walk_returns_last_score() {
        let v = catalog()
            .into_iter()
            .filter(|s| s.top_hit().is_some())
            .collect::<Vec<_>>();
        assert_eq!(threshold_for_fdr(&v, 100.0), 10.0);
        assert_eq!(threshold_for_fdr(&[], 1.0), 0.0);
    }

    #[test]
    fn raising_target_never_raises_threshold() {
        let v = catalog();
        let mut previous = f64::INFINITY;
        for target in [0.0, 10.0, 33.0, 50.0, 60.0, 66.0, 67.0, 100.0, 1000.0] {
            let t = threshold_for_fdr(&v, target);
            assert!(t <= previous, "{} > {} at {}%", t, previous, target);
            previous = t;
        }
    }
}
