use crate::model::protein::{AnalysisRow, PersistedProtein};
use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Average masses of the 20 standard amino acids, keyed by one-letter code.
const RESIDUE_WEIGHTS: [(char, f64); 20] = [
    ('A', 89.1),
    ('R', 174.2),
    ('N', 132.1),
    ('D', 133.1),
    ('C', 121.2),
    ('E', 147.1),
    ('Q', 146.2),
    ('G', 75.1),
    ('H', 155.2),
    ('I', 131.2),
    ('L', 131.2),
    ('K', 146.2),
    ('M', 149.2),
    ('F', 165.2),
    ('P', 115.1),
    ('S', 105.1),
    ('T', 119.1),
    ('W', 204.2),
    ('Y', 181.2),
    ('V', 117.1),
];

static WEIGHT_TABLE: Lazy<HashMap<char, f64>> =
    Lazy::new(|| RESIDUE_WEIGHTS.into_iter().collect());

/// Weight total plus the characters that had no table entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightBreakdown {
    pub total: f64,
    /// Unrecognized characters in traversal order, repeats included.
    pub unrecognized: Vec<char>,
}

/// Returns the table weight for one residue code, if it has one.
pub fn residue_weight(residue: char) -> Option<f64> {
    WEIGHT_TABLE.get(&residue).copied()
}

/// Sums residue weights over `sequence` without side effects.
pub fn weigh_sequence(sequence: &str) -> WeightBreakdown {
    let mut breakdown = WeightBreakdown::default();
    for residue in sequence.chars() {
        match residue_weight(residue) {
            Some(weight) => breakdown.total += weight,
            None => breakdown.unrecognized.push(residue),
        }
    }
    breakdown
}

/// Returns the summed weight of `sequence`.
///
/// Each unrecognized character adds nothing and emits one warning.
pub fn calculate_weight(sequence: &str) -> f64 {
    let breakdown = weigh_sequence(sequence);
    for residue in &breakdown.unrecognized {
        warn!(
            "event=unknown_residue module=analysis status=skipped residue={:?}",
            residue
        );
    }
    breakdown.total
}

/// Computes one analysis row per stored protein, preserving order.
///
/// Unrecognized residues are reported with the protein they came from.
pub fn analyze_proteins(proteins: &[PersistedProtein]) -> Vec<AnalysisRow> {
    proteins
        .iter()
        .map(|protein| {
            let breakdown = weigh_sequence(&protein.sequence);
            for residue in &breakdown.unrecognized {
                warn!(
                    "event=unknown_residue module=analysis status=skipped protein_id={} name={} residue={:?}",
                    protein.id, protein.name, residue
                );
            }
            AnalysisRow {
                id: protein.id,
                name: protein.name.clone(),
                molecular_weight: breakdown.total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{calculate_weight, residue_weight, weigh_sequence, RESIDUE_WEIGHTS};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn table_has_twenty_distinct_codes() {
        let mut codes: Vec<char> = RESIDUE_WEIGHTS.iter().map(|(code, _)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 20);
    }

    #[test]
    fn weight_is_additive_and_repeatable() {
        for _ in 0..3 {
            assert_close(calculate_weight("AC"), 89.1 + 121.2);
        }
        assert_close(calculate_weight("CA"), calculate_weight("AC"));
    }

    #[test]
    fn unknown_residue_contributes_zero() {
        assert_close(calculate_weight("AX"), 89.1);

        let breakdown = weigh_sequence("aXA-*");
        assert_close(breakdown.total, 89.1);
        assert_eq!(breakdown.unrecognized, vec!['a', 'X', '-', '*']);
    }

    #[test]
    fn empty_sequence_weighs_nothing() {
        assert_eq!(calculate_weight(""), 0.0);
        assert_eq!(residue_weight('B'), None);
    }
}
