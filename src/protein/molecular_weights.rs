//! Molecular weight of a polypeptide chain
//!
//! A chain of N residues is assembled by N-1 condensations, each releasing one water.
//! The total is therefore the sum of free amino acid weights minus (N-1) waters,
//! computed here as one water plus the dehydrated weight of every residue.

use crate::protein::composition::Composition;
use crate::protein::residues::{Residue, WATER_WEIGHT};

/// Weight a residue adds to a chain once its water has been lost
pub fn residue_increment(residue: Residue) -> f64 {
    residue.molecular_weight() - WATER_WEIGHT
}

/// Molecular weight of a protein with the given composition (Da)
///
/// An empty composition yields exactly [`WATER_WEIGHT`], which callers should read as
/// "no protein" rather than a physical weight.
pub fn calculate_protein_molecular_weight(composition: &Composition) -> f64 {
    let chain: f64 = composition
        .iter()
        .map(|(residue, count)| count as f64 * residue_increment(residue))
        .sum();

    WATER_WEIGHT + chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_molecular_weight() {
        // Ala-Gly: 89.093 + 75.067 - 18.015
        let weight = calculate_protein_molecular_weight(&Composition::from_sequence("AG"));
        assert!((weight - 146.145).abs() < 0.001);
    }

    #[test]
    fn test_single_residue_is_free_amino_acid() {
        let weight = calculate_protein_molecular_weight(&Composition::from_sequence("W"));
        assert!((weight - Residue::Trp.molecular_weight()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(
            calculate_protein_molecular_weight(&Composition::default()),
            WATER_WEIGHT
        );
    }

    #[test]
    fn test_appending_never_decreases_weight() {
        let mut sequence = String::new();
        let mut previous = calculate_protein_molecular_weight(&Composition::default());
        for residue in Residue::ALL.iter().chain(Residue::ALL.iter().rev()) {
            sequence.push(residue.symbol());
            let weight = calculate_protein_molecular_weight(&Composition::from_sequence(&sequence));
            assert!(weight >= previous, "weight dropped after appending {residue}");
            previous = weight;
        }
    }
}
