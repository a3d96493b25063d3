//! Amino acid composition of a sequence

use crate::protein::residues::Residue;

/// Occurrence count of each canonical residue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    counts: [usize; Residue::COUNT],
}

impl Composition {
    /// Count canonical residues in `sequence`; anything else is skipped
    pub fn from_sequence(sequence: &str) -> Composition {
        let mut composition = Composition::default();
        for residue in sequence.chars().filter_map(Residue::from_symbol) {
            composition.add(residue);
        }
        composition
    }

    pub(crate) fn add(&mut self, residue: Residue) {
        self.counts[residue.index()] += 1;
    }

    pub fn get(&self, residue: Residue) -> usize {
        self.counts[residue.index()]
    }

    /// Total number of canonical residues
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// All 20 residues with their counts, zero entries included, alphabetical by symbol
    pub fn iter(&self) -> impl Iterator<Item = (Residue, usize)> + '_ {
        Residue::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    /// Percentage of each residue; an empty composition yields 0% everywhere
    pub fn percentages(&self) -> Vec<(Residue, f64)> {
        let denominator = match self.total() {
            0 => 1,
            n => n,
        } as f64;

        self.iter()
            .map(|(r, count)| (r, count as f64 / denominator * 100.0))
            .collect()
    }
}
