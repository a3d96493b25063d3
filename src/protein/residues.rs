//! The canonical amino acid alphabet and its physical constants
//!
//! Weights are for free amino acids in Daltons (Da); the water lost in each peptide
//! bond is subtracted when a chain is assembled. Every per-residue table returns an
//! `Option` so that callers decide what an absent entry means.

use std::fmt;

/// Molecular weight of water (Da)
pub const WATER_WEIGHT: f64 = 18.015;

/// pKa of the free alpha-amino group at the N-terminus
pub const N_TERMINUS_PKA: f64 = 9.69;

/// pKa of the free alpha-carboxyl group at the C-terminus
pub const C_TERMINUS_PKA: f64 = 2.34;

/// One of the 20 standard amino acids, ordered alphabetically by one-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Residue {
    Ala,
    Cys,
    Asp,
    Glu,
    Phe,
    Gly,
    His,
    Ile,
    Lys,
    Leu,
    Met,
    Asn,
    Pro,
    Gln,
    Arg,
    Ser,
    Thr,
    Val,
    Trp,
    Tyr,
}

impl Residue {
    pub const COUNT: usize = 20;

    pub const ALL: [Residue; Residue::COUNT] = [
        Residue::Ala,
        Residue::Cys,
        Residue::Asp,
        Residue::Glu,
        Residue::Phe,
        Residue::Gly,
        Residue::His,
        Residue::Ile,
        Residue::Lys,
        Residue::Leu,
        Residue::Met,
        Residue::Asn,
        Residue::Pro,
        Residue::Gln,
        Residue::Arg,
        Residue::Ser,
        Residue::Thr,
        Residue::Val,
        Residue::Trp,
        Residue::Tyr,
    ];

    /// Parse a single-letter code, case-insensitively
    pub fn from_symbol(symbol: char) -> Option<Residue> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Residue::Ala),
            'C' => Some(Residue::Cys),
            'D' => Some(Residue::Asp),
            'E' => Some(Residue::Glu),
            'F' => Some(Residue::Phe),
            'G' => Some(Residue::Gly),
            'H' => Some(Residue::His),
            'I' => Some(Residue::Ile),
            'K' => Some(Residue::Lys),
            'L' => Some(Residue::Leu),
            'M' => Some(Residue::Met),
            'N' => Some(Residue::Asn),
            'P' => Some(Residue::Pro),
            'Q' => Some(Residue::Gln),
            'R' => Some(Residue::Arg),
            'S' => Some(Residue::Ser),
            'T' => Some(Residue::Thr),
            'V' => Some(Residue::Val),
            'W' => Some(Residue::Trp),
            'Y' => Some(Residue::Tyr),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Residue::Ala => 'A',
            Residue::Cys => 'C',
            Residue::Asp => 'D',
            Residue::Glu => 'E',
            Residue::Phe => 'F',
            Residue::Gly => 'G',
            Residue::His => 'H',
            Residue::Ile => 'I',
            Residue::Lys => 'K',
            Residue::Leu => 'L',
            Residue::Met => 'M',
            Residue::Asn => 'N',
            Residue::Pro => 'P',
            Residue::Gln => 'Q',
            Residue::Arg => 'R',
            Residue::Ser => 'S',
            Residue::Thr => 'T',
            Residue::Val => 'V',
            Residue::Trp => 'W',
            Residue::Tyr => 'Y',
        }
    }

    /// Three-letter abbreviation
    pub fn code(self) -> &'static str {
        match self {
            Residue::Ala => "Ala",
            Residue::Cys => "Cys",
            Residue::Asp => "Asp",
            Residue::Glu => "Glu",
            Residue::Phe => "Phe",
            Residue::Gly => "Gly",
            Residue::His => "His",
            Residue::Ile => "Ile",
            Residue::Lys => "Lys",
            Residue::Leu => "Leu",
            Residue::Met => "Met",
            Residue::Asn => "Asn",
            Residue::Pro => "Pro",
            Residue::Gln => "Gln",
            Residue::Arg => "Arg",
            Residue::Ser => "Ser",
            Residue::Thr => "Thr",
            Residue::Val => "Val",
            Residue::Trp => "Trp",
            Residue::Tyr => "Tyr",
        }
    }

    /// Position of this residue in [`Residue::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Molecular weight of the free amino acid (Da)
    pub fn molecular_weight(self) -> f64 {
        match self {
            Residue::Ala => 89.093,  // Alanine
            Residue::Cys => 121.158, // Cysteine
            Residue::Asp => 133.103, // Aspartic acid
            Residue::Glu => 147.129, // Glutamic acid
            Residue::Phe => 165.189, // Phenylalanine
            Residue::Gly => 75.067,  // Glycine
            Residue::His => 155.155, // Histidine
            Residue::Ile => 131.173, // Isoleucine
            Residue::Lys => 146.188, // Lysine
            Residue::Leu => 131.173, // Leucine
            Residue::Met => 149.211, // Methionine
            Residue::Asn => 132.118, // Asparagine
            Residue::Pro => 115.131, // Proline
            Residue::Gln => 146.145, // Glutamine
            Residue::Arg => 174.201, // Arginine
            Residue::Ser => 105.093, // Serine
            Residue::Thr => 119.119, // Threonine
            Residue::Val => 117.146, // Valine
            Residue::Trp => 204.225, // Tryptophan
            Residue::Tyr => 181.189, // Tyrosine
        }
    }

    /// Molar absorbance at 280 nm, only defined for the UV-absorbing residues
    pub fn absorbance_280(self) -> Option<f64> {
        match self {
            Residue::Tyr => Some(1490.0),
            Residue::Trp => Some(5500.0),
            Residue::Cys => Some(125.0),
            Residue::Phe => Some(200.0),
            _ => None,
        }
    }

    /// Side-chain pKa of residues that carry a positive charge when protonated
    pub fn positive_pka(self) -> Option<f64> {
        match self {
            Residue::Lys => Some(10.5),
            Residue::Arg => Some(12.4),
            Residue::His => Some(6.0),
            _ => None,
        }
    }

    /// Side-chain pKa of residues that carry a negative charge when deprotonated
    pub fn negative_pka(self) -> Option<f64> {
        match self {
            Residue::Asp => Some(3.86),
            Residue::Glu => Some(4.25),
            Residue::Cys => Some(8.33),
            Residue::Tyr => Some(10.0),
            _ => None,
        }
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip_covers_alphabet() {
        for residue in Residue::ALL {
            assert_eq!(Residue::from_symbol(residue.symbol()), Some(residue));
            assert_eq!(
                Residue::from_symbol(residue.symbol().to_ascii_lowercase()),
                Some(residue)
            );
        }
    }

    #[test]
    fn test_all_is_alphabetical_and_indexed() {
        let symbols: Vec<char> = Residue::ALL.iter().map(|r| r.symbol()).collect();
        let mut sorted = symbols.clone();
        sorted.sort();
        assert_eq!(symbols, sorted);

        for (i, residue) in Residue::ALL.iter().enumerate() {
            assert_eq!(residue.index(), i);
        }
    }

    #[test]
    fn test_unknown_symbols() {
        for symbol in ['B', 'J', 'O', 'U', 'X', 'Z', '*', '1', ' '] {
            assert_eq!(Residue::from_symbol(symbol), None);
        }
    }

    #[test]
    fn test_table_subsets() {
        let absorbing: Vec<char> = Residue::ALL
            .iter()
            .filter(|r| r.absorbance_280().is_some())
            .map(|r| r.symbol())
            .collect();
        assert_eq!(absorbing, vec!['C', 'F', 'W', 'Y']);

        let positive: Vec<char> = Residue::ALL
            .iter()
            .filter(|r| r.positive_pka().is_some())
            .map(|r| r.symbol())
            .collect();
        assert_eq!(positive, vec!['H', 'K', 'R']);

        let negative: Vec<char> = Residue::ALL
            .iter()
            .filter(|r| r.negative_pka().is_some())
            .map(|r| r.symbol())
            .collect();
        assert_eq!(negative, vec!['C', 'D', 'E', 'Y']);
    }

    #[test]
    fn test_individual_weights() {
        assert_eq!(Residue::Ala.molecular_weight(), 89.093);
        assert_eq!(Residue::Gly.molecular_weight(), 75.067);
        assert_eq!(Residue::Trp.molecular_weight(), 204.225);
        for residue in Residue::ALL {
            assert!(residue.molecular_weight() > WATER_WEIGHT);
        }
    }
}
