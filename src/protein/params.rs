//! Physicochemical parameters of a protein sequence
//!
//! [`ProteinParam`] owns one normalized sequence and its composition. Every query is a
//! pure function of that composition and the constant tables in
//! [`residues`](crate::protein::residues), so repeated calls return identical values.

use std::str::FromStr;

use log::{debug, trace};

use crate::protein::composition::Composition;
use crate::protein::error::ProteinError;
use crate::protein::molecular_weights::calculate_protein_molecular_weight;
use crate::protein::residues::{Residue, C_TERMINUS_PKA, N_TERMINUS_PKA};

/// Number of pH samples evaluated by the isoelectric point scan
pub const PH_SAMPLES: usize = 1400;

/// Distance between consecutive pH samples
pub const PH_STEP: f64 = 0.01;

// Summation order of the charged groups is fixed so results are reproducible.
const POSITIVE_GROUPS: [Residue; 3] = [Residue::Lys, Residue::Arg, Residue::His];
const NEGATIVE_GROUPS: [Residue; 4] = [Residue::Asp, Residue::Glu, Residue::Cys, Residue::Tyr];

/// How symbols outside the 20-letter alphabet are treated
///
/// Whitespace is skipped under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResiduePolicy {
    /// Reject the sequence at the first unknown symbol
    #[default]
    Strict,
    /// Ignore unknown symbols; they contribute nothing to any property
    Lenient,
}

/// Partial charges at a single pH
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    pub positive: f64,
    pub negative: f64,
}

impl Charge {
    pub fn net(&self) -> f64 {
        self.positive - self.negative
    }
}

/// Snapshot of every derived property, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    pub amino_acid_count: usize,
    pub molecular_weight: f64,
    pub molar_extinction: f64,
    pub mass_extinction: f64,
    pub isoelectric_point: f64,
    pub composition: Vec<(Residue, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProteinParam {
    chain: String,
    length: usize,
    composition: Composition,
}

impl ProteinParam {
    /// Normalize `protein` to ASCII upper case and count its composition
    ///
    /// Error positions are character indices into `protein`.
    pub fn new(protein: &str, policy: ResiduePolicy) -> Result<ProteinParam, ProteinError> {
        let mut composition = Composition::default();
        let mut length = 0;

        for (position, symbol) in protein.chars().enumerate() {
            length += 1;
            if symbol.is_whitespace() {
                continue;
            }
            match Residue::from_symbol(symbol) {
                Some(residue) => composition.add(residue),
                None if policy == ResiduePolicy::Lenient => {
                    trace!("Ignoring unknown symbol {symbol:?} at position {position}");
                }
                None => return Err(ProteinError::InvalidResidue { symbol, position }),
            }
        }

        debug!(
            "Built protein of length {length} with {} canonical residues",
            composition.total()
        );

        Ok(ProteinParam {
            chain: protein.to_ascii_uppercase(),
            length,
            composition,
        })
    }

    pub fn strict(protein: &str) -> Result<ProteinParam, ProteinError> {
        ProteinParam::new(protein, ResiduePolicy::Strict)
    }

    /// Build without validation; unknown symbols are ignored
    pub fn lenient(protein: &str) -> ProteinParam {
        match ProteinParam::new(protein, ResiduePolicy::Lenient) {
            Ok(protein) => protein,
            Err(_) => unreachable!("lenient construction never rejects a symbol"),
        }
    }

    /// The upper-cased input
    pub fn sequence(&self) -> &str {
        &self.chain
    }

    /// Length of the raw input in characters
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of canonical residues
    pub fn aa_count(&self) -> usize {
        self.composition.total()
    }

    pub fn aa_composition(&self) -> &Composition {
        &self.composition
    }

    /// Molecular weight in Daltons; an empty sequence gives the weight of one water
    pub fn molecular_weight(&self) -> f64 {
        calculate_protein_molecular_weight(&self.composition)
    }

    /// Molar extinction coefficient at 280 nm
    pub fn molar_extinction(&self) -> f64 {
        self.composition
            .iter()
            .map(|(residue, count)| count as f64 * residue.absorbance_280().unwrap_or(0.0))
            .sum()
    }

    /// Molar extinction normalized by molecular weight
    pub fn mass_extinction(&self) -> f64 {
        let weight = self.molecular_weight();
        if weight == 0.0 {
            return 0.0;
        }
        self.molar_extinction() / weight
    }

    /// Positive and negative charge carried at `ph`
    pub fn charge_at(&self, ph: f64) -> Charge {
        let ph_term = 10f64.powf(ph);

        let mut positive = 0.0;
        for residue in POSITIVE_GROUPS {
            if let Some(pka) = residue.positive_pka() {
                let pka_term = 10f64.powf(pka);
                positive += self.composition.get(residue) as f64 * pka_term / (pka_term + ph_term);
            }
        }
        let n_term = 10f64.powf(N_TERMINUS_PKA);
        positive += n_term / (n_term + ph_term);

        let mut negative = 0.0;
        for residue in NEGATIVE_GROUPS {
            if let Some(pka) = residue.negative_pka() {
                let pka_term = 10f64.powf(pka);
                negative += self.composition.get(residue) as f64 * ph_term / (pka_term + ph_term);
            }
        }
        negative += ph_term / (10f64.powf(C_TERMINUS_PKA) + ph_term);

        Charge { positive, negative }
    }

    /// Signed net charge at `ph`
    pub fn net_charge(&self, ph: f64) -> f64 {
        self.charge_at(ph).net()
    }

    /// Isoelectric point, to the nearest 0.01 pH unit
    ///
    /// Every sample from pH 0.00 to 13.99 is evaluated and the one with the smallest
    /// absolute net charge is kept. The lowest pH wins among equal minima.
    pub fn pi(&self) -> f64 {
        let mut best_ph = 0.0;
        let mut best_charge = f64::INFINITY;

        for n in 0..PH_SAMPLES {
            let ph = n as f64 * PH_STEP;
            let charge = self.net_charge(ph).abs();
            if charge < best_charge {
                best_charge = charge;
                best_ph = ph;
            }
        }

        trace!("pI {best_ph:.2} with residual charge {best_charge:.6}");
        best_ph
    }

    pub fn properties(&self) -> Properties {
        Properties {
            amino_acid_count: self.aa_count(),
            molecular_weight: self.molecular_weight(),
            molar_extinction: self.molar_extinction(),
            mass_extinction: self.mass_extinction(),
            isoelectric_point: self.pi(),
            composition: self.composition.percentages(),
        }
    }
}

impl FromStr for ProteinParam {
    type Err = ProteinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProteinParam::strict(s)
    }
}
