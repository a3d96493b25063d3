use log::{debug, info, trace, warn};

use crate::protein::{ProteinParam, Properties, Residue, ResiduePolicy};

/// State of the interactive terminal UI
pub struct App {
    pub input: String,
    pub policy: ResiduePolicy,
    pub protein: ProteinParam,
    pub properties: Properties,
    pub status_message: Option<String>,
    pub updates: usize,
}

impl App {
    pub fn new(policy: ResiduePolicy) -> App {
        debug!("Creating new App instance with {policy:?} residue policy");
        let protein = ProteinParam::lenient("");
        let properties = protein.properties();
        App {
            input: String::new(),
            policy,
            protein,
            properties,
            status_message: None,
            updates: 0,
        }
    }

    /// Append a typed character to the sequence
    pub fn on_key(&mut self, c: char) {
        let upper_c = c.to_ascii_uppercase();
        let accepted = match Residue::from_symbol(upper_c) {
            Some(_) => true,
            None => self.policy == ResiduePolicy::Lenient && upper_c.is_ascii_alphabetic(),
        };

        if !accepted {
            warn!("Rejected symbol {upper_c:?}");
            self.status_message = Some(format!("'{upper_c}' is not one of the 20 standard amino acids"));
            return;
        }

        trace!("Appending {upper_c}");
        self.input.push(upper_c);
        self.status_message = None;
        self.update_properties();
    }

    pub fn on_backspace(&mut self) {
        if self.input.pop().is_some() {
            self.status_message = None;
            self.update_properties();
        }
    }

    pub fn on_clear(&mut self) {
        if !self.input.is_empty() {
            info!("Clearing sequence of length {}", self.input.len());
            self.input.clear();
            self.status_message = None;
            self.update_properties();
        }
    }

    pub fn update_properties(&mut self) {
        match ProteinParam::new(&self.input, self.policy) {
            Ok(protein) => {
                self.properties = protein.properties();
                self.protein = protein;
                self.updates += 1;
                trace!(
                    "Updated properties: {} residues, pI {:.2}",
                    self.properties.amino_acid_count,
                    self.properties.isoelectric_point
                );
            }
            Err(e) => {
                warn!("Could not analyse sequence: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Net charge at neutral pH
    pub fn neutral_charge(&self) -> f64 {
        self.protein.net_charge(7.0)
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(ResiduePolicy::default())
    }
}
