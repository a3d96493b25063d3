//! Protparam - protein physicochemical property calculator
//!
//! This library computes amino acid composition, molecular weight, extinction
//! coefficients and the isoelectric point of a protein sequence. The calculator in
//! [`protein`] performs no I/O; [`shell`] and [`app`] are the two hosts that drive it.

pub mod app;
pub mod config;
pub mod logging;
pub mod protein;
pub mod shell;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use config::Settings;
pub use protein::{ProteinError, ProteinParam, Properties, Residue, ResiduePolicy};
