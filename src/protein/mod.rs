pub mod composition;
pub mod error;
pub mod molecular_weights;
pub mod params;
pub mod residues;

pub use composition::*;
pub use error::*;
pub use molecular_weights::*;
pub use params::*;
pub use residues::*;
