use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProteinError {
    #[error("invalid residue '{symbol}' at position {position}")]
    InvalidResidue { symbol: char, position: usize },
}
