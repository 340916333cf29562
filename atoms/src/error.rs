//! Error type for element lookup and viewer startup

use common::GraphicsError;

#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("no element with atomic number {0}")]
    UnknownElement(u8),
    #[error("malformed atomic mass {mass:?} for {symbol}")]
    MalformedMass { symbol: &'static str, mass: String },
    #[error("{symbol} has an atomic mass below its proton count")]
    NegativeNeutrons { symbol: &'static str },
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
}
