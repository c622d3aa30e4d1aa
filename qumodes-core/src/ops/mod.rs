//! Concrete operators: preparations, gates and channels

mod channels;
mod gates;
mod ket;

pub use channels::{KrausChannel, LossChannel};
pub use gates::{GateMatrix, Kerr, PhaseShift};
pub use ket::Ket;
