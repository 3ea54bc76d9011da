pub mod rank;
pub mod simulate;
