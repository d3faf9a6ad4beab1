pub mod finder;
pub mod materials;
