pub mod farms;
pub mod producers;
