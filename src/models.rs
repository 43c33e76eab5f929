pub mod crop;
pub mod dashboard;
pub mod farm;
pub mod harvest;
pub mod producer;
