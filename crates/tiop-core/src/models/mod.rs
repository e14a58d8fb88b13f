pub mod eye;
pub mod measurement;
pub mod patient;
pub mod risk_factors;
pub mod score;
pub mod target;
