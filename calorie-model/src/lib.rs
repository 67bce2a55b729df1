pub mod gender;
pub mod measurement;
pub mod recommendation;
