pub mod assessment;
pub mod dashboard;
pub mod dimension;
pub mod profile;
pub mod recommendation;
