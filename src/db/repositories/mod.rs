pub mod assessment_repository;
