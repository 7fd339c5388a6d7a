pub mod catalog_repo;
pub mod submission_repo;
