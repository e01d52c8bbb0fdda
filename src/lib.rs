pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output_repository;

pub use domain::{Account, AccountPolicy, Error, Rejection, SharedAccount};
