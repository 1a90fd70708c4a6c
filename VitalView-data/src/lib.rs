// VitalView Data
// This crate owns the synthetic dataset and the queries over it

// Storage models and threshold classification
pub mod models;

// Repository implementations for data access
pub mod repository;
