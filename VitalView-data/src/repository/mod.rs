// Repository module structure
pub mod errors;
pub mod generator;
mod in_memory;
mod vital_signs;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use generator::{GenerationConfig, DEFAULT_HISTORY_DAYS};
pub use in_memory::latest_per_type;
pub use vital_signs::{VitalSignsRepository, VitalSignsRepositoryTrait};
