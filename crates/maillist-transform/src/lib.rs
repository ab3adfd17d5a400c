pub mod error;
pub mod normalizer;
pub mod text;

pub use error::{Result, TransformError};
pub use normalizer::{DropReason, DroppedContact, NormalizeReport, RecordNormalizer};
pub use text::{first_name, is_blocked_email};
