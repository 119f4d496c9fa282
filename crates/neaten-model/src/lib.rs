pub mod diagnostic;
pub mod error;
pub mod features;
pub mod sentence;
pub mod token;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{ModelError, Result};
pub use features::{Features, Misc};
pub use sentence::Sentence;
pub use token::{EnhancedDep, EnhancedHead, Token, TokenId, Upos};
