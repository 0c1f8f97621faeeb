pub mod types;
pub mod error;
pub mod distance;
pub mod dictionary;
pub mod identify;
pub mod agreement;
pub mod pipeline;
pub mod context;
pub mod output;

pub use context::GrammarContext;
pub use dictionary::{Dictionaries, RoleDictionary};
pub use distance::edit_distance;
pub use error::CheckerError;
pub use pipeline::correct;
pub use types::{CorrectionResponse, IdentifiedComponents, Person, Tense};
