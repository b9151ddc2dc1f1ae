pub mod builder;
pub mod definition;
pub mod error;
pub mod keyword;
pub mod parameter;

mod util;

pub use crate::builder::DefinitionBuilder;
pub use crate::definition::KeywordDefinition;
pub use crate::error::{KeywordError, ParameterError, Result};
pub use crate::keyword::{AutomationKeyword, KeywordMeta};
pub use crate::parameter::{ParamKind, ParamSpec, ParameterDefinition};
