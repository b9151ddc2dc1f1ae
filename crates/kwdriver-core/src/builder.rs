//! Builds normalized keyword definitions from keyword implementation types.
//!
//! This is the crate's core: [`DefinitionBuilder`] reads a type's declarative
//! metadata and parameter declarations and produces the [`KeywordDefinition`]
//! a registration/execution engine consumes. Name and description fall back
//! to the bare type name when no usable override is declared, and two
//! declarations resolving to the same parameter identity fail the build.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::definition::KeywordDefinition;
use crate::error::{KeywordError, Result};
use crate::keyword::{AutomationKeyword, KeywordMeta};
use crate::parameter::ParameterDefinition;
use crate::util::{non_blank, simple_type_name};

/// Builds a [`KeywordDefinition`] for one keyword implementation type.
///
/// The metadata block is read once at construction; the parameter
/// declarations are scanned fresh on every [`build`](Self::build) call, so a
/// builder may be reused. A builder is scoped to a single type — callers
/// processing many keyword types use one builder per type.
pub struct DefinitionBuilder<K: AutomationKeyword> {
    meta: Option<KeywordMeta>,
    _keyword: PhantomData<fn() -> K>,
}

impl<K: AutomationKeyword> DefinitionBuilder<K> {
    pub fn new() -> Self {
        Self {
            meta: K::META,
            _keyword: PhantomData,
        }
    }

    /// Produces the normalized definition, or fails on the first malformed or
    /// duplicate parameter declaration. No partial definition is returned on
    /// failure.
    pub fn build(&self) -> Result<KeywordDefinition> {
        let type_name = std::any::type_name::<K>();
        tracing::info!("building keyword definition for {type_name}");

        let fallback = simple_type_name(type_name);
        let name = self.resolve(|meta| meta.name, fallback);
        let description = self.resolve(|meta| meta.description, fallback);

        let mut parameters = BTreeMap::new();
        for spec in K::PARAMETERS {
            let param = ParameterDefinition::from_spec(spec)?;
            if parameters.contains_key(&param.name) {
                return Err(KeywordError::DuplicateParameter {
                    field: spec.field.to_string(),
                    keyword_type: type_name.to_string(),
                });
            }
            parameters.insert(param.name.clone(), param);
        }

        Ok(KeywordDefinition {
            name,
            description,
            type_id: TypeId::of::<K>(),
            type_name,
            parameters,
        })
    }

    /// Override-first resolution: the metadata field wins when the block is
    /// present and the field is not blank; otherwise the fallback applies.
    fn resolve(&self, pick: fn(&KeywordMeta) -> &'static str, fallback: &str) -> String {
        self.meta
            .as_ref()
            .and_then(|meta| non_blank(pick(meta)))
            .unwrap_or(fallback)
            .to_string()
    }
}

impl<K: AutomationKeyword> Default for DefinitionBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
