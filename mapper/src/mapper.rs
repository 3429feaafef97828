//! Document mapper - coordinates the mapping passes.
//!
//! The mapper delegates to the pass modules in `ops/`:
//! - `ops/build.rs` - entity per resource, whitelisted attributes, scope
//! - `ops/link.rs` - relationship resolution across the document
//! - `ops/save.rs` - validation gate and persistence

use docmap_core::Repository;
use docmap_document::{Document, PrimaryData, Resource};
use docmap_graph::Origin;
use docmap_registry::{DomainRegistry, RenameTable, RuleCompiler, Ruleset};
use serde_json::Value as JsonValue;

use crate::error::MapperResult;
use crate::ops::{self, MapContext};
use crate::report::{self, ErrorDocument};
use crate::result::{MappedResource, Mapping, Primary};

/// A compiled mapper: rules checked against the registry once, reusable for
/// any number of documents.
#[derive(Debug)]
pub struct DocumentMapper<'r> {
    registry: &'r DomainRegistry,
    renames: RenameTable,
    ruleset: Ruleset,
}

impl<'r> DocumentMapper<'r> {
    /// Compile rules where every type must declare a scope.
    pub fn new(
        registry: &'r DomainRegistry,
        rules: &JsonValue,
        renames: RenameTable,
    ) -> MapperResult<Self> {
        Self::new_unsafe(registry, rules, Vec::<String>::new(), renames)
    }

    /// Compile rules letting the named wire types omit their scope.
    pub fn new_unsafe<I, S>(
        registry: &'r DomainRegistry,
        rules: &JsonValue,
        unscoped: I,
        renames: RenameTable,
    ) -> MapperResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ruleset = RuleCompiler::new(registry, &renames)
            .allow_unscoped(unscoped)
            .compile(rules)?;
        Ok(Self {
            registry,
            renames,
            ruleset,
        })
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn renames(&self) -> &RenameTable {
        &self.renames
    }

    /// Map one document. Any lookup or assignment failure aborts the whole
    /// call.
    pub fn map<R: Repository + ?Sized>(
        &self,
        document: &JsonValue,
        repository: &R,
    ) -> MapperResult<Mapping> {
        let document = Document::from_json(document);
        let mut ctx = MapContext::new(self.registry, &self.ruleset, repository);

        let primary = match &document.data {
            PrimaryData::Absent => Primary::Missing,
            PrimaryData::Single(resource) => {
                match build_entry(&mut ctx, resource.as_ref(), Origin::Data(None))? {
                    Some(built) => Primary::Single(built),
                    None => Primary::Missing,
                }
            }
            PrimaryData::Many(resources) => {
                let mut built = Vec::with_capacity(resources.len());
                for (i, resource) in resources.iter().enumerate() {
                    built.extend(build_entry(&mut ctx, resource.as_ref(), Origin::Data(Some(i)))?);
                }
                Primary::Collection(built)
            }
        };

        let mut included = Vec::with_capacity(document.included.len());
        for (i, resource) in document.included.iter().enumerate() {
            included.extend(build_entry(&mut ctx, resource.as_ref(), Origin::Included(i))?);
        }

        let pending = ctx.graph.pending_count();
        let links = ops::link_all(&mut ctx)?;
        tracing::info!(
            resources = document.resource_count(),
            nodes = ctx.graph.len(),
            pending,
            links,
            included = included.len(),
            collection = document.data.is_collection(),
            "mapped document"
        );

        Ok(Mapping::new(ctx.entities, primary, included))
    }

    /// Validate every primary and included entity; failures are stored on
    /// the entities for `error_report`.
    pub fn validate_all<R: Repository + ?Sized>(&self, mapping: &mut Mapping, repository: &R) -> bool {
        ops::validate_all(mapping, repository)
    }

    /// Persist everything if, and only if, everything is valid.
    pub fn save_all<R: Repository + ?Sized>(
        &self,
        mapping: &mut Mapping,
        repository: &mut R,
    ) -> MapperResult<bool> {
        ops::save_all(mapping, repository)
    }

    /// JSON:API error document for the failures found by the last validation.
    pub fn error_report(&self, mapping: &Mapping) -> ErrorDocument {
        report::error_report(mapping, &self.renames)
    }
}

fn build_entry<R: Repository + ?Sized>(
    ctx: &mut MapContext<'_, R>,
    resource: Option<&Resource>,
    origin: Origin,
) -> MapperResult<Option<MappedResource>> {
    match resource {
        Some(resource) => ops::build_resource(ctx, resource, origin),
        None => {
            tracing::debug!(%origin, "skipping malformed resource");
            Ok(None)
        }
    }
}

/// Compile `rules` and map `document` in one step.
pub fn map<R: Repository + ?Sized>(
    registry: &DomainRegistry,
    repository: &R,
    document: &JsonValue,
    rules: &JsonValue,
    renames: Option<RenameTable>,
) -> MapperResult<Mapping> {
    DocumentMapper::new(registry, rules, renames.unwrap_or_default())?.map(document, repository)
}

/// Like [`map`], but the `unscoped` wire types may omit their scope.
pub fn map_unsafe<R, I, S>(
    registry: &DomainRegistry,
    repository: &R,
    document: &JsonValue,
    rules: &JsonValue,
    unscoped: I,
    renames: Option<RenameTable>,
) -> MapperResult<Mapping>
where
    R: Repository + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DocumentMapper::new_unsafe(registry, rules, unscoped, renames.unwrap_or_default())?
        .map(document, repository)
}
