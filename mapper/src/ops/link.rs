//! Link pass - wire relationship references to entities.

use docmap_core::{EntityHandle, EntitySet, Repository};
use docmap_document::ResourceIdentifier;
use docmap_graph::{PendingLink, ResourceGraph};
use docmap_registry::Ruleset;

use super::{entity_mut, lookup_type, MapContext};
use crate::error::{MapperError, MapperResult};

/// Resolve every pending relationship of every node. Returns the number of
/// links written.
///
/// Runs only after the build pass has registered every resource, so
/// references may point anywhere in the document.
pub fn link_all<R: Repository + ?Sized>(ctx: &mut MapContext<'_, R>) -> MapperResult<usize> {
    let registry = ctx.registry;
    let resolver = Resolver {
        ruleset: ctx.ruleset,
        repository: ctx.repository,
        graph: &ctx.graph,
    };
    let entities = &mut ctx.entities;
    let mut linked = 0;

    for node in resolver.graph.nodes() {
        let owner_type = entity_mut(entities, node.entity)?.domain_type.clone();
        let domain = lookup_type(registry, &owner_type)?;

        for (field, link) in &node.pending {
            match link {
                PendingLink::Single(id) => {
                    if let Some((target, target_type)) = resolver.resolve(id, entities)? {
                        let owner = entity_mut(entities, node.entity)?;
                        domain.assign_link(owner, field, target, target_type)?;
                        tracing::trace!(from = %node.key, field = %field, to = %id, "linked");
                        linked += 1;
                    }
                }
                PendingLink::Many(ids) => {
                    for id in ids {
                        if let Some((target, target_type)) = resolver.resolve(id, entities)? {
                            let owner = entity_mut(entities, node.entity)?;
                            domain.append_link(owner, field, target, target_type)?;
                            tracing::trace!(from = %node.key, field = %field, to = %id, "appended");
                            linked += 1;
                        }
                    }
                }
            }
        }
    }

    Ok(linked)
}

struct Resolver<'c, 'a, R: ?Sized> {
    ruleset: &'a Ruleset,
    repository: &'a R,
    graph: &'c ResourceGraph,
}

impl<'c, 'a, R: Repository + ?Sized> Resolver<'c, 'a, R> {
    /// Find the entity a reference points at: the document first, then a
    /// scoped repository lookup. References to types without a rule
    /// resolve to nothing.
    fn resolve(
        &self,
        id: &ResourceIdentifier,
        entities: &mut EntitySet,
    ) -> MapperResult<Option<(EntityHandle, &'a str)>> {
        let descriptor = match self.ruleset.get(&id.type_name) {
            Some(descriptor) => descriptor,
            None => {
                tracing::debug!(target_id = %id, "ignoring reference to unpermitted type");
                return Ok(None);
            }
        };
        let target_type = descriptor.domain_type.as_str();

        if let Some(handle) = self.graph.lookup(id) {
            return Ok(Some((handle, target_type)));
        }

        // Temporary ids never reach the repository
        let raw_id = match id.raw_id.as_deref() {
            Some(raw_id) if !id.is_temporary() => raw_id,
            other => {
                return Err(MapperError::not_found(
                    target_type,
                    other.unwrap_or_default(),
                ))
            }
        };

        let entity = self
            .repository
            .find_scoped(target_type, &descriptor.scope, raw_id)?;
        Ok(Some((entities.insert(entity), target_type)))
    }
}
