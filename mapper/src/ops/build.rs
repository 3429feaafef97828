//! Build pass - one entity per resource.

use docmap_core::{Entity, EntityHandle, Repository, Value};
use docmap_document::Resource;
use docmap_graph::{Origin, PendingLink, ResourceNode};
use docmap_registry::{DomainType, TypeDescriptor};

use super::{entity_mut, lookup_type, MapContext};
use crate::error::MapperResult;
use crate::result::MappedResource;

/// Build (or look up) the entity for one resource and register it in the graph.
///
/// Returns `None` when the resource's type has no compiled rule.
pub fn build_resource<R: Repository + ?Sized>(
    ctx: &mut MapContext<'_, R>,
    resource: &Resource,
    origin: Origin,
) -> MapperResult<Option<MappedResource>> {
    let ruleset = ctx.ruleset;
    let descriptor = match ruleset.get(resource.type_name()) {
        Some(descriptor) => descriptor,
        None => {
            tracing::debug!(%origin, wire_type = resource.type_name(), "skipping resource of unpermitted type");
            return Ok(None);
        }
    };
    let domain = lookup_type(ctx.registry, &descriptor.domain_type)?;

    let handle = match ctx.graph.lookup(&resource.identifier) {
        Some(existing) => {
            tracing::debug!(%origin, key = %resource.identifier, "resource declared twice, reusing entity");
            existing
        }
        None => resolve_entity(ctx, resource, descriptor, domain)?,
    };

    // Whitelisted names only; scope fields are never on the whitelist
    let entity = entity_mut(&mut ctx.entities, handle)?;
    for (wire_name, field) in descriptor.whitelist() {
        let value = match resource.attributes.get(wire_name) {
            Some(raw) => Value::from(raw),
            None => continue,
        };
        // A null aimed at an association leaves it alone
        let is_association = domain.get_field(field).is_some_and(|def| !def.is_attribute());
        if value.is_null() && is_association {
            tracing::debug!(%origin, field = %field, "ignoring null attribute for association");
            continue;
        }
        domain.assign_attribute(entity, field, value)?;
    }

    let mut node = ResourceNode::new(resource.identifier.clone(), handle, origin);
    for (name, data) in &resource.relationships {
        match (descriptor.permits(name), PendingLink::from_data(data)) {
            (Some(field), Some(link)) => node.defer(field, link),
            _ => tracing::debug!(%origin, relationship = %name, "ignoring unpermitted relationship"),
        }
    }
    ctx.graph.insert(node);

    let position = match origin {
        Origin::Data(position) => position,
        Origin::Included(position) => Some(position),
    };
    Ok(Some(MappedResource {
        handle,
        wire_type: resource.type_name().to_string(),
        position,
    }))
}

fn resolve_entity<R: Repository + ?Sized>(
    ctx: &mut MapContext<'_, R>,
    resource: &Resource,
    descriptor: &TypeDescriptor,
    domain: &DomainType,
) -> MapperResult<EntityHandle> {
    let entity = match resource.raw_id() {
        Some(id) if !resource.identifier.is_temporary() => {
            ctx.repository
                .find_scoped(&domain.name, &descriptor.scope, id)?
        }
        _ => {
            let mut entity = Entity::new(&domain.name);
            for (field, value) in &descriptor.scope {
                domain.assign_attribute(&mut entity, field, value.clone())?;
            }
            entity
        }
    };
    Ok(ctx.entities.insert(entity))
}
