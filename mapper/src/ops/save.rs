//! Validation gate and persistence.

use docmap_core::Repository;

use crate::error::MapperResult;
use crate::result::Mapping;

/// Validate every primary and included entity, storing the failures on
/// each one. Returns true if none failed.
pub fn validate_all<R: Repository + ?Sized>(mapping: &mut Mapping, repository: &R) -> bool {
    let mut valid = true;
    for handle in mapping.document_handles() {
        if let Some(entity) = mapping.entities.get_mut(handle) {
            let errors = repository.validate(entity);
            if !errors.is_empty() {
                tracing::debug!(%handle, domain_type = %entity.domain_type, failures = errors.len(), "invalid entity");
                valid = false;
            }
            entity.errors = errors;
        }
    }
    valid
}

/// Persist every primary and included entity, but only if all of them are
/// valid. Nothing is saved otherwise.
pub fn save_all<R: Repository + ?Sized>(mapping: &mut Mapping, repository: &mut R) -> MapperResult<bool> {
    if !validate_all(mapping, &*repository) {
        tracing::warn!("validation failed, nothing saved");
        return Ok(false);
    }

    let handles = mapping.document_handles();
    for &handle in &handles {
        repository.save(handle, &mut mapping.entities)?;
    }
    tracing::info!(saved = handles.len(), "saved mapping");
    Ok(true)
}
