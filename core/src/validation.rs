//! Field-level validation failures reported by the repository.

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Domain field name that failed.
    pub field: String,
    /// Human-readable message describing the failure.
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collection of field errors for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a failure.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Add a failure for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(FieldError::new(field, message));
    }

    /// Check if there are any failures.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get all failures.
    pub fn all(&self) -> &[FieldError] {
        &self.errors
    }

    /// Failures recorded against one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Merge another collection.
    pub fn merge(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
