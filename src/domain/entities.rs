//! Domain entities: core data structures

use std::fmt;

use crate::domain::{DomainError, DomainResult};

/// Repository visibility on the hosting service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Derive visibility from a `--private` style flag.
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            Self::Private
        } else {
            Self::Public
        }
    }

    /// The external tool flag selecting this visibility.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Public => "--public",
            Self::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// Intent to create one remote repository.
///
/// Built once via [`CreationRequest::new`] plus the `with_*` methods, then handed
/// to the repository service. Identifiers are validated on construction, so a
/// request never carries an empty or whitespace-containing owner or name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    /// Owner namespace (organization or user)
    organization: String,
    /// Repository name
    name: String,
    /// Optional repository description
    description: Option<String>,
    /// Public unless requested otherwise
    visibility: Visibility,
    /// Clone the repository locally once it exists
    clone_after_create: bool,
}

impl CreationRequest {
    /// Create a public, non-cloning request without description.
    pub fn new(organization: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let organization = organization.into();
        let name = name.into();
        validate_identifier("organization", &organization)?;
        validate_identifier("name", &name)?;

        Ok(Self {
            organization,
            name,
            description: None,
            visibility: Visibility::default(),
            clone_after_create: false,
        })
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_clone(mut self, clone_after_create: bool) -> Self {
        self.clone_after_create = clone_after_create;
        self
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description, if one was supplied and is non-empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn clone_after_create(&self) -> bool {
        self.clone_after_create
    }

    /// `"{organization}/{name}"`, the positional argument of `repo create`.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.organization, self.name)
    }
}

fn validate_identifier(field: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::EmptyIdentifier { field });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidIdentifier {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Result of a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationOutcome {
    /// `"{organization}/{name}"` of the created repository
    pub slug: String,
    /// Captured standard output of the external tool
    pub stdout: String,
}

/// Expand environment variables and tilde in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
