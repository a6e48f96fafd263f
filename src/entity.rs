//! Entity type: a named software component on the bus.

/// A software entity, in the role of a service or an application.
///
/// An entity is identified by name in the long form, and by its numeric id
/// in the short and micro forms. The version is a dotted numeric string
/// such as `"1"` or `"1.2"`; it is stored exactly as given and only
/// interpreted when the micro form packs it.
///
/// # Examples
///
/// ```
/// use vbus_uri::Entity;
///
/// let entity = Entity::new("body.access", Some("1")).with_id(7);
/// assert_eq!(entity.name(), "body.access");
/// assert_eq!(entity.version(), Some("1"));
/// assert_eq!(entity.id(), Some(7));
/// assert!(!entity.is_empty());
/// assert!(Entity::empty().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Entity {
    name: String,
    version: Option<String>,
    id: Option<u16>,
}

impl Entity {
    /// Creates an entity with a name and an optional version.
    #[must_use]
    pub fn new(name: &str, version: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            version: version.map(str::to_string),
            id: None,
        }
    }

    /// Creates an entity with only a name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(name, None)
    }

    /// Creates the empty entity.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns this entity with its numeric id set.
    #[must_use]
    pub fn with_id(mut self, id: u16) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the entity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the version string, if present. An empty string is a valid
    /// present version and is distinct from an absent one.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the numeric id, if present.
    #[must_use]
    pub const fn id(&self) -> Option<u16> {
        self.id
    }

    /// Returns true if the entity has no name, no version, and no id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.version.is_none() && self.id.is_none()
    }
}
