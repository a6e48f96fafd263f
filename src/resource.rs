//! Resource type: an addressable element exposed by an entity.

/// A resource manipulated through a service, such as a door or an RPC
/// method.
///
/// The name addresses the resource itself; the optional instance picks one
/// of several (`door.front_left`), and the optional message names a payload
/// type carried for it (`door.front_left#Door`). RPC methods use the
/// reserved `rpc` resource name with the method as the instance.
///
/// # Examples
///
/// ```
/// use vbus_uri::Resource;
///
/// let resource = Resource::new("door", Some("front_left"), Some("Door"));
/// assert_eq!(resource.name_with_instance(), "door.front_left");
///
/// let method = Resource::for_rpc("UpdateDoor");
/// assert_eq!(method.name(), "rpc");
/// assert_eq!(method.instance(), Some("UpdateDoor"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Resource {
    name: String,
    instance: Option<String>,
    message: Option<String>,
    id: Option<u16>,
}

impl Resource {
    /// Creates a resource from a name with optional instance and message.
    #[must_use]
    pub fn new(name: &str, instance: Option<&str>, message: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            instance: instance.map(str::to_string),
            message: message.map(str::to_string),
            id: None,
        }
    }

    /// Creates a resource with only a name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::new(name, None, None)
    }

    /// Creates the empty resource.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the resource addressing an RPC method on a service.
    #[must_use]
    pub fn for_rpc(method: &str) -> Self {
        Self::new("rpc", Some(method), None)
    }

    /// Creates the synthetic resource addressing RPC responses back to a
    /// caller.
    #[must_use]
    pub fn response() -> Self {
        Self::new("rpc", Some("response"), None)
    }

    /// Returns this resource with its numeric id set.
    #[must_use]
    pub fn with_id(mut self, id: u16) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the instance, if present.
    #[must_use]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Returns the message type, if present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the numeric id, if present.
    #[must_use]
    pub const fn id(&self) -> Option<u16> {
        self.id
    }

    /// Returns `name.instance`, or just the name when no instance is set.
    #[must_use]
    pub fn name_with_instance(&self) -> String {
        match &self.instance {
            Some(instance) => format!("{}.{instance}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns true if the resource has no name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}
