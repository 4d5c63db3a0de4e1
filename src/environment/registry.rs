//! Type-keyed, thread-safe service lookup.
//!
//! Services can be registered from any thread while flows resolve them on
//! the main context. A single read-write lock guards the map: registrations
//! are exclusive, lookups may run concurrently with each other.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::RegistryError;

/// Lookup key for a registered service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceKey {
    /// Keyed by the type the service was registered as.
    Type(TypeId),
    /// Keyed by an explicit name.
    Named(String),
}

struct Entry {
    type_id: TypeId,
    type_name: &'static str,
    // Always an `Arc<T>` for the registered `T`.
    value: Box<dyn Any + Send + Sync>,
}

/// Registry of shared service instances.
///
/// `T` may be unsized, so trait objects work as keys:
///
/// ```
/// use std::sync::Arc;
/// use flowkit::environment::ServiceRegistry;
///
/// trait AuthService: Send + Sync {
///     fn is_authorized(&self) -> bool;
/// }
///
/// struct AlwaysAuthorized;
///
/// impl AuthService for AlwaysAuthorized {
///     fn is_authorized(&self) -> bool {
///         true
///     }
/// }
///
/// let registry = ServiceRegistry::new();
/// registry.register::<dyn AuthService>(Arc::new(AlwaysAuthorized));
/// assert!(registry.resolve::<dyn AuthService>().is_authorized());
/// ```
#[derive(Default)]
pub struct ServiceRegistry {
    services: RwLock<HashMap<ServiceKey, Entry>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `instance` under the identity of `T`, replacing any previous one.
    pub fn register<T>(&self, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.insert(ServiceKey::Type(TypeId::of::<T>()), instance);
    }

    /// Store `instance` under an explicit name, replacing any previous one.
    pub fn register_named<T>(&self, name: impl Into<String>, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.insert(ServiceKey::Named(name.into()), instance);
    }

    /// Resolve the service registered as `T`.
    ///
    /// # Panics
    /// Panics when nothing was registered as `T`. Missing wiring is a startup
    /// bug; use [`resolve_if_registered`](Self::resolve_if_registered) for
    /// optional services.
    pub fn resolve<T>(&self) -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.try_resolve::<T>() {
            Ok(service) => service,
            Err(err) => panic!("{err}"),
        }
    }

    /// Resolve the service registered as `T`, reporting why it is unavailable.
    pub fn try_resolve<T>(&self) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.lookup(&ServiceKey::Type(TypeId::of::<T>()))
    }

    /// Resolve the service registered as `T`, or `None` if absent.
    pub fn resolve_if_registered<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.try_resolve::<T>().ok()
    }

    /// Resolve a named service.
    ///
    /// # Panics
    /// Panics when the name is unknown or was registered with another type.
    pub fn resolve_named<T>(&self, name: &str) -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.try_resolve_named::<T>(name) {
            Ok(service) => service,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_resolve_named<T>(&self, name: &str) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.lookup(&ServiceKey::Named(name.to_string()))
    }

    pub fn resolve_named_if_registered<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.try_resolve_named::<T>(name).ok()
    }

    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.services
            .read()
            .contains_key(&ServiceKey::Type(TypeId::of::<T>()))
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }

    fn insert<T>(&self, key: ServiceKey, instance: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let entry = Entry {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(instance),
        };
        let replaced = self.services.write().insert(key.clone(), entry).is_some();
        tracing::debug!(
            key = ?key,
            service = type_name::<T>(),
            replaced,
            "Registered service"
        );
    }

    fn lookup<T>(&self, key: &ServiceKey) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let services = self.services.read();
        let entry = services.get(key).ok_or_else(|| RegistryError::NotRegistered {
            key: describe_key::<T>(key),
        })?;

        if entry.type_id != TypeId::of::<T>() {
            return Err(RegistryError::TypeMismatch {
                key: describe_key::<T>(key),
                expected: type_name::<T>(),
                found: entry.type_name,
            });
        }

        entry
            .value
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| RegistryError::TypeMismatch {
                key: describe_key::<T>(key),
                expected: type_name::<T>(),
                found: entry.type_name,
            })
    }
}

fn describe_key<T: ?Sized>(key: &ServiceKey) -> String {
    match key {
        ServiceKey::Type(_) => format!("type {}", type_name::<T>()),
        ServiceKey::Named(name) => format!("name '{}'", name),
    }
}
