//! Dependency injection container for docshelf
//!
//! A keyed singleton registry wiring repositories, use cases, and services
//! together without coupling component creation to component use.
//!
//! ```rust
//! use docshelf_di::Container;
//! use std::sync::Arc;
//!
//! struct Greeter;
//!
//! let container = Container::new();
//! container.register(|_| Ok(Arc::new(Greeter))).unwrap();
//! let greeter = container.resolve::<Greeter>().unwrap();
//! # let _ = greeter;
//! ```
//!
//! See [`bootstrap`] for the wiring of the full application graph.

pub mod bootstrap;

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

pub use bootstrap::{create_application_container, ApplicationConfig};

/// Errors that can occur during container operations
#[derive(Debug, thiserror::Error)]
pub enum DiError {
    #[error("No registration found for: {key}")]
    NotRegistered { key: String },

    #[error("Service already registered: {key}")]
    AlreadyRegistered { key: String },

    #[error("Registered factory for {key} produced a different type")]
    TypeMismatch { key: String },

    #[error("Dependency resolution failed: {message}")]
    ResolutionFailed { message: String },
}

pub type DiResult<T> = Result<T, DiError>;

type AnyInstance = Arc<dyn Any + Send + Sync>;
type Factory = Arc<dyn Fn(&Container) -> DiResult<AnyInstance> + Send + Sync>;

struct Registration {
    factory: Factory,
    instance: Option<AnyInstance>,
}

/// Keyed singleton registry
///
/// Each registered key resolves to exactly one instance for the lifetime of
/// the container: the factory runs on first resolution, the produced `Arc`
/// is cached, and every later resolution returns a clone of it.
pub struct Container {
    registrations: RwLock<HashMap<TypeId, Registration>>,
}

impl Container {
    /// Create a new empty container
    pub fn new() -> Self {
        Self {
            registrations: RwLock::new(HashMap::new()),
        }
    }

    /// Register a factory for `T`
    ///
    /// The factory receives the container and may resolve its own
    /// dependencies, so the graph builds lazily and dependents share
    /// singletons. Registering the same key twice is an error.
    pub fn register<F, T>(&self, factory: F) -> DiResult<()>
    where
        F: Fn(&Container) -> DiResult<Arc<T>> + Send + Sync + 'static,
        T: Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        let mut registrations = self.registrations.write().unwrap();

        if registrations.contains_key(&key) {
            return Err(DiError::AlreadyRegistered {
                key: std::any::type_name::<T>().to_string(),
            });
        }

        let factory: Factory = Arc::new(move |container| {
            let instance = factory(container)?;
            Ok(instance as AnyInstance)
        });
        registrations.insert(
            key,
            Registration {
                factory,
                instance: None,
            },
        );

        debug!("registered {}", std::any::type_name::<T>());
        Ok(())
    }

    /// Resolve the singleton for `T`, constructing it on first use
    pub fn resolve<T>(&self) -> DiResult<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();

        // Fast path: already constructed. The factory must run with the lock
        // released so it can resolve its own dependencies through us.
        let factory = {
            let registrations = self.registrations.read().unwrap();
            let registration =
                registrations
                    .get(&key)
                    .ok_or_else(|| DiError::NotRegistered {
                        key: std::any::type_name::<T>().to_string(),
                    })?;

            if let Some(instance) = &registration.instance {
                return downcast::<T>(Arc::clone(instance));
            }
            Arc::clone(&registration.factory)
        };

        let instance = factory(self)?;

        let mut registrations = self.registrations.write().unwrap();
        let registration = registrations
            .get_mut(&key)
            .ok_or_else(|| DiError::NotRegistered {
                key: std::any::type_name::<T>().to_string(),
            })?;

        // A factory may itself have resolved this key; keep the first instance
        // so every dependent sees the same singleton.
        let instance = match &registration.instance {
            Some(existing) => Arc::clone(existing),
            None => {
                registration.instance = Some(Arc::clone(&instance));
                instance
            }
        };

        debug!("resolved {}", std::any::type_name::<T>());
        downcast::<T>(instance)
    }

    /// Whether `T` is registered, without triggering construction
    pub fn has<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.registrations
            .read()
            .unwrap()
            .contains_key(&TypeId::of::<T>())
    }

    /// Discard all registrations and cached instances
    pub fn clear(&self) {
        self.registrations.write().unwrap().clear();
        info!("container cleared");
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

fn downcast<T>(instance: AnyInstance) -> DiResult<Arc<T>>
where
    T: Send + Sync + 'static,
{
    instance.downcast::<T>().map_err(|_| DiError::TypeMismatch {
        key: std::any::type_name::<T>().to_string(),
    })
}
