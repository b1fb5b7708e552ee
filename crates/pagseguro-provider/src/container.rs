//! Service container.
//!
//! Services are registered at boot under a name, together with a factory. The
//! first resolution of a name runs its factory; every later resolution returns
//! the same shared instance.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::ConfigSource;
use crate::error::ContainerError;

type Instance = Arc<dyn Any + Send + Sync>;
type Factory = Box<dyn Fn(&Container) -> Result<Instance, ContainerError> + Send + Sync>;

/// A lazily constructed singleton.
struct Binding {
    factory: Factory,
    instance: Mutex<Option<Instance>>,
}

/// Something that registers services into a [`Container`] at boot.
pub trait ServiceProvider {
    /// Register this provider's services.
    fn register(&self, container: &mut Container);
}

/// Named singleton services plus the configuration their factories read.
pub struct Container {
    config: Arc<dyn ConfigSource>,
    bindings: HashMap<String, Binding>,
}

impl Container {
    /// Create an empty container over `config`.
    #[must_use]
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self {
            config,
            bindings: HashMap::new(),
        }
    }

    /// The configuration available to factories.
    #[must_use]
    pub fn config(&self) -> &dyn ConfigSource {
        self.config.as_ref()
    }

    /// Run every provider's registration.
    pub fn register_all(&mut self, providers: &[&dyn ServiceProvider]) {
        for provider in providers {
            provider.register(self);
        }
    }

    /// Register a singleton under `name`, replacing any previous binding.
    ///
    /// The factory runs on the first [`Container::resolve`] of `name`. A factory
    /// that fails leaves the binding unresolved, so the next resolution runs it
    /// again. Factories must not resolve their own name.
    pub fn singleton<T, F>(&mut self, name: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T, ContainerError> + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: Factory = Box::new(move |container: &Container| {
            factory(container).map(|service| Arc::new(service) as Instance)
        });
        let binding = Binding {
            factory,
            instance: Mutex::new(None),
        };

        if self.bindings.insert(name.clone(), binding).is_some() {
            tracing::debug!(service = %name, "Replaced existing service binding");
        }
    }

    /// Whether a service is registered under `name`.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Resolve the singleton registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NotRegistered`] for an unknown name,
    /// [`ContainerError::TypeMismatch`] if the service is not a `T`, and any
    /// error the factory returns.
    pub fn resolve<T>(&self, name: &str) -> Result<Arc<T>, ContainerError>
    where
        T: Any + Send + Sync,
    {
        let binding = self
            .bindings
            .get(name)
            .ok_or_else(|| ContainerError::NotRegistered(name.to_string()))?;

        let instance = {
            let mut slot = binding.instance.lock();
            match slot.as_ref() {
                Some(instance) => Arc::clone(instance),
                None => {
                    let instance = (binding.factory)(self)?;
                    tracing::info!(service = %name, "Constructed singleton service");
                    *slot = Some(Arc::clone(&instance));
                    instance
                }
            }
        };

        instance
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Container")
            .field("services", &names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::ConfigError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn container() -> Container {
        Container::new(Arc::new(AppConfig::new().with("app.name", "billing")))
    }

    #[test]
    fn resolves_same_instance() {
        let mut container = container();
        container.singleton("Greeting", |_| Ok(String::from("hello")));

        let first = container.resolve::<String>("Greeting").unwrap();
        let second = container.resolve::<String>("Greeting").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.as_str(), "hello");
    }

    #[test]
    fn factory_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut container = container();
        let counter = Arc::clone(&calls);
        container.singleton("Counter", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(7_u32)
        });

        assert!(!container.has("Missing"));
        assert!(container.has("Counter"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        container.resolve::<u32>("Counter").unwrap();
        container.resolve::<u32>("Counter").unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn factories_read_configuration() {
        let mut container = container();
        container.singleton("Name", |app| Ok(app.config().get("app.name")?));

        assert_eq!(*container.resolve::<String>("Name").unwrap(), "billing");
    }

    #[test]
    fn failed_factory_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut container = container();
        let counter = Arc::clone(&calls);
        container.singleton("Flaky", move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ConfigError::MissingKey("flaky.key".into()).into())
            } else {
                Ok(1_u8)
            }
        });

        assert!(matches!(
            container.resolve::<u8>("Flaky"),
            Err(ContainerError::Config(ConfigError::MissingKey(_)))
        ));
        assert_eq!(*container.resolve::<u8>("Flaky").unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unknown_name() {
        let container = container();
        assert!(matches!(
            container.resolve::<String>("Nope"),
            Err(ContainerError::NotRegistered(name)) if name == "Nope"
        ));
    }

    #[test]
    fn wrong_type() {
        let mut container = container();
        container.singleton("Number", |_| Ok(1_i64));

        assert!(matches!(
            container.resolve::<String>("Number"),
            Err(ContainerError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn registering_again_replaces_binding() {
        let mut container = container();
        container.singleton("Value", |_| Ok(1_i32));
        container.singleton("Value", |_| Ok(2_i32));

        assert_eq!(*container.resolve::<i32>("Value").unwrap(), 2);
        assert_eq!(format!("{container:?}"), "Container { services: [\"Value\"], .. }");
    }
}
