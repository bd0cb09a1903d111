// src/target/service.rs
use super::target::{Invocation, Target, UnsupportedOperation};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type Operation = Arc<dyn Fn(Invocation<'_>) -> anyhow::Result<Value> + Send + Sync>;

/// A target assembled at run time from named operations.
#[derive(Clone)]
pub struct Service {
    pub name: String,
    operations: HashMap<String, Operation>,
}

impl Service {
    pub fn builder(name: impl Into<String>) -> ServiceBuilder {
        ServiceBuilder::new(name)
    }

    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }
}

impl Target for Service {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn responds_to(&self, operation: &str) -> bool {
        self.operations.contains_key(operation)
    }

    fn call(&self, invocation: Invocation<'_>) -> anyhow::Result<Value> {
        let operation = self
            .operations
            .get(invocation.operation)
            .ok_or_else(|| UnsupportedOperation::new(invocation.operation, &self.name))?;

        operation(invocation)
    }
}

impl fmt::Debug for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operations: Vec<_> = self.operations().collect();
        operations.sort_unstable();

        f.debug_struct("Service")
            .field("name", &self.name)
            .field("operations", &operations)
            .finish()
    }
}

pub struct ServiceBuilder {
    name: String,
    operations: HashMap<String, Operation>,
}

impl ServiceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: HashMap::new(),
        }
    }

    /// Register `handler` under `name`. A later registration with the same
    /// name replaces the earlier one.
    pub fn operation<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Invocation<'_>) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.operations.insert(name.clone(), Arc::new(handler)).is_some() {
            tracing::debug!(service = %self.name, operation = %name, "operation redefined");
        }
        self
    }

    pub fn build(self) -> Service {
        Service {
            name: self.name,
            operations: self.operations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo() -> Service {
        Service::builder("Echo")
            .operation("echo", |call| Ok(json!(call.args)))
            .operation("each", |mut call| {
                let items = std::mem::take(&mut call.args);
                for item in items {
                    call.yield_block(vec![item])?;
                }
                Ok(Value::Null)
            })
            .build()
    }

    #[test]
    fn test_service_responds_to_registered_operations() {
        let svc = echo();
        assert!(svc.responds_to("echo"));
        assert!(svc.responds_to("each"));
        assert!(!svc.responds_to("foo"));
        assert_eq!(svc.type_name(), "Echo");
    }

    #[test]
    fn test_service_call_passes_arguments() {
        let svc = echo();
        let out = svc
            .call(Invocation::new("echo", vec![json!(1), json!("two")]))
            .unwrap();
        assert_eq!(out, json!([1, "two"]));
    }

    #[test]
    fn test_service_call_unknown_operation() {
        let err = echo().call(Invocation::new("foo", vec![])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnsupportedOperation>(),
            Some(&UnsupportedOperation::new("foo", "Echo"))
        );
    }

    #[test]
    fn test_service_yields_to_block() {
        let mut total = 0;
        let mut block = |args: Vec<Value>| -> anyhow::Result<Value> {
            total += args[0].as_i64().unwrap_or_default();
            Ok(Value::Null)
        };

        echo()
            .call(Invocation::new("each", vec![json!(1), json!(2), json!(3)]).with_block(&mut block))
            .unwrap();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_later_registration_wins() {
        let svc = Service::builder("Twice")
            .operation("go", |_| Ok(json!(1)))
            .operation("go", |_| Ok(json!(2)))
            .build();
        assert_eq!(svc.call(Invocation::new("go", vec![])).unwrap(), json!(2));
    }
}
