// src/target/target.rs
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Trailing callable handed along with an invocation.
pub type Block<'a> = &'a mut dyn FnMut(Vec<Value>) -> anyhow::Result<Value>;

/// One call on its way to a target: operation name, positional arguments and
/// an optional trailing block. Lives only for the duration of the forward.
pub struct Invocation<'a> {
    pub operation: &'a str,
    pub args: Vec<Value>,
    pub block: Option<Block<'a>>,
}

impl<'a> Invocation<'a> {
    pub fn new(operation: &'a str, args: Vec<Value>) -> Self {
        Self {
            operation,
            args,
            block: None,
        }
    }

    pub fn with_block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn block_given(&self) -> bool {
        self.block.is_some()
    }

    /// Run the trailing block with `args`.
    pub fn yield_block(&mut self, args: Vec<Value>) -> anyhow::Result<Value> {
        match self.block.as_deref_mut() {
            Some(block) => block(args),
            None => Err(NoBlockGiven {
                operation: self.operation.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("operation", &self.operation)
            .field("args", &self.args)
            .field("block", &self.block_given())
            .finish()
    }
}

/// Anything a call can be forwarded to.
pub trait Target {
    /// Type or identity shown in diagnostics.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn responds_to(&self, operation: &str) -> bool;

    fn call(&self, invocation: Invocation<'_>) -> anyhow::Result<Value>;
}

impl<T: Target + ?Sized> Target for Box<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn responds_to(&self, operation: &str) -> bool {
        (**self).responds_to(operation)
    }

    fn call(&self, invocation: Invocation<'_>) -> anyhow::Result<Value> {
        (**self).call(invocation)
    }
}

impl<T: Target + ?Sized> Target for Arc<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn responds_to(&self, operation: &str) -> bool {
        (**self).responds_to(operation)
    }

    fn call(&self, invocation: Invocation<'_>) -> anyhow::Result<Value> {
        (**self).call(invocation)
    }
}

impl<T: Target + ?Sized> Target for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn responds_to(&self, operation: &str) -> bool {
        (**self).responds_to(operation)
    }

    fn call(&self, invocation: Invocation<'_>) -> anyhow::Result<Value> {
        (**self).call(invocation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("undefined operation `{operation}` for an instance of {target}")]
pub struct UnsupportedOperation {
    pub operation: String,
    pub target: String,
}

impl UnsupportedOperation {
    pub fn new(operation: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no block given (yield) in `{operation}`")]
pub struct NoBlockGiven {
    pub operation: String,
}
