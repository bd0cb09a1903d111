// ────────────────────────────────
// src/proxy/forward.rs
// Compile-time adapter: implement a trait on Proxy by select-then-forward
// ────────────────────────────────

/// Implement a trait for [`Proxy`](crate::Proxy) so that each method selects
/// a candidate and calls the same method on it.
///
/// `forward! { impl Trait for Candidate { .. } }` generates
/// `impl<S: Strategy<Candidate>> Trait for Proxy<Candidate, S>`.
///
/// The trait may be module-qualified and generic (`codec::Encode<u32>`), but
/// a path starting with `::` is not accepted.
///
/// Only `&self` methods are supported, and every listed method must return
/// `Result<_, E>` where `E: From<anyhow::Error>`, since selection itself can
/// fail.
///
/// ```
/// use tiny_lb::{forward, strategy::Pinned, Proxy};
///
/// trait Handler {
///     fn handle(&self, payload: &str) -> anyhow::Result<String>;
/// }
///
/// struct Primary;
///
/// impl Handler for Primary {
///     fn handle(&self, payload: &str) -> anyhow::Result<String> {
///         Ok(format!("P:{}", payload))
///     }
/// }
///
/// forward! {
///     impl Handler for Box<dyn Handler + Send + Sync> {
///         fn handle(&self, payload: &str) -> anyhow::Result<String>;
///     }
/// }
///
/// let candidates: Vec<Box<dyn Handler + Send + Sync>> = vec![Box::new(Primary)];
/// let lb = Proxy::new(candidates, Pinned::primary()).unwrap();
/// assert_eq!(lb.handle("x").unwrap(), "P:x");
/// ```
#[macro_export]
macro_rules! forward {
    (
        @impl [$($trait:tt)+] $import:tt $target:ty {
            $(
                fn $method:ident(&self $(, $arg:ident: $arg_ty:ty)*) -> $ret:ty;
            )*
        }
    ) => {
        impl<LbStrategy> $($trait)+ for $crate::Proxy<$target, LbStrategy>
        where
            LbStrategy: $crate::Strategy<$target>,
        {
            $(
                fn $method(&self $(, $arg: $arg_ty)*) -> $ret {
                    $crate::forward!(@imports $import);
                    let target = self.select()?;
                    target.$method($($arg),*)
                }
            )*
        }
    };
    (@imports [$($import:tt)*]) => {
        $($import)*
    };
    (
        impl $trait:ident $(< $($gen:ty),+ >)? for $target:ty { $($body:tt)* }
    ) => {
        $crate::forward! {
            @impl [$trait $(< $($gen),+ >)?] [] $target { $($body)* }
        }
    };
    // Qualified traits are imported so their methods resolve on the target.
    (
        impl $($seg:ident)::+ $(< $($gen:ty),+ >)? for $target:ty { $($body:tt)* }
    ) => {
        $crate::forward! {
            @impl [$($seg)::+ $(< $($gen),+ >)?]
            [#[allow(unused_imports)] use $($seg)::+ as _;]
            $target { $($body)* }
        }
    };
}
