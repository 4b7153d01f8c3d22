//! Feature-gated tracing macros.
//!
//! With the `tracing` feature these forward to `tracing::info_span!` and
//! `tracing::info!`. Without it they expand to no-ops, so the correlators
//! carry no `#[cfg]` of their own.

/// Opens an info-level span around one correlation call.
///
/// Call sites always write `let _span = trace_span!(..).entered();`; when
/// tracing is off this yields a [`NoopSpan`] whose `entered` is the identity.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Records sizing facts for a correlation call (placement count, pattern
/// cells, plane split) as named fields on an info event.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

// The field values are still evaluated, so locals that only feed an event
// do not trip `unused` lints in builds without tracing.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in for `tracing::Span` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns itself, mirroring `Span::entered`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
