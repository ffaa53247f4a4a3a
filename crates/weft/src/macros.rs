//! Instrumentation macros

/// Trace the enclosing function: enter now, exit when the scope ends
///
/// ```no_run
/// fn handle() {
///     weft::trace_fn!();
///     // traced body
/// }
/// ```
#[macro_export]
macro_rules! trace_fn {
    () => {
        let _weft_scope = $crate::ScopeTracer::new($crate::__function_name!());
    };
}

/// Trace a custom-named scope: enter now, exit when the scope ends
///
/// ```no_run
/// {
///     weft::trace_scope!("load_index");
///     // traced body
/// }
/// ```
#[macro_export]
macro_rules! trace_scope {
    ($name:expr) => {
        let _weft_scope = $crate::ScopeTracer::new($name);
    };
}

/// Information marker with format arguments
///
/// ```no_run
/// weft::trace_info!("queue depth {}", 3);
/// ```
#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        $crate::info(&::std::format!($($arg)*))
    };
}

/// Static name of the enclosing function, without trailing path noise
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name.strip_suffix("::f").unwrap_or(name)
    }};
}
