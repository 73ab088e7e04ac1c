//! ---
//! clarity_section: "03-diagnostics"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Structured diagnostics for the print-point pipeline."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
/// Emit a debug diagnostic enriched with print-point context.
#[macro_export]
macro_rules! clarity_debug {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::DEBUG,
            entity = ctx.entity_code.unwrap_or(""),
            function = ctx.function_number.unwrap_or_default(),
            print = ctx.print_number.unwrap_or_default(),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        $crate::tracing::event!(
            $crate::tracing::Level::DEBUG,
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational diagnostic enriched with print-point context.
#[macro_export]
macro_rules! clarity_info {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::INFO,
            entity = ctx.entity_code.unwrap_or(""),
            function = ctx.function_number.unwrap_or_default(),
            print = ctx.print_number.unwrap_or_default(),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        $crate::tracing::event!(
            $crate::tracing::Level::INFO,
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit a warning enriched with print-point context.
#[macro_export]
macro_rules! clarity_warn {
    (context = $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::tracing::event!(
            $crate::tracing::Level::WARN,
            entity = ctx.entity_code.unwrap_or(""),
            function = ctx.function_number.unwrap_or_default(),
            print = ctx.print_number.unwrap_or_default(),
            message = %format_args!($($arg)+)
        );
    }};
    ($($arg:tt)+) => {{
        $crate::tracing::event!(
            $crate::tracing::Level::WARN,
            message = %format_args!($($arg)+)
        );
    }};
}
