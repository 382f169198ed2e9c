#[macro_export]
macro_rules! log_err {
    // Usage: log_err!("loading projects", err);
    ($context:expr, $err:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::leptos::logging::error!("[{}] {}: {}", location, $context, $err);
    }};
}

#[macro_export]
macro_rules! log_warn {
    // Usage: log_warn!("dropping malformed entry", detail);
    ($context:expr, $detail:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::leptos::logging::warn!("[{}] {}: {}", location, $context, $detail);
    }};
}
