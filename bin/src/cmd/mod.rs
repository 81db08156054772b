//! Command implementations.

pub(crate) mod events;
pub(crate) mod latest;
pub(crate) mod metadata;
pub(crate) mod timeline;
pub(crate) mod yearly;

/// Print a boxed section banner.
pub(crate) fn banner(title: &str) {
    let width = 62;
    println!("\n╔{}╗", "═".repeat(width));
    println!("║{:^width$}║", title);
    println!("╚{}╝\n", "═".repeat(width));
}

/// Format an optional metric to two decimals, or `n/a`.
pub(crate) fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
