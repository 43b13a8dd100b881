//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pagesmith_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use pagesmith_core::{default_template, export};

fn main() {
    let template = default_template();
    let bundle = export(&template);

    println!("pagesmith_core version={}", pagesmith_core::core_version());
    println!("<!-- markup for `{}` -->", template.name);
    println!("{}", bundle.markup);
    println!("/* stylesheet */");
    println!("{}", bundle.stylesheet);
}
