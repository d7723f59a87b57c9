//! # Lesson Storefront Entry Point
//!
//! Headless run of the storefront: loads the catalog, optionally searches,
//! and prints the resulting view snapshot as JSON.
//!
//! ```text
//! storefront            # full catalog
//! storefront "math"     # catalog after searching for "math"
//! ```

#[tokio::main]
async fn main() {
    let search = std::env::args().nth(1);

    if let Err(err) = storefront_lib::run(search).await {
        eprintln!("storefront: {err}");
        std::process::exit(err.exit_code());
    }
}
