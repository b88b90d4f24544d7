//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for any binary built on the store.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown, with the final document count
//! - **Requests**: `Get`, `Put` and `ListAll` at `debug`, accepted writes at `info`
//!   with the new version, rejected writes (conflicts, duplicate inserts) at `warn`
//! - **Client calls**: `DocumentStore` methods open a span per request
//!
//! ## Usage
//!
//! ```bash
//! # Accepted writes and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every request, with ids and expected versions
//! RUST_LOG=debug cargo run
//!
//! # Just the store
//! RUST_LOG=store_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a load-mutate-store round trip reads:
//!
//! ```text
//! DEBUG Get document_type="Franchise" id=3f0c... found=true
//! DEBUG Put document_type="Franchise" id=3f0c... expected=v4
//!  INFO Stored document_type="Franchise" id=3f0c... version=5 size=1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use document_type instead
        .compact()
        .init();
}
