//! Inicialización de logs
//!
//! Usa `RUST_LOG` si está definido; por defecto, nivel `info`.

use tracing_subscriber::EnvFilter;

/// Inicializa el suscriptor global de tracing.
///
/// Es seguro llamarlo más de una vez (los tests lo reutilizan).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
