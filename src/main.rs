use anyhow::Result;
use revisar_trabajos::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializa los logs
    logger::init();

    // Carga la configuración
    let config = Config::from_env();

    // Revisa el lote completo
    App::initialize(config).run().await?;

    Ok(())
}
