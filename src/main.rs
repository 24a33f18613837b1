use certs_api::models::config::ServerConfig;
use config::{Config, Environment, File};

fn config_error(e: config::ConfigError) -> std::io::Error {
    std::io::Error::other(format!("Configuration error: {e}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = Config::builder()
        .set_default("address", "0.0.0.0")
        .map_err(config_error)?
        .set_default("port", 5000)
        .map_err(config_error)?
        .set_default("database_url", "certifications.db")
        .map_err(config_error)?
        .set_default("templates_dir", "templates/**/*.html")
        .map_err(config_error)?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()
        .map_err(config_error)?
        .try_deserialize::<ServerConfig>()
        .map_err(config_error)?;

    certs_api::run(server_config).await
}
