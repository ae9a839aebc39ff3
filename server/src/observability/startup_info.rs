use tracing::info;
use watermark_application::{
    infrastructure_config::Config, ports::outgoing::text_overlay::FontTier,
};

pub fn print_api_info(config: &Config, font_tier: &FontTier) {
    print_endpoint_info(config);
    print_configuration_info(config, font_tier);
}

fn print_endpoint_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 Endpoints:");
    info!("  🖼️  Upload page: {}/", base_url);
    info!("  🔧 Process API: POST {}/api/process", base_url);
    info!("  💓 Health: {}/health", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
        info!("  📄 OpenAPI JSON: {}/api-docs/openapi.json", base_url);
    }
}

fn print_configuration_info(config: &Config, font_tier: &FontTier) {
    info!("⚙️  Configuration:");
    info!("  🌍 Environment: {}", config.environment.env);
    info!("  🔌 Port: {}", config.server.port);
    info!(
        "  🐞 Debug: {} (log level {})",
        config.server.debug,
        config.log_level()
    );
    info!("  🔤 Font: {}", font_tier);
    info!(
        "  ⏱️  Request timeout: {}s",
        config.server.request_timeout_secs
    );
    info!(
        "  📦 Max body size: {} MiB",
        config.server.max_body_bytes / (1024 * 1024)
    );
}
