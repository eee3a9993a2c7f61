use ferris_sort::config::Config;
use ferris_sort::output;
use ferris_sort::server::SortServer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    output::init(config.plain_output);

    let service = config.service_name.clone();
    output::startup_banner(&service);
    output::config_item(&service, "Address", &config.bind_address());
    output::config_item(&service, "Max numbers", &config.max_numbers.to_string());

    let server = SortServer::new(config);
    if let Err(e) = server.run().await {
        output::error(&service, &e.to_string());
        std::process::exit(1);
    }
}
