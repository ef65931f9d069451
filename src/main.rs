use clap::Parser;
use shipquote::config::Command;
use shipquote::core::{OrderDraft, RateRequest};
use shipquote::utils::logger;
use shipquote::{CliConfig, FileReferenceData, JsonOrderStore, OrderService, QuoteEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shipquote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let reference = FileReferenceData::new(&config.data_dir);

    let result = match &config.command {
        Command::Quote {
            weight,
            pickup,
            delivery,
        } => {
            let request = RateRequest {
                weight: *weight,
                dimensions: None,
                pickup_postal_code: pickup.clone(),
                delivery_postal_code: delivery.clone(),
            };
            let engine = QuoteEngine::new(reference);
            engine
                .quote(&request)
                .await
                .and_then(|response| Ok(serde_json::to_string_pretty(&response)?))
        }
        Command::Couriers { id } => {
            let engine = QuoteEngine::new(reference);
            match id {
                Some(id) => engine
                    .courier(*id)
                    .await
                    .and_then(|c| Ok(serde_json::to_string_pretty(&c)?)),
                None => engine
                    .couriers()
                    .await
                    .and_then(|c| Ok(serde_json::to_string_pretty(&c)?)),
            }
        }
        Command::CreateOrder { draft } => {
            let content = std::fs::read_to_string(draft)?;
            let draft: OrderDraft = serde_json::from_str(&content)?;
            let service = OrderService::new(JsonOrderStore::new(&config.orders_file), reference);
            service
                .create(&draft)
                .await
                .map(|id| format!("{{\"id\": {}}}", id))
        }
        Command::Orders { id, user_id } => {
            let service = OrderService::new(JsonOrderStore::new(&config.orders_file), reference);
            match id {
                Some(id) => service
                    .get(*id)
                    .await
                    .and_then(|o| Ok(serde_json::to_string_pretty(&o)?)),
                None => service
                    .list(*user_id)
                    .await
                    .and_then(|o| Ok(serde_json::to_string_pretty(&o)?)),
            }
        }
        Command::SetStatus { id, status } => {
            let service = OrderService::new(JsonOrderStore::new(&config.orders_file), reference);
            service
                .update_status(*id, status)
                .await
                .map(|_| format!("{{\"id\": {}, \"status\": \"{}\"}}", id, status))
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            // Validation and computation failures exit with distinct codes.
            let exit_code = if e.is_validation() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
