// src/main.rs
use anyhow::Result;
use serde_json::{json, Value};
use tiny_lb::{
    config,
    metrics::{Instrumented, MetricsRegistry},
    strategy::create_strategy,
    Proxy, Service,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tiny_lb=debug".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    let metrics_registry = MetricsRegistry::new()?;
    let strategy = Instrumented::new(
        create_strategy::<Service>(&config.strategy)?,
        metrics_registry.collector(),
    );

    // services[0] is production, services[1] the experiment being rolled out
    let services = vec![
        demo_service("ProdSvc", "prod"),
        demo_service("ExpSvc", "exp"),
    ];
    config.strategy.check_candidates(services.len())?;
    let lb = Proxy::new(services, strategy)?;

    for _ in 0..config.calls {
        let handled = lb.invoke("do_work", vec![json!(config.payload)])?;
        println!("{}", handled.as_str().unwrap_or_default());
    }

    info!(
        "Selection metrics:\n{}",
        String::from_utf8_lossy(&metrics_registry.gather())
    );

    Ok(())
}

fn demo_service(name: &str, label: &'static str) -> Service {
    Service::builder(name)
        .operation("do_work", move |call| {
            let payload = call.args.first().and_then(Value::as_str).unwrap_or_default();
            Ok(json!(format!("{} svc handled: {}", label, payload)))
        })
        .build()
}
