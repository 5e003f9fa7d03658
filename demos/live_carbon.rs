use electricitymap_rs::{EmClient, Location};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("ELECTRICITYMAP_TOKEN")?;
    let client = EmClient::new(token)?;

    let zone = std::env::args().nth(1).unwrap_or_else(|| "DE".to_string());
    let location = Location::zone(&zone);

    println!("--- Live carbon intensity ---");
    let ci = client.carbon_intensity_latest(&location).await?;
    println!(
        "  {}: {} gCO2eq/kWh at {}",
        zone,
        ci.carbon_intensity
            .map(|v| v.to_string())
            .unwrap_or_else(|| "n/a".to_string()),
        ci.datetime
    );
    println!();

    println!("--- Last 24h ---");
    let history = client.carbon_intensity_history(&location).await?;
    for point in &history.history {
        println!(
            "  {}  {:>6}",
            point.datetime,
            point
                .carbon_intensity
                .map(|v| v.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        );
    }

    Ok(())
}
