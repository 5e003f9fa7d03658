use electricitymap_rs::{EmClient, Location};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("ELECTRICITYMAP_TOKEN")?;
    let client = EmClient::new(token)?;

    println!("--- Zones available with this token ---");
    let zones = client.zones().await?;
    for (id, zone) in zones.iter().take(10) {
        println!("  {:<10} {}", id, zone.zone_name);
    }
    println!("  ({} zones total)", zones.len());
    println!();

    println!("--- Live power breakdown (DE) ---");
    let pb = client.power_breakdown_latest(&Location::zone("DE")).await?;
    for (source, mw) in &pb.power_consumption_breakdown {
        if let Some(mw) = mw {
            println!("  {:<18} {:>8.0} MW", source, mw);
        }
    }
    if let Some(renewable) = pb.renewable_percentage {
        println!("  renewable share: {renewable}%");
    }

    Ok(())
}
