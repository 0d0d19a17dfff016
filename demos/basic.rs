//! Basic example demonstrating project reconciliation.
//!
//! Run with:
//! ```
//! DTRACK_API_KEY=your-key cargo run --example basic -- acme-app 1.0 target/bom.json
//! ```

use dtrackapi::{PrettyPrint, ProjectReconciler};

#[tokio::main]
async fn main() -> dtrackapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "acme-app".to_string());
    let version = args.next().unwrap_or_else(|| "1.0".to_string());
    let bom = args.next().unwrap_or_else(|| "bom.json".to_string());

    println!("Creating reconciler...");
    let reconciler = ProjectReconciler::from_env()?;
    println!("Connected to: {}", reconciler.gateway().base_url());

    println!("\n--- Getting Project ---");
    let project = reconciler.get_project(&name, &version).await?;
    println!("{}", project.pretty_print());

    println!("\n--- Updating Project Info from {bom} ---");
    let updated = reconciler.update_project_info(&project, &bom).await?;
    println!("Updated: {updated}");

    if updated {
        let project = reconciler.get_project(&name, &version).await?;
        println!("{}", project.pretty_print());
    }

    println!("\nDone!");
    Ok(())
}
