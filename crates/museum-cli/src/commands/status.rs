//! Status command - inventory summary, human or JSON.

use std::path::Path;

use colored::Colorize;
use museum::{service, MuseumStore};

pub fn run(file: &Path, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = MuseumStore::load(file)?;
    let summary = service::summarize(&store);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Inventory status for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();

    println!("{}", "Exhibits:".yellow().bold());
    println!("  Total:       {}", summary.total_exhibits.to_string().white().bold());
    println!("  Im Lager:    {}", summary.by_status.in_storage.to_string().blue());
    println!("  Ausgestellt: {}", summary.by_status.on_display.to_string().green());
    println!("  Ungewiss:    {}", summary.by_status.uncertain.to_string().yellow());
    println!();

    if !summary.by_period.is_empty() {
        println!("{}", "By period:".yellow().bold());
        let mut periods: Vec<_> = summary.by_period.iter().collect();
        periods.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (period, count) in periods {
            println!("  {:<28} {}", period, count);
        }
        println!();
    }

    println!("{} {}", "Galleries:".yellow().bold(), summary.total_galleries);

    Ok(())
}
