use clap::{Parser, Subcommand};
use matsya_core::catalog::Catalogs;
use matsya_core::market::MarketPriceService;
use matsya_core::CoreConfig;
use std::collections::HashSet;

#[derive(Parser)]
#[command(name = "matsya")]
#[command(about = "Matsya fish-farm management CLI")]
struct Cli {
    /// Farm data directory (defaults to farm_data/)
    #[arg(long)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the symptom catalog
    Symptoms,
    /// Diagnose from observed symptom ids
    Diagnose {
        /// Symptom ids (e.g. gasping lethargy)
        symptom_ids: Vec<String>,
    },
    /// Show seasonal farming advice
    Seasons,
    /// Show the latest market price per species
    Prices {
        /// Restrict to one upazila
        #[arg(long)]
        upazila: Option<u32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let catalogs = Catalogs::load()?;

    match cli.command {
        Some(Commands::Symptoms) => {
            for symptom in catalogs.diagnosis.symptoms() {
                println!(
                    "{:<20} {:?}: {} ({})",
                    symptom.id, symptom.category, symptom.name_bn, symptom.name_en
                );
            }
        }
        Some(Commands::Diagnose { symptom_ids }) => {
            let observed: HashSet<String> = symptom_ids.into_iter().collect();
            let results = catalogs.diagnosis.diagnose(&observed);
            if results.is_empty() {
                println!("No matching disease. Consult a local fisheries expert.");
            } else {
                for (index, result) in results.iter().enumerate() {
                    println!(
                        "{}. {} ({}) — {:.1}% ({}/{}), severity {:?}",
                        index + 1,
                        result.name_bn,
                        result.name_en,
                        result.match_percentage,
                        result.matched_symptoms,
                        result.total_symptoms,
                        result.severity
                    );
                    println!("   Treatment: {}", result.treatment_bn);
                    println!("   Prevention: {}", result.prevention_bn);
                }
            }
        }
        Some(Commands::Seasons) => {
            for season in catalogs.seasons.seasons() {
                println!("{} ({}) — {}", season.season_bn, season.season_en, season.months_bn);
                for activity in &season.activities {
                    println!("   - {activity}");
                }
            }
        }
        Some(Commands::Prices { upazila }) => {
            let cfg = CoreConfig::from_env_value(cli.data_dir)?;
            let service =
                MarketPriceService::new(&cfg, catalogs.fish.clone(), catalogs.locations.clone());
            let rows = service.latest(upazila);
            if rows.is_empty() {
                println!("No price reports found.");
            } else {
                for row in rows {
                    println!(
                        "{} ({}): {} Tk/kg at {} on {}",
                        row.fish_species.species.name_bn,
                        row.fish_species.species.name_en,
                        row.price_per_kg,
                        row.location.upazila.name_bn,
                        row.price_date
                    );
                }
            }
        }
        None => {
            println!("matsya — run with --help for commands");
        }
    }

    Ok(())
}
