use clap::Parser;
use small_atlas::utils::logger;
use small_atlas::{CliConfig, Command, CountryFile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Loading country file: {}", config.country_file);

    let mut country = CountryFile::from_file(&config.country_file)?.build_country()?;

    match config.command {
        Command::Show => print!("{country}"),
        Command::Residents => {
            println!(
                "{} has {} residents across {} cities",
                country.name(),
                country.num_of_residents(),
                country.len()
            );
        }
        Command::Longest { exact } => {
            let distance = if exact {
                country.max_pairwise_distance()
            } else {
                country.longest_distance()
            };
            println!("{distance}");
        }
        Command::NorthOf { city } => println!("{}", country.cities_north_of(&city)),
        Command::Southernmost => match country.southernmost_city() {
            Some(city) => print!("{city}"),
            None => println!("{} has no cities", country.name()),
        },
        Command::Unify { city1, city2 } => match country.unify_cities(&city1, &city2) {
            Some(city) => print!("{city}"),
            None => {
                eprintln!("No pair of cities named {city1} and {city2}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
