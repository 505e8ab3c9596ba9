//! # Blueprints CLI
//!
//! Section properties of standard steel profiles and NEN 9997-1 soil
//! parameters from the terminal.
//!
//! ```text
//! blueprints section --profile HEB200 --grade S355 --corrosion 1.0
//! blueprints soil --soil-type "Klei, schoon, matig" --upper --json
//! blueprints list-profiles
//! blueprints list-soils
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use blueprints_core::eurocode::nen_9997_1::{Bound, SoilParameters, SoilType};
use blueprints_core::materials::SteelMaterial;
use blueprints_core::sections::{SectionProperties, StandardProfile};
use blueprints_core::{BlueprintsResult, SectionSettings};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "blueprints")]
#[command(about = "Steel section properties and NEN 9997-1 soil parameters")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with section mesh settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Properties of a standard steel profile
    Section {
        /// Profile name, e.g. HEB200, IPE300, CHS168.3x8, STRIP200x10
        #[arg(short, long)]
        profile: String,

        /// Steel grade
        #[arg(short, long, default_value = "S355")]
        grade: String,

        /// Corrosion allowance per exposed face (mm)
        #[arg(short, long, default_value_t = 0.0)]
        corrosion: f64,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Characteristic soil parameters (NEN 9997-1 Table 2.b)
    Soil {
        /// Soil type, e.g. "Zand, schoon, matig" or SandCleanModerate
        #[arg(short, long)]
        soil_type: String,

        /// Use the high characteristic values
        #[arg(long)]
        upper: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the standard steel profiles
    ListProfiles,
    /// List the soil types of Table 2.b
    ListSoils,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> BlueprintsResult<()> {
    match cli.command {
        Commands::Section {
            profile,
            grade,
            corrosion,
            json,
        } => {
            let settings = match &cli.settings {
                Some(path) => {
                    info!("Loading section settings from {}", path.display());
                    SectionSettings::load(path)?
                }
                None => SectionSettings::default(),
            };
            let properties = section_properties(&profile, &grade, corrosion, settings)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&properties)?);
            } else {
                print_section(&properties);
            }
        }
        Commands::Soil {
            soil_type,
            upper,
            json,
        } => {
            let soil = SoilType::from_str_flexible(&soil_type)?;
            let bound = if upper { Bound::Upper } else { Bound::Lower };
            let params = soil.parameters(bound)?;
            if json {
                println!("{}", serde_json::to_string_pretty(params)?);
            } else {
                print_soil(soil, bound, params);
            }
        }
        Commands::ListProfiles => {
            for profile in StandardProfile::all() {
                println!("{:<8} {}", profile.family(), profile.name());
            }
        }
        Commands::ListSoils => {
            for soil in SoilType::ALL {
                println!("{:<34} {:?}", soil.dutch_name(), soil);
            }
        }
    }
    Ok(())
}

fn section_properties(
    profile: &str,
    grade: &str,
    corrosion: f64,
    settings: SectionSettings,
) -> BlueprintsResult<SectionProperties> {
    let profile = StandardProfile::from_name(profile)?;
    let material = SteelMaterial::from_str_flexible(grade)?;
    debug!("Building {} in {} with {} mm corrosion", profile.name(), material.display_name(), corrosion);
    let section = profile.build(material, corrosion)?.with_settings(settings)?;
    section.properties()
}

fn print_section(p: &SectionProperties) {
    println!("═══════════════════════════════════════");
    println!("  {}", p.name);
    println!("═══════════════════════════════════════");
    println!();
    println!("Geometry:");
    println!("  h x b     = {:.1} x {:.1} mm", p.height, p.width);
    println!("  A         = {:.0} mm²", p.area);
    println!("  Perimeter = {:.0} mm", p.perimeter);
    println!("  Centroid  = ({:.1}, {:.1}) mm", p.centroid_x, p.centroid_y);
    println!();
    println!("Stiffness:");
    println!("  I_y       = {:.4e} mm⁴", p.moment_of_inertia_about_y);
    println!("  I_z       = {:.4e} mm⁴", p.moment_of_inertia_about_z);
    println!("  i_y       = {:.1} mm", p.radius_of_gyration_about_y);
    println!("  i_z       = {:.1} mm", p.radius_of_gyration_about_z);
    println!();
    println!("Section moduli:");
    println!(
        "  W_el,y    = {:.4e} / {:.4e} mm³",
        p.elastic_section_modulus_about_y_positive, p.elastic_section_modulus_about_y_negative
    );
    println!(
        "  W_el,z    = {:.4e} / {:.4e} mm³",
        p.elastic_section_modulus_about_z_positive, p.elastic_section_modulus_about_z_negative
    );
    println!("  W_pl,y    = {:.4e} mm³", p.plastic_section_modulus_about_y);
    println!("  W_pl,z    = {:.4e} mm³", p.plastic_section_modulus_about_z);
    println!();
    println!("Material:");
    println!("  f_y       = {:.0} MPa", p.yield_strength.0);
    println!("  f_u       = {:.0} MPa", p.ultimate_strength.0);
    println!("  G         = {:.1} kg/m", p.weight_per_meter.0);
}

fn print_soil(soil: SoilType, bound: Bound, p: &SoilParameters) {
    println!("═══════════════════════════════════════");
    println!("  {} ({:?} bound)", soil.dutch_name(), bound);
    println!("═══════════════════════════════════════");
    println!("  γ_unsat     = {:.1} kN/m³", p.gamma_unsaturated);
    println!("  γ_sat       = {:.1} kN/m³", p.gamma_saturated);
    println!("  q_c         = {} MPa", p.cone_resistance.0);
    println!("  C'_p        = {}", p.c_p);
    println!("  C_c/(1+e0)  = {:.4}", p.c_c);
    println!("  C_sw/(1+e0) = {:.4}", p.c_sw);
    println!("  E_100       = {} MPa", p.e_100.0);
    println!("  φ'          = {:.1}°", p.friction_angle.0);
    println!("  c'          = {} kPa", p.cohesion);
    match p.undrained_shear_strength {
        Some(f_undr) => println!("  f_undr      = {} kPa", f_undr),
        None => println!("  f_undr      = -"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_section() {
        let cli = Cli::parse_from(["blueprints", "section", "--profile", "HEB200", "--corrosion", "1.5", "--json"]);
        match cli.command {
            Commands::Section {
                profile,
                grade,
                corrosion,
                json,
            } => {
                assert_eq!(profile, "HEB200");
                assert_eq!(grade, "S355");
                assert_eq!(corrosion, 1.5);
                assert!(json);
            }
            _ => panic!("expected section command"),
        }
    }

    #[test]
    fn test_section_properties() {
        let p = section_properties("IPE300", "S235", 0.0, SectionSettings::default()).unwrap();
        assert_eq!(p.yield_strength.0, 235.0);
        assert!((p.height - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_profile() {
        let err = section_properties("HEZ999", "S355", 0.0, SectionSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_invalid_settings_reported() {
        let settings = SectionSettings {
            mesh_refinement: -1.0,
            ..Default::default()
        };
        let err = section_properties("HEB200", "S355", 0.0, settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
