// ==========================================
// ISO 8573 压缩空气配置工具 - 命令行入口
// ==========================================
// 用法:
//   iso-air-configurator [--db <path>] [--json] iso <particulate> <water> <oil> [flow]
//   iso-air-configurator [--db <path>] [--json] industry <industry> <application> [flow]
//   iso-air-configurator [--db <path>] [--json] levels
//   iso-air-configurator [--db <path>] [--json] industries
//   iso-air-configurator [--db <path>] [--json] applications <industry>
// ==========================================

use iso_air_configurator::api::validator::parse_flow;
use iso_air_configurator::api::GenerateRequest;
use iso_air_configurator::app::{get_default_db_path, render_result, AppState};
use iso_air_configurator::logging;

const USAGE: &str = "\
Usage:
  iso-air-configurator [--db <path>] [--json] iso <particulate> <water> <oil> [flow]
  iso-air-configurator [--db <path>] [--json] industry <industry> <application> [flow]
  iso-air-configurator [--db <path>] [--json] levels
  iso-air-configurator [--db <path>] [--json] industries
  iso-air-configurator [--db <path>] [--json] applications <industry>

Examples:
  iso-air-configurator iso 1 1 1
  iso-air-configurator iso 1 2 1 250
  iso-air-configurator industry \"Carwash\" \"Touchless Wash Systems\" 2110";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("warn");

    let mut db_path: Option<String> = None;
    let mut json = false;
    let mut positional: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--db" => db_path = Some(args.next().ok_or("--db requires a path")?),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let db_path = db_path.unwrap_or_else(get_default_db_path);
    tracing::info!(version = iso_air_configurator::VERSION, db_path = %db_path, "启动");

    let mode = match positional.first() {
        Some(mode) => mode.as_str(),
        None => {
            eprintln!("{}", USAGE);
            return Err("missing mode".into());
        }
    };
    let rest = &positional[1..];

    let state = AppState::new(db_path)?;

    match mode {
        "iso" | "industry" => {
            let request = build_request(mode, rest)?;
            let response = state.configuration_api.generate(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print!("{}", render_result(&response.result));
            }
        }
        "levels" => {
            let levels = state.catalog_api.purity_levels()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&levels)?);
            } else {
                for (label, entries) in [
                    ("Particle", &levels.particle),
                    ("Water", &levels.water),
                    ("Oil", &levels.oil),
                ] {
                    println!("{}:", label);
                    for entry in entries {
                        println!("  {}  {}", entry.level, entry.description);
                    }
                }
            }
        }
        "industries" => {
            let industries = state.catalog_api.list_industries()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&industries)?);
            } else {
                for industry in industries {
                    println!("{}", industry.name);
                }
            }
        }
        "applications" => {
            let industry = rest.first().ok_or("applications requires <industry>")?;
            let applications = state.catalog_api.list_applications_by_industry_name(industry)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&applications)?);
            } else {
                for application in applications {
                    println!("{}  {}", application.name, application.iso_class.bracketed());
                }
            }
        }
        other => {
            eprintln!("{}", USAGE);
            return Err(format!("invalid mode: {} (use \"iso\" or \"industry\")", other).into());
        }
    }

    Ok(())
}

fn build_request(
    mode: &str,
    rest: &[String],
) -> Result<GenerateRequest, Box<dyn std::error::Error>> {
    let flow_at = |index: usize| rest.get(index).map(String::as_str).map(parse_flow).transpose();

    if mode == "iso" {
        if rest.len() < 3 {
            return Err("Missing parameters for ISO mode: iso <particulate> <water> <oil> [flow]".into());
        }
        Ok(GenerateRequest::iso(&rest[0], &rest[1], &rest[2], flow_at(3)?))
    } else {
        if rest.len() < 2 {
            return Err("Missing parameters for industry mode: industry <industry> <application> [flow]".into());
        }
        Ok(GenerateRequest::industry(&rest[0], &rest[1], flow_at(2)?))
    }
}
