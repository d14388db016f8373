//! Map validation command

use anyhow::{Context, Result};
use onix_asset::AssetCatalog;
use onix_map::{
    check, load_map_config, resolve_model_references, MissingAssetError, Severity,
    ValidationReport,
};

pub struct ValidateArgs {
    pub map: String,
    pub assets: Option<String>,
    pub format: String,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let config = load_map_config(&args.map)?;
    let report = check(&config);

    let missing = match &args.assets {
        Some(dir) => {
            let catalog = AssetCatalog::load_from_directory(dir)
                .with_context(|| format!("loading assets from {}", dir))?;
            resolve_model_references(&config, &catalog).err().unwrap_or_default()
        }
        None => Vec::new(),
    };

    if args.format == "json" {
        print_report_json(&report, &missing, args.assets.is_some())?;
    } else {
        print_report_text(&report, &missing);
    }

    if !report.is_valid() || !missing.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report_text(report: &ValidationReport, missing: &[MissingAssetError]) {
    if report.violations.is_empty() && missing.is_empty() {
        println!("Map is valid.");
        return;
    }

    println!("{}", report.summary());

    if !report.violations.is_empty() {
        println!();
        for violation in &report.violations {
            let severity_str = match violation.severity() {
                Severity::Error => "ERROR",
                Severity::Warning => "WARN ",
            };
            println!("  [{}] {}", severity_str, violation);
        }
    }

    if !missing.is_empty() {
        println!("\n{} missing asset(s):", missing.len());
        for m in missing {
            println!("  [MISSING] {}", m);
        }
    }
}

fn print_report_json(
    report: &ValidationReport,
    missing: &[MissingAssetError],
    assets_checked: bool,
) -> Result<()> {
    let missing: Vec<serde_json::Value> = missing
        .iter()
        .map(|m| {
            serde_json::json!({
                "model_name": m.model_name,
                "referenced_by": m.referenced_by.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "valid": report.is_valid() && missing.is_empty(),
        "summary": report.summary(),
        "errors": report.error_count(),
        "warnings": report.warning_count(),
        "violations": report.violations,
        "assets_checked": assets_checked,
        "missing_assets": missing,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
