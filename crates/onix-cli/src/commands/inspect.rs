//! Map summary command

use anyhow::Result;
use onix_map::load_validated_map;
use onix_runtime::{DebugOverlayPlan, GizmoKind};

pub fn run(map: &str) -> Result<()> {
    let config = load_validated_map(map)?;
    let fingerprint = config.fingerprint()?;

    println!("Map: {}", map);
    println!("Fingerprint: {}", fingerprint.to_prefixed_hex());
    println!();

    println!("Ground: {} x {}", config.ground.width, config.ground.height);
    let camera = &config.camera;
    println!(
        "Camera: radius {} (min {}, max {}), beta {:.3}..{:.3}, move speed {}",
        camera.initial_radius,
        camera.min_radius,
        camera.max_radius,
        camera.lower_beta_limit,
        camera.upper_beta_limit,
        camera.move_speed
    );
    let base = config.base_color;
    println!("Base color: ({}, {}, {})", base.r, base.g, base.b);
    println!();

    println!(
        "Placements: {} building(s), {} environment(s), {} animated model(s)",
        config.buildings.len(),
        config.environments.len(),
        config.animated_models.len()
    );
    for placement in config.placements() {
        let p = placement.transform.position;
        println!(
            "  {:<18} {:<16} ({}, {}, {})",
            placement.id.to_string(),
            placement.model_name,
            p.x,
            p.y,
            p.z
        );
    }

    let names = config.model_names();
    println!();
    println!("Models referenced ({}):", names.len());
    for name in names {
        println!("  {}", name);
    }

    let plan = DebugOverlayPlan::from_config(&config);
    println!();
    if plan.is_empty() {
        println!("Debug overlay: off");
    } else {
        let gizmos: Vec<&str> = GizmoKind::ALL
            .iter()
            .filter(|k| k.enabled_in(&config.debug))
            .map(|k| k.toggle_name())
            .collect();
        println!("Debug overlay:");
        println!("  ground grid: {}", plan.grid.is_some());
        println!("  gizmos:      {} ({})", plan.gizmos.len(), gizmos.join(", "));
        println!("  light gizmo: {}", config.debug.light_gizmo);
        println!("  inspector:   {}", plan.inspector);
    }

    if !config.warnings().is_empty() {
        println!();
        println!("Warnings:");
        for warning in config.warnings() {
            println!("  [WARN ] {}", warning);
        }
    }

    Ok(())
}
