//! Path sampling command

use anyhow::{bail, Result};
use onix_animation::{locate_segment, sample_path};
use onix_map::{load_validated_map, AnimatedModelPlacement, Waypoint};

pub fn run(map: &str, model: &str, time: f64) -> Result<()> {
    let config = load_validated_map(map)?;
    let (index, placement) = find_model(&config.animated_models, model)?;

    let Some(path) = &placement.path else {
        println!(
            "animatedModels[{}] ({}) has no path; it stays at its initial position.",
            index, placement.model_name
        );
        return Ok(());
    };

    let rest = Waypoint::from_transform(&placement.transform);
    let at = sample_path(path, time, &rest);

    println!(
        "animatedModels[{}] ({}) at t={}s",
        index, placement.model_name, time
    );
    println!(
        "  path:     {} point(s), {}s, {}",
        path.points.len(),
        path.duration,
        if path.looping { "looping" } else { "open" }
    );
    match locate_segment(path, time) {
        Some(seg) => println!(
            "  segment:  {} of {} ({} -> {}), local t = {:.3}",
            seg.index,
            path.segment_count(),
            seg.from,
            seg.to,
            seg.local_t
        ),
        None => println!("  segment:  none (degenerate path)"),
    }
    println!(
        "  position: ({:.3}, {:.3}, {:.3})",
        at.position.x, at.position.y, at.position.z
    );
    println!(
        "  rotation: ({:.3}, {:.3}, {:.3})",
        at.rotation.x, at.rotation.y, at.rotation.z
    );

    Ok(())
}

/// Select by list index first, then by modelName
fn find_model<'a>(
    models: &'a [AnimatedModelPlacement],
    key: &str,
) -> Result<(usize, &'a AnimatedModelPlacement)> {
    if let Ok(index) = key.parse::<usize>() {
        return match models.get(index) {
            Some(m) => Ok((index, m)),
            None => bail!(
                "animated model index {} out of range ({} model(s))",
                index,
                models.len()
            ),
        };
    }

    match models.iter().enumerate().find(|(_, m)| m.model_name == key) {
        Some(found) => Ok(found),
        None => bail!("no animated model named '{}'", key),
    }
}
