//! Headless animation run

use anyhow::{bail, Result};
use onix_animation::{ModelPose, PathAnimationSystem};
use onix_map::{load_validated_map, MapConfig};
use onix_runtime::FrameClock;

pub fn run(map: &str, seconds: f64, fps: u32) -> Result<()> {
    if fps == 0 {
        bail!("--fps must be at least 1");
    }
    if !seconds.is_finite() || seconds < 0.0 {
        bail!("--seconds must be a finite, non-negative number");
    }

    let config = load_validated_map(map)?;
    let mut system = PathAnimationSystem::from_config(&config);
    if system.is_empty() {
        println!("No animated models in {}", map);
        return Ok(());
    }

    print_poses(0.0, &system.poses(), &config);
    let clock = run_frames(&mut system, seconds, fps, |time, poses| {
        print_poses(time, poses, &config)
    });

    log::info!(
        "simulated {} frame(s), {:.2}s at {} fps",
        clock.frame,
        clock.total_time,
        fps
    );

    Ok(())
}

/// Step the system at a fixed frame rate, reporting once per simulated second
fn run_frames<F>(
    system: &mut PathAnimationSystem,
    seconds: f64,
    fps: u32,
    mut report: F,
) -> FrameClock
where
    F: FnMut(f64, &[ModelPose]),
{
    let frame_time = 1.0 / fps as f64;
    let frames = (seconds * fps as f64).round() as u64;
    let mut clock = FrameClock::new();
    let mut next_report = 1.0;

    for _ in 0..frames {
        let dt = clock.step_fixed(frame_time);
        let poses = system.update(dt);
        if clock.total_time + 1e-9 >= next_report {
            report(clock.total_time, &poses);
            next_report += 1.0;
        }
    }

    clock
}

fn print_poses(time: f64, poses: &[ModelPose], config: &MapConfig) {
    println!("t={:.2}s", time);
    for pose in poses {
        let p = pose.transform.position;
        println!(
            "  {} {:<16} pos=({:.2}, {:.2}, {:.2}) yaw={:.3} clip={}@{:.2}s",
            pose.id,
            config.model_name(pose.id).unwrap_or("?"),
            p.x,
            p.y,
            p.z,
            pose.transform.rotation.y,
            pose.clip_name,
            pose.clip_time
        );
    }
}
