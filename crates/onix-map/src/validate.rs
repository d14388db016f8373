//! Map validation
//!
//! Every invariant is checked in a fixed order and every finding is
//! collected; nothing short-circuits and nothing is clamped.

use crate::format::{AnimatedModelPlacement, BuildingPlacement, MapConfig, PlacementId};
use crate::report::{Rule, ValidationError, ValidationReport, ViolationKind};
use onix_core::{Color, ContentHash, Result, Transform};
use std::f32::consts::PI;
use std::ops::Deref;

/// A map that passed validation. Read-only; only [`validate`] creates one.
#[derive(Debug, Clone)]
pub struct ValidatedMapConfig {
    config: MapConfig,
    warnings: Vec<ValidationError>,
}

impl ValidatedMapConfig {
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Non-fatal findings from validation
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Fingerprint of the canonical JSON form. Formatting and source format
    /// of the map file do not affect it.
    pub fn fingerprint(&self) -> Result<ContentHash> {
        let canonical = serde_json::to_vec(&self.config)?;
        Ok(ContentHash::from_bytes(&canonical))
    }
}

impl Deref for ValidatedMapConfig {
    type Target = MapConfig;

    fn deref(&self) -> &MapConfig {
        &self.config
    }
}

/// Validate a map. On success the config is returned unchanged, wrapped with
/// its warnings. On failure every finding is returned, warnings included, in
/// check order.
pub fn validate(raw: MapConfig) -> std::result::Result<ValidatedMapConfig, Vec<ValidationError>> {
    let report = check(&raw);
    if report.is_valid() {
        for warning in report.warnings() {
            log::warn!("{}", warning);
        }
        log::debug!(
            "map validated: {} placement(s), {}",
            raw.placement_count(),
            report.summary()
        );
        Ok(ValidatedMapConfig {
            config: raw,
            warnings: report.violations,
        })
    } else {
        log::debug!("map rejected: {}", report.summary());
        Err(report.violations)
    }
}

/// Collect every finding for a map without consuming it
pub fn check(config: &MapConfig) -> ValidationReport {
    let mut checker = Checker::default();

    checker.check_ground(config);
    checker.check_camera(config);
    for (i, building) in config.buildings.iter().enumerate() {
        checker.check_building(PlacementId::building(i), building);
    }
    for (i, env) in config.environments.iter().enumerate() {
        let id = PlacementId::environment(i);
        checker.model_name(id, &env.model_name);
        checker.transform(id, &env.transform);
    }
    for (i, model) in config.animated_models.iter().enumerate() {
        checker.check_animated_model(PlacementId::animated_model(i), model);
    }
    checker.color("baseColor".to_string(), &config.base_color);

    checker.report
}

#[derive(Default)]
struct Checker {
    report: ValidationReport,
}

impl Checker {
    fn push(&mut self, kind: ViolationKind, fields: Vec<String>, rule: Rule, message: String) {
        self.report
            .push(ValidationError::new(kind, fields, rule, message));
    }

    fn range(&mut self, fields: Vec<String>, rule: Rule, message: String) {
        self.push(ViolationKind::RangeViolation, fields, rule, message);
    }

    /// Reports a non-finite value and returns false, so callers skip the
    /// range checks for it.
    fn finite(&mut self, field: &str, value: impl Into<f64>) -> bool {
        let value = value.into();
        if value.is_finite() {
            return true;
        }
        self.push(
            ViolationKind::SchemaViolation,
            vec![field.to_string()],
            Rule::Finite,
            format!("{} is {}", field, value),
        );
        false
    }

    fn positive(&mut self, field: &str, value: f32) -> bool {
        if !self.finite(field, value) {
            return false;
        }
        if value <= 0.0 {
            self.range(
                vec![field.to_string()],
                Rule::Positive,
                format!("{} is {}", field, value),
            );
            return false;
        }
        true
    }

    fn non_negative(&mut self, field: &str, value: f32) -> bool {
        if !self.finite(field, value) {
            return false;
        }
        if value < 0.0 {
            self.range(
                vec![field.to_string()],
                Rule::NonNegative,
                format!("{} is {}", field, value),
            );
            return false;
        }
        true
    }

    fn ordered(&mut self, low: (&str, f32), high: (&str, f32), strict: bool) {
        let broken = if strict { low.1 >= high.1 } else { low.1 > high.1 };
        if broken {
            let op = if strict { "<" } else { "<=" };
            self.range(
                vec![low.0.to_string(), high.0.to_string()],
                Rule::Ordering { strict },
                format!("{} ({}) must be {} {} ({})", low.0, low.1, op, high.0, high.1),
            );
        }
    }

    fn color(&mut self, field: String, color: &Color) {
        if !color.is_normalized() {
            self.range(
                vec![field],
                Rule::UnitColor,
                format!("color is ({}, {}, {})", color.r, color.g, color.b),
            );
        }
    }

    fn model_name(&mut self, id: PlacementId, name: &str) {
        if name.trim().is_empty() {
            let field = id.field("modelName");
            self.push(
                ViolationKind::SchemaViolation,
                vec![field],
                Rule::NonEmpty,
                format!("{} has no model reference", id),
            );
        }
    }

    fn transform(&mut self, id: PlacementId, transform: &Transform) {
        if transform.is_finite() {
            return;
        }
        for (member, v) in [
            ("position", transform.position),
            ("rotation", transform.rotation),
            ("scale", transform.scale),
        ] {
            if !v.is_finite() {
                self.push(
                    ViolationKind::SchemaViolation,
                    vec![id.field(member)],
                    Rule::Finite,
                    format!("{} is ({}, {}, {})", member, v.x, v.y, v.z),
                );
            }
        }
    }

    fn check_ground(&mut self, config: &MapConfig) {
        self.positive("ground.width", config.ground.width);
        self.positive("ground.height", config.ground.height);
    }

    fn check_camera(&mut self, config: &MapConfig) {
        let cam = &config.camera;
        let min = ("camera.minRadius", cam.min_radius);
        let initial = ("camera.initialRadius", cam.initial_radius);
        let max = ("camera.maxRadius", cam.max_radius);

        self.positive(min.0, min.1);
        let initial_ok = self.finite(initial.0, initial.1);
        let max_ok = self.finite(max.0, max.1);
        if min.1.is_finite() && initial_ok && max_ok {
            if min.1 > max.1 {
                // A reversed pair is one mistake; the initial radius cannot
                // be judged against it.
                self.ordered(min, max, false);
            } else {
                self.ordered(min, initial, false);
                self.ordered(initial, max, false);
            }
        }

        self.finite("camera.panningSensibility", cam.panning_sensibility);

        let wheel = cam.wheel_delta_percentage;
        if self.finite("camera.wheelDeltaPercentage", wheel) && !(wheel > 0.0 && wheel <= 1.0) {
            self.range(
                vec!["camera.wheelDeltaPercentage".to_string()],
                Rule::UnitStep,
                format!("camera.wheelDeltaPercentage is {}", wheel),
            );
        }

        let lower = ("camera.lowerBetaLimit", cam.lower_beta_limit);
        let upper = ("camera.upperBetaLimit", cam.upper_beta_limit);
        self.non_negative(lower.0, lower.1);
        let upper_ok = self.finite(upper.0, upper.1);
        if upper_ok && upper.1 > PI {
            self.range(
                vec![upper.0.to_string()],
                Rule::AtMost { max: PI },
                format!("{} is {}", upper.0, upper.1),
            );
        }
        if lower.1.is_finite() && upper_ok {
            self.ordered(lower, upper, true);
        }

        self.positive("camera.moveSpeed", cam.move_speed);
        self.non_negative("camera.edgeScrollThreshold", cam.edge_scroll_threshold);
    }

    fn check_building(&mut self, id: PlacementId, building: &BuildingPlacement) {
        self.positive(&id.field("size.width"), building.size.width);
        self.positive(&id.field("size.depth"), building.size.depth);
        self.positive(&id.field("size.height"), building.size.height);
        self.color(id.field("highlightColor"), &building.highlight_color);
        self.model_name(id, &building.model_name);
        self.transform(id, &building.transform);
    }

    fn check_animated_model(&mut self, id: PlacementId, model: &AnimatedModelPlacement) {
        self.model_name(id, &model.model_name);
        self.transform(id, &model.transform);

        self.finite(&id.field("animationSpeed"), model.animation_speed);

        let Some(path) = &model.path else {
            return;
        };

        let duration_field = id.field("path.duration");
        if !path.points.is_empty()
            && self.finite(&duration_field, path.duration)
            && path.duration <= 0.0
        {
            self.range(
                vec![duration_field],
                Rule::Positive,
                format!("path with {} point(s) has duration {}", path.points.len(), path.duration),
            );
        }

        for (i, point) in path.points.iter().enumerate() {
            if !point.position.is_finite() || !point.rotation.is_finite() {
                self.push(
                    ViolationKind::SchemaViolation,
                    vec![id.field(&format!("path.points[{}]", i))],
                    Rule::Finite,
                    format!("waypoint {} has a non-finite component", i),
                );
            }
        }

        if model.is_moving && path.looping && !model.loop_animation {
            self.push(
                ViolationKind::ConsistencyWarning,
                vec![id.field("loopAnimation"), id.field("path.loop")],
                Rule::LoopingPathWithoutLoopingClip,
                format!(
                    "{} keeps looping its path but '{}' plays only once",
                    id, model.animation_name
                ),
            );
        }
    }
}
