use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BridgeError;
use crate::geometry::path::DEFAULT_SAMPLE_LENGTH;

/// Which collision shape a body gets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Box matching the element's offset size.
    #[default]
    Rectangle,
    /// Ball covering the larger side of the element.
    Circle,
    /// Compound polygon sampled from the element's vector paths.
    #[serde(rename = "svg", alias = "path")]
    Path,
}

/// One axis of the initial position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Coordinate {
    /// Pixel offset from the container's origin.
    Absolute(f64),
    /// Percentage of the container's size on that axis (`50.0` = half).
    Percent(f64),
}

impl FromStr for Coordinate {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || BridgeError::Coordinate(s.to_string());
        match trimmed.strip_suffix('%') {
            Some(number) => number
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .map(Coordinate::Percent)
                .ok_or_else(invalid),
            None => trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Coordinate::Absolute)
                .ok_or_else(invalid),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Absolute(v) => write!(f, "{v}"),
            Coordinate::Percent(p) => write!(f, "{p}%"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoordinate {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawCoordinate::deserialize(deserializer)? {
            RawCoordinate::Number(v) => Ok(Coordinate::Absolute(v)),
            RawCoordinate::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Coordinate::Absolute(v) => serializer.serialize_f64(*v),
            Coordinate::Percent(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

/// Chamfer (rounded corner) override.
///
/// Missing in JSON means "keep the default"; an explicit `null` means
/// "no chamfer at all", which is different from a zero radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ChamferOverride {
    #[default]
    Inherit,
    Clear,
    Radius(f64),
}

fn deserialize_chamfer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ChamferOverride, D::Error> {
    Ok(match Option::<f64>::deserialize(deserializer)? {
        Some(radius) => ChamferOverride::Radius(radius),
        None => ChamferOverride::Clear,
    })
}

fn serialize_chamfer<S: Serializer>(value: &ChamferOverride, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        ChamferOverride::Radius(r) => serializer.serialize_some(r),
        _ => serializer.serialize_none(),
    }
}

fn chamfer_is_inherit(value: &ChamferOverride) -> bool {
    matches!(value, ChamferOverride::Inherit)
}

/// Per-instance material overrides; `None` keeps the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialOverrides {
    pub friction: Option<f64>,
    pub restitution: Option<f64>,
    pub density: Option<f64>,
    pub is_static: Option<bool>,
    #[serde(
        deserialize_with = "deserialize_chamfer",
        serialize_with = "serialize_chamfer",
        skip_serializing_if = "chamfer_is_inherit"
    )]
    pub chamfer: ChamferOverride,
}

/// Resolved material handed to the physics engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub friction: f64,
    /// Bounciness (0.0 = no bounce, 1.0 = fully elastic)
    pub restitution: f64,
    /// Mass per square pixel
    pub density: f64,
    pub is_static: bool,
    /// Corner rounding radius; `None` means the engine parameter is omitted
    pub chamfer: Option<f64>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: 0.1,
            restitution: 0.1,
            density: 0.001,
            is_static: false,
            chamfer: None,
        }
    }
}

impl Material {
    /// Apply overrides on top of `self`.
    pub fn merged(&self, overrides: &MaterialOverrides) -> Self {
        Self {
            friction: overrides.friction.unwrap_or(self.friction),
            restitution: overrides.restitution.unwrap_or(self.restitution),
            density: overrides.density.unwrap_or(self.density),
            is_static: overrides.is_static.unwrap_or(self.is_static),
            chamfer: match overrides.chamfer {
                ChamferOverride::Inherit => self.chamfer,
                ChamferOverride::Clear => None,
                ChamferOverride::Radius(r) => Some(r),
            },
        }
    }
}

/// Declarative props of one registered element.
///
/// Replaced wholesale on every registration; never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyProps {
    #[serde(alias = "bodyType")]
    pub shape: ShapeKind,
    #[serde(alias = "matterBodyOptions")]
    pub material: MaterialOverrides,
    #[serde(alias = "isDraggable")]
    pub draggable: bool,
    /// Arc-length step used when sampling vector paths.
    pub sample_length: f64,
    pub x: Option<Coordinate>,
    pub y: Option<Coordinate>,
    /// Initial rotation in degrees.
    pub angle: f64,
}

impl Default for BodyProps {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            material: MaterialOverrides::default(),
            draggable: true,
            sample_length: DEFAULT_SAMPLE_LENGTH,
            x: None,
            y: None,
            angle: 0.0,
        }
    }
}

impl BodyProps {
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| BridgeError::Props(e.to_string()))
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_position(mut self, x: Coordinate, y: Coordinate) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    pub fn with_material(mut self, material: MaterialOverrides) -> Self {
        self.material = material;
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_parses_numbers_and_percentages() {
        assert_eq!("50%".parse::<Coordinate>().unwrap(), Coordinate::Percent(50.0));
        assert_eq!(" 12.5 % ".parse::<Coordinate>().unwrap(), Coordinate::Percent(12.5));
        assert_eq!("120".parse::<Coordinate>().unwrap(), Coordinate::Absolute(120.0));
        assert!("left".parse::<Coordinate>().is_err());
        assert!("%".parse::<Coordinate>().is_err());
    }

    #[test]
    fn props_from_json_uses_defaults() {
        let props = BodyProps::from_json("{}").unwrap();
        assert_eq!(props, BodyProps::default());
        assert!(props.draggable);
        assert_eq!(props.sample_length, DEFAULT_SAMPLE_LENGTH);
    }

    #[test]
    fn props_from_json_reads_every_field() {
        let json = r#"{
            "bodyType": "svg",
            "matterBodyOptions": { "friction": 0.5, "isStatic": true },
            "isDraggable": false,
            "sampleLength": 4,
            "x": "25%",
            "y": 80,
            "angle": 45
        }"#;
        let props = BodyProps::from_json(json).unwrap();
        assert_eq!(props.shape, ShapeKind::Path);
        assert_eq!(props.material.friction, Some(0.5));
        assert_eq!(props.material.is_static, Some(true));
        assert!(!props.draggable);
        assert_eq!(props.sample_length, 4.0);
        assert_eq!(props.x, Some(Coordinate::Percent(25.0)));
        assert_eq!(props.y, Some(Coordinate::Absolute(80.0)));
        assert_eq!(props.angle, 45.0);
    }

    #[test]
    fn props_from_json_rejects_bad_coordinates() {
        let err = BodyProps::from_json(r#"{ "x": "middle" }"#).unwrap_err();
        assert!(matches!(err, BridgeError::Props(_)));
    }

    #[test]
    fn chamfer_missing_null_and_value_are_distinct() {
        let missing: MaterialOverrides = serde_json::from_str("{}").unwrap();
        let null: MaterialOverrides = serde_json::from_str(r#"{ "chamfer": null }"#).unwrap();
        let radius: MaterialOverrides = serde_json::from_str(r#"{ "chamfer": 6 }"#).unwrap();
        assert_eq!(missing.chamfer, ChamferOverride::Inherit);
        assert_eq!(null.chamfer, ChamferOverride::Clear);
        assert_eq!(radius.chamfer, ChamferOverride::Radius(6.0));
    }

    #[test]
    fn material_merge_applies_overrides() {
        let base = Material { chamfer: Some(4.0), ..Material::default() };

        let merged = base.merged(&MaterialOverrides {
            restitution: Some(0.9),
            ..MaterialOverrides::default()
        });
        assert_eq!(merged.restitution, 0.9);
        assert_eq!(merged.friction, 0.1);
        assert_eq!(merged.chamfer, Some(4.0));

        let cleared = base.merged(&MaterialOverrides {
            chamfer: ChamferOverride::Clear,
            ..MaterialOverrides::default()
        });
        assert_eq!(cleared.chamfer, None);
    }
}
