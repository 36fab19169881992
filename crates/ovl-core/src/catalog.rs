//! Widget-type metadata catalog.
//!
//! The catalog is supplied once per editing session and is read-only to
//! the editor core: it drives palette contents, default property values,
//! and geometry fallbacks. `builtin()` carries the stock overlay widget
//! set; hosts may extend it with backend-gated types via `insert`.

use crate::model::PropertyValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Property schema ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Number,
    String,
    Boolean,
    Color,
    Select,
    Metric,
    Units,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetCategory {
    Text,
    Metrics,
    Maps,
    Gauges,
    Charts,
    Indicators,
    Containers,
}

/// Validation constraints for a single property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<PropertyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub constraints: PropertyConstraints,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    pub category: String,
}

impl PropertyDef {
    fn new(name: &str, label: &str, kind: PropertyType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            description: None,
            constraints: PropertyConstraints::default(),
            options: Vec::new(),
            category: "General".into(),
        }
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, PropertyType::Number)
    }

    pub fn string(name: &str, label: &str) -> Self {
        Self::new(name, label, PropertyType::String)
    }

    pub fn boolean(name: &str, label: &str) -> Self {
        Self::new(name, label, PropertyType::Boolean)
    }

    pub fn color(name: &str, label: &str) -> Self {
        Self::new(name, label, PropertyType::Color)
    }

    pub fn select(name: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self::new(name, label, PropertyType::Select).options(options)
    }

    /// A metric selector, pre-populated with the telemetry metric list.
    pub fn metric(name: &str, label: &str) -> Self {
        Self::new(name, label, PropertyType::Metric).options(METRICS)
    }

    /// A unit selector, pre-populated with the converter unit list.
    pub fn units(name: &str, label: &str) -> Self {
        Self::new(name, label, PropertyType::Units).options(UNITS)
    }

    pub fn options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(value, label)| SelectOption {
                value: (*value).into(),
                label: (*label).into(),
            })
            .collect();
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.constraints.min = Some(min);
        self.constraints.max = Some(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.constraints.step = Some(step);
        self
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<PropertyValue>) -> Self {
        self.constraints.default = Some(value.into());
        self
    }

    pub fn describe(mut self, text: &str) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.into();
        self
    }
}

// ─── Widget metadata ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub category: WidgetCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub default_width: u32,
    pub default_height: u32,
    #[serde(default)]
    pub is_container: bool,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
}

impl WidgetMetadata {
    fn new(
        kind: &str,
        name: &str,
        description: &str,
        category: WidgetCategory,
        icon: &str,
        default_width: u32,
        default_height: u32,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            description: description.into(),
            category,
            icon: Some(icon.into()),
            default_width,
            default_height,
            is_container: false,
            properties: Vec::new(),
        }
    }

    fn container(mut self) -> Self {
        self.is_container = true;
        self
    }

    fn props(mut self, properties: Vec<PropertyDef>) -> Self {
        self.properties = properties;
        self
    }
}

/// Widget types whose single `size` property denotes a square bounding
/// box rather than a font size.
pub const SQUARE_SIZED: &[&str] = &[
    "moving_map",
    "journey_map",
    "moving_journey_map",
    "circuit_map",
    "compass",
    "compass_arrow",
    "asi",
    "msi",
    "gps_lock_icon",
    "icon",
];

/// Telemetry metrics selectable on data-driven widgets.
pub const METRICS: &[(&str, &str)] = &[
    ("speed", "Speed"),
    ("cspeed", "Calculated Speed"),
    ("alt", "Altitude"),
    ("hr", "Heart Rate"),
    ("cadence", "Cadence"),
    ("power", "Power"),
    ("temp", "Temperature"),
    ("gradient", "Gradient"),
    ("cgrad", "Calculated Gradient"),
    ("azi", "Azimuth"),
    ("cog", "Course Over Ground"),
    ("odo", "Odometer"),
    ("codo", "Calculated Odometer"),
    ("dist", "Distance"),
    ("accel", "Acceleration"),
    ("accl.x", "Acceleration X"),
    ("accl.y", "Acceleration Y"),
    ("accl.z", "Acceleration Z"),
    ("grav.x", "Gravity X"),
    ("grav.y", "Gravity Y"),
    ("grav.z", "Gravity Z"),
    ("ori.pitch", "Orientation Pitch"),
    ("ori.roll", "Orientation Roll"),
    ("ori.yaw", "Orientation Yaw"),
    ("lat", "Latitude"),
    ("lon", "Longitude"),
    ("gps-dop", "GPS DOP"),
    ("gps-lock", "GPS Lock"),
    ("respiration", "Respiration"),
    ("gear.front", "Gear Front"),
    ("gear.rear", "Gear Rear"),
];

/// Display units understood by the overlay converters.
pub const UNITS: &[(&str, &str)] = &[
    ("none", "None"),
    ("mph", "mph"),
    ("kph", "km/h"),
    ("knots", "Knots"),
    ("speed", "Speed (user setting)"),
    ("pace", "Pace"),
    ("pace_mile", "Pace (mile)"),
    ("pace_km", "Pace (km)"),
    ("metres", "Metres"),
    ("feet", "Feet"),
    ("miles", "Miles"),
    ("altitude", "Altitude (user setting)"),
    ("distance", "Distance (user setting)"),
    ("G", "G-force"),
    ("temp", "Temperature (user setting)"),
];

/// Common text styling properties shared by label-like widgets.
fn text_props() -> Vec<PropertyDef> {
    vec![
        PropertyDef::number("size", "Font Size")
            .range(8.0, 500.0)
            .default_value(16)
            .category("Appearance"),
        PropertyDef::color("rgb", "Text Color")
            .default_value("255,255,255")
            .category("Appearance"),
        PropertyDef::color("outline", "Outline Color")
            .default_value("0,0,0")
            .category("Appearance"),
        PropertyDef::number("outline_width", "Outline Width")
            .range(0.0, 20.0)
            .default_value(2)
            .category("Appearance"),
        PropertyDef::select(
            "align",
            "Alignment",
            &[("left", "Left"), ("centre", "Center"), ("right", "Right")],
        )
        .default_value("left")
        .category("Appearance"),
    ]
}

// ─── Catalog ─────────────────────────────────────────────────────────────

/// Lookup table of widget-type metadata, keyed by type name.
#[derive(Debug, Clone, Default)]
pub struct WidgetCatalog {
    types: HashMap<String, WidgetMetadata>,
}

impl WidgetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, meta: WidgetMetadata) {
        self.types.insert(meta.kind.clone(), meta);
    }

    pub fn get(&self, kind: &str) -> Option<&WidgetMetadata> {
        self.types.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.types.contains_key(kind)
    }

    pub fn is_container(&self, kind: &str) -> bool {
        self.get(kind).is_some_and(|m| m.is_container)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Default property values for a widget type, drawn from each
    /// property's declared default. Position is a first-class widget
    /// field, so `x`/`y` never appear here.
    pub fn default_properties(&self, kind: &str) -> HashMap<String, PropertyValue> {
        let Some(meta) = self.get(kind) else {
            return HashMap::new();
        };
        meta.properties
            .iter()
            .filter_map(|p| {
                p.constraints
                    .default
                    .clone()
                    .map(|value| (p.name.clone(), value))
            })
            .collect()
    }

    /// The stock overlay widget registry.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.insert(
            WidgetMetadata::new("text", "Text", "Static text label", WidgetCategory::Text, "T", 150, 30)
                .props(
                    [
                        vec![
                            PropertyDef::string("value", "Text Content")
                                .required()
                                .default_value("Text")
                                .category("Content"),
                        ],
                        text_props(),
                        vec![
                            PropertyDef::select(
                                "direction",
                                "Direction",
                                &[("ltr", "Left to Right"), ("ttb", "Top to Bottom")],
                            )
                            .default_value("ltr")
                            .category("Appearance"),
                        ],
                    ]
                    .concat(),
                ),
        );

        catalog.insert(
            WidgetMetadata::new(
                "metric",
                "Metric Value",
                "Display a telemetry value (speed, altitude, etc.)",
                WidgetCategory::Metrics,
                "M",
                120,
                40,
            )
            .props(
                [
                    vec![
                        PropertyDef::metric("metric", "Metric")
                            .required()
                            .default_value("speed")
                            .category("Data"),
                        PropertyDef::units("units", "Units")
                            .default_value("kph")
                            .category("Data"),
                        PropertyDef::number("dp", "Decimal Places")
                            .range(0.0, 5.0)
                            .default_value(1)
                            .category("Data"),
                    ],
                    text_props(),
                ]
                .concat(),
            ),
        );

        catalog.insert(
            WidgetMetadata::new(
                "metric_unit",
                "Metric Unit Label",
                "Display the unit label for a metric",
                WidgetCategory::Metrics,
                "U",
                60,
                20,
            )
            .props(
                [
                    vec![
                        PropertyDef::metric("metric", "Metric")
                            .required()
                            .default_value("speed")
                            .category("Data"),
                        PropertyDef::units("units", "Units")
                            .default_value("kph")
                            .category("Data"),
                    ],
                    text_props(),
                ]
                .concat(),
            ),
        );

        catalog.insert(
            WidgetMetadata::new(
                "datetime",
                "Date/Time",
                "Display date and time from video",
                WidgetCategory::Text,
                "D",
                200,
                30,
            )
            .props(
                [
                    vec![
                        PropertyDef::string("format", "Format")
                            .describe("strftime format string")
                            .required()
                            .default_value("%Y-%m-%d %H:%M:%S")
                            .category("Data"),
                        PropertyDef::number("truncate", "Truncate")
                            .describe("Characters to remove from end")
                            .min(0.0)
                            .default_value(0)
                            .category("Data"),
                    ],
                    text_props(),
                ]
                .concat(),
            ),
        );

        catalog.insert(
            WidgetMetadata::new("icon", "Icon", "Display an image icon", WidgetCategory::Text, "I", 64, 64)
                .props(vec![
                    PropertyDef::string("file", "Icon File")
                        .required()
                        .default_value("default.png")
                        .category("Content"),
                    PropertyDef::number("size", "Size")
                        .range(8.0, 512.0)
                        .default_value(64)
                        .category("Appearance"),
                    PropertyDef::boolean("invert", "Invert Colors")
                        .default_value(true)
                        .category("Appearance"),
                ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "moving_map",
                "Moving Map",
                "Map that follows current location",
                WidgetCategory::Maps,
                "MAP",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Map Size")
                    .range(64.0, 1024.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::number("zoom", "Zoom Level")
                    .describe("1-5: continents, 10-12: cities, 14-16: streets, 19: maximum detail")
                    .range(1.0, 19.0)
                    .default_value(16)
                    .category("Appearance"),
                PropertyDef::number("corner_radius", "Corner Radius")
                    .range(0.0, 128.0)
                    .default_value(0)
                    .category("Appearance"),
                PropertyDef::number("opacity", "Opacity")
                    .range(0.0, 1.0)
                    .step(0.1)
                    .default_value(0.7)
                    .category("Appearance"),
                PropertyDef::boolean("rotate", "Rotate Map")
                    .default_value(true)
                    .category("Behavior"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "journey_map",
                "Journey Map",
                "Map showing the entire route",
                WidgetCategory::Maps,
                "JM",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Map Size")
                    .range(64.0, 1024.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::number("corner_radius", "Corner Radius")
                    .range(0.0, 128.0)
                    .default_value(0)
                    .category("Appearance"),
                PropertyDef::number("opacity", "Opacity")
                    .range(0.0, 1.0)
                    .step(0.1)
                    .default_value(0.7)
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "moving_journey_map",
                "Moving Journey Map",
                "Combined moving and journey map",
                WidgetCategory::Maps,
                "MJM",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Map Size")
                    .range(64.0, 1024.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::number("zoom", "Zoom Level")
                    .range(1.0, 19.0)
                    .default_value(16)
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "circuit_map",
                "Circuit Map",
                "Map showing circuit/track layout",
                WidgetCategory::Maps,
                "CM",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Map Size")
                    .range(64.0, 1024.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::color("fill", "Fill Color")
                    .default_value("255,0,0")
                    .category("Appearance"),
                PropertyDef::color("outline", "Outline Color")
                    .default_value("255,255,255")
                    .category("Appearance"),
                PropertyDef::number("fill_width", "Fill Width")
                    .range(1.0, 20.0)
                    .default_value(4)
                    .category("Appearance"),
                PropertyDef::number("outline_width", "Outline Width")
                    .range(0.0, 20.0)
                    .default_value(0)
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "compass",
                "Compass",
                "Compass with direction indicator",
                WidgetCategory::Gauges,
                "C",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Size")
                    .range(64.0, 512.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::number("textsize", "Text Size")
                    .range(8.0, 100.0)
                    .default_value(16)
                    .category("Appearance"),
                PropertyDef::color("fg", "Foreground Color")
                    .default_value("255,255,255")
                    .category("Appearance"),
                PropertyDef::color("bg", "Background Color").category("Appearance"),
                PropertyDef::color("text", "Text Color")
                    .default_value("255,255,255")
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "compass_arrow",
                "Compass Arrow",
                "Simple arrow compass",
                WidgetCategory::Gauges,
                "CA",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Size")
                    .range(64.0, 512.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::number("textsize", "Text Size")
                    .range(8.0, 100.0)
                    .default_value(32)
                    .category("Appearance"),
                PropertyDef::color("arrow", "Arrow Color")
                    .default_value("255,255,255")
                    .category("Appearance"),
                PropertyDef::color("bg", "Background Color")
                    .default_value("0,0,0,0")
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "bar",
                "Bar Indicator",
                "Horizontal bar for metrics (acceleration, etc.)",
                WidgetCategory::Gauges,
                "B",
                400,
                30,
            )
            .props(vec![
                PropertyDef::number("width", "Width")
                    .range(50.0, 1000.0)
                    .default_value(400)
                    .category("Size"),
                PropertyDef::number("height", "Height")
                    .range(10.0, 200.0)
                    .default_value(30)
                    .category("Size"),
                PropertyDef::metric("metric", "Metric")
                    .required()
                    .default_value("accel")
                    .category("Data"),
                PropertyDef::units("units", "Units")
                    .default_value("G")
                    .category("Data"),
                PropertyDef::number("min", "Min Value")
                    .default_value(-20)
                    .category("Data"),
                PropertyDef::number("max", "Max Value")
                    .default_value(20)
                    .category("Data"),
                PropertyDef::color("fill", "Fill Color")
                    .default_value("255,255,255,0")
                    .category("Appearance"),
                PropertyDef::color("bar", "Bar Color")
                    .default_value("255,255,255")
                    .category("Appearance"),
                PropertyDef::color("outline", "Outline Color")
                    .default_value("255,255,255")
                    .category("Appearance"),
                PropertyDef::number("cr", "Corner Radius")
                    .range(0.0, 50.0)
                    .default_value(5)
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "zone_bar",
                "Zone Bar",
                "Gradient bar with zones (HR zones, etc.)",
                WidgetCategory::Gauges,
                "ZB",
                400,
                30,
            )
            .props(vec![
                PropertyDef::number("width", "Width")
                    .range(50.0, 1000.0)
                    .default_value(400)
                    .category("Size"),
                PropertyDef::number("height", "Height")
                    .range(10.0, 200.0)
                    .default_value(30)
                    .category("Size"),
                PropertyDef::metric("metric", "Metric")
                    .required()
                    .default_value("hr")
                    .category("Data"),
                PropertyDef::number("min", "Min Value")
                    .default_value(0)
                    .category("Data"),
                PropertyDef::number("max", "Max Value")
                    .default_value(400)
                    .category("Data"),
                PropertyDef::number("z1", "Zone 1 Threshold")
                    .default_value(120)
                    .category("Zones"),
                PropertyDef::number("z2", "Zone 2 Threshold")
                    .default_value(160)
                    .category("Zones"),
                PropertyDef::number("z3", "Zone 3 Threshold")
                    .default_value(200)
                    .category("Zones"),
                PropertyDef::color("z0-rgb", "Zone 0 Color")
                    .default_value("255,255,255")
                    .category("Zones"),
                PropertyDef::color("z1-rgb", "Zone 1 Color")
                    .default_value("67,235,52")
                    .category("Zones"),
                PropertyDef::color("z2-rgb", "Zone 2 Color")
                    .default_value("240,232,19")
                    .category("Zones"),
                PropertyDef::color("z3-rgb", "Zone 3 Color")
                    .default_value("207,19,2")
                    .category("Zones"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "chart",
                "Chart",
                "Time-series chart for a metric",
                WidgetCategory::Charts,
                "CH",
                256,
                64,
            )
            .props(vec![
                PropertyDef::metric("metric", "Metric")
                    .default_value("alt")
                    .category("Data"),
                PropertyDef::units("units", "Units")
                    .default_value("metres")
                    .category("Data"),
                PropertyDef::number("seconds", "Time Window (seconds)")
                    .range(10.0, 3600.0)
                    .default_value(300)
                    .category("Data"),
                PropertyDef::number("samples", "Samples")
                    .range(10.0, 1000.0)
                    .default_value(256)
                    .category("Data"),
                PropertyDef::number("height", "Height")
                    .range(20.0, 500.0)
                    .default_value(64)
                    .category("Size"),
                PropertyDef::number("textsize", "Text Size")
                    .range(8.0, 50.0)
                    .default_value(16)
                    .category("Appearance"),
                PropertyDef::boolean("filled", "Filled")
                    .default_value(true)
                    .category("Appearance"),
                PropertyDef::boolean("values", "Show Values")
                    .default_value(true)
                    .category("Appearance"),
                PropertyDef::color("bg", "Background Color")
                    .default_value("0,0,0,170")
                    .category("Appearance"),
                PropertyDef::color("fill", "Fill Color")
                    .default_value("91,113,146,170")
                    .category("Appearance"),
                PropertyDef::color("line", "Line Color")
                    .default_value("255,255,255,170")
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "asi",
                "Airspeed Indicator",
                "Aviation-style airspeed indicator",
                WidgetCategory::Gauges,
                "ASI",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Size")
                    .range(64.0, 512.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::metric("metric", "Metric")
                    .default_value("speed")
                    .category("Data"),
                PropertyDef::units("units", "Units")
                    .default_value("knots")
                    .category("Data"),
                PropertyDef::number("vs0", "Vs0").default_value(40).category("Speeds"),
                PropertyDef::number("vs", "Vs").default_value(46).category("Speeds"),
                PropertyDef::number("vfe", "Vfe").default_value(103).category("Speeds"),
                PropertyDef::number("vno", "Vno").default_value(126).category("Speeds"),
                PropertyDef::number("vne", "Vne").default_value(180).category("Speeds"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "msi",
                "Motor Speed Indicator",
                "Motor/speedometer style gauge",
                WidgetCategory::Gauges,
                "MSI",
                256,
                256,
            )
            .props(vec![
                PropertyDef::number("size", "Size")
                    .range(64.0, 512.0)
                    .default_value(256)
                    .category("Appearance"),
                PropertyDef::metric("metric", "Metric")
                    .default_value("speed")
                    .category("Data"),
                PropertyDef::units("units", "Units")
                    .default_value("kph")
                    .category("Data"),
                PropertyDef::number("textsize", "Text Size")
                    .range(8.0, 100.0)
                    .default_value(16)
                    .category("Appearance"),
                PropertyDef::boolean("needle", "Show Needle")
                    .default_value(true)
                    .category("Appearance"),
                PropertyDef::number("green", "Green Zone Start")
                    .default_value(0)
                    .category("Zones"),
                PropertyDef::number("yellow", "Yellow Zone Start")
                    .default_value(130)
                    .category("Zones"),
                PropertyDef::number("end", "Scale End")
                    .default_value(180)
                    .category("Zones"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "gps_lock_icon",
                "GPS Lock Icon",
                "Icon showing GPS signal status",
                WidgetCategory::Indicators,
                "GPS",
                64,
                64,
            )
            .props(vec![
                PropertyDef::number("size", "Size")
                    .range(16.0, 256.0)
                    .default_value(64)
                    .category("Appearance"),
            ]),
        );

        catalog.insert(
            WidgetMetadata::new(
                "composite",
                "Composite",
                "Container for grouping widgets",
                WidgetCategory::Containers,
                "[]",
                200,
                100,
            )
            .container(),
        );

        catalog.insert(
            WidgetMetadata::new(
                "translate",
                "Translate",
                "Container with position offset",
                WidgetCategory::Containers,
                "->",
                200,
                100,
            )
            .container(),
        );

        catalog.insert(
            WidgetMetadata::new(
                "frame",
                "Frame",
                "Styled container with background",
                WidgetCategory::Containers,
                "[F]",
                300,
                200,
            )
            .container()
            .props(vec![
                PropertyDef::number("width", "Width")
                    .min(10.0)
                    .required()
                    .default_value(300)
                    .category("Size"),
                PropertyDef::number("height", "Height")
                    .min(10.0)
                    .required()
                    .default_value(200)
                    .category("Size"),
                PropertyDef::color("bg", "Background Color").category("Appearance"),
                PropertyDef::color("outline", "Outline Color").category("Appearance"),
                PropertyDef::number("cr", "Corner Radius")
                    .range(0.0, 100.0)
                    .default_value(0)
                    .category("Appearance"),
                PropertyDef::number("opacity", "Opacity")
                    .range(0.0, 1.0)
                    .step(0.1)
                    .default_value(1.0)
                    .category("Appearance"),
                PropertyDef::number("fo", "Fade Out")
                    .range(0.0, 100.0)
                    .default_value(0)
                    .category("Appearance"),
            ]),
        );

        catalog
    }
}
