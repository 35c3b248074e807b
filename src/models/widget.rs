//! Widget, column and widget type definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::engine::PlacementError;

/// One of the three fixed placement buckets of the designer UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Left column
    Left,
    /// Center column
    Center,
    /// Right column
    Right,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Returns the lowercase tag used in JSON and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(PlacementError::UnknownColumn(s.to_string())),
        }
    }
}

/// Closed set of panel types the designer knows how to render.
///
/// Tags that are not recognised when reading a stored layout deserialize to
/// [`WidgetType::Unknown`], so snapshots written by newer builds still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    /// List of designs the user has stored
    SavedDesigns,
    /// Ready-made button styles
    PresetGallery,
    /// Undo history of design edits
    DesignHistory,
    /// Live button preview
    LivePreview,
    /// Generated CSS with copy button
    CssOutput,
    /// Label text, font and color
    TextControls,
    /// Background gradient stops and angle
    BackgroundGradient,
    /// Gradient applied to the border
    BorderGradient,
    /// Border width, style and radius
    BorderControls,
    /// Box shadow layers
    BoxShadow,
    /// Text shadow
    TextShadow,
    /// Width and height
    Dimensions,
    /// Padding and margin
    Spacing,
    /// Hover state overrides
    HoverEffects,
    /// Depth, perspective and press effects
    ThreeDEffects,
    /// Transition and keyframe settings
    AnimationControls,
    /// Any tag this build does not know about
    #[serde(other)]
    Unknown,
}

impl WidgetType {
    /// Every type that can be placed in a layout, in default layout order.
    pub const BUILT_IN: [Self; 16] = [
        Self::SavedDesigns,
        Self::PresetGallery,
        Self::DesignHistory,
        Self::LivePreview,
        Self::CssOutput,
        Self::TextControls,
        Self::BackgroundGradient,
        Self::BorderGradient,
        Self::BorderControls,
        Self::BoxShadow,
        Self::TextShadow,
        Self::Dimensions,
        Self::Spacing,
        Self::HoverEffects,
        Self::ThreeDEffects,
        Self::AnimationControls,
    ];

    /// Returns the kebab-case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SavedDesigns => "saved-designs",
            Self::PresetGallery => "preset-gallery",
            Self::DesignHistory => "design-history",
            Self::LivePreview => "live-preview",
            Self::CssOutput => "css-output",
            Self::TextControls => "text-controls",
            Self::BackgroundGradient => "background-gradient",
            Self::BorderGradient => "border-gradient",
            Self::BorderControls => "border-controls",
            Self::BoxShadow => "box-shadow",
            Self::TextShadow => "text-shadow",
            Self::Dimensions => "dimensions",
            Self::Spacing => "spacing",
            Self::HoverEffects => "hover-effects",
            Self::ThreeDEffects => "three-d-effects",
            Self::AnimationControls => "animation-controls",
            Self::Unknown => "unknown",
        }
    }

    /// Default panel title.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::SavedDesigns => "Saved Designs",
            Self::PresetGallery => "Presets",
            Self::DesignHistory => "History",
            Self::LivePreview => "Live Preview",
            Self::CssOutput => "CSS Output",
            Self::TextControls => "Text",
            Self::BackgroundGradient => "Background Gradient",
            Self::BorderGradient => "Border Gradient",
            Self::BorderControls => "Border",
            Self::BoxShadow => "Box Shadow",
            Self::TextShadow => "Text Shadow",
            Self::Dimensions => "Dimensions",
            Self::Spacing => "Spacing",
            Self::HoverEffects => "Hover Effects",
            Self::ThreeDEffects => "3D Effects",
            Self::AnimationControls => "Animation",
            Self::Unknown => "Unknown Widget",
        }
    }

    /// Default panel description.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::SavedDesigns => "Load and manage your saved button designs",
            Self::PresetGallery => "Start from a ready-made button style",
            Self::DesignHistory => "Step back through recent changes",
            Self::LivePreview => "See the button as you edit it",
            Self::CssOutput => "Copy the generated CSS",
            Self::TextControls => "Label, font family, size and color",
            Self::BackgroundGradient => "Gradient type, angle and color stops",
            Self::BorderGradient => "Gradient painted along the border",
            Self::BorderControls => "Border width, style and radius",
            Self::BoxShadow => "Outer and inset shadows",
            Self::TextShadow => "Shadow behind the label text",
            Self::Dimensions => "Button width and height",
            Self::Spacing => "Padding and margin",
            Self::HoverEffects => "Styles applied on hover",
            Self::ThreeDEffects => "Depth, perspective and pressed state",
            Self::AnimationControls => "Transitions and keyframe animation",
            Self::Unknown => "This widget type is not supported by this version",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetType {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::BUILT_IN
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| PlacementError::UnsupportedType(s.to_string()))
    }
}

/// A placeable, collapsible, enable-able panel of the designer UI.
///
/// `column` and `order` mirror the widget's position inside
/// [`Columns`](crate::models::Columns); the placement engine keeps them in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Unique identifier
    pub id: String,
    /// Panel type
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    /// Header text
    pub title: String,
    /// Short help text
    #[serde(default)]
    pub description: String,
    /// Column holding the widget
    pub column: Column,
    /// Rank within the column (0-based, contiguous)
    pub order: usize,
    /// Whether the panel is shown at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether only the header is shown
    #[serde(default)]
    pub collapsed: bool,
    /// Opaque per-widget settings
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_props: BTreeMap<String, Value>,
}

const fn default_true() -> bool {
    true
}

impl Widget {
    /// Creates an enabled, expanded widget with the type's default texts.
    pub fn new(id: impl Into<String>, widget_type: WidgetType, column: Column, order: usize) -> Self {
        Self {
            id: id.into(),
            widget_type,
            title: widget_type.default_title().to_string(),
            description: widget_type.default_description().to_string(),
            column,
            order,
            enabled: true,
            collapsed: false,
            custom_props: BTreeMap::new(),
        }
    }

    /// Creates a widget with a freshly generated id (`<type>-<uuid>`).
    pub fn with_generated_id(widget_type: WidgetType, column: Column, order: usize) -> Self {
        let id = format!("{}-{}", widget_type.as_str(), Uuid::new_v4());
        Self::new(id, widget_type, column, order)
    }

    /// Sets a custom property.
    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_props.insert(key.into(), value);
        self
    }
}
