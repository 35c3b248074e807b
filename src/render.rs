//! Render adapter: maps widgets to the control blocks the frontend draws.
//!
//! The frontend owns the actual controls; this module only decides which
//! block each panel gets and which panels are visible, so every client draws
//! the same thing from the same layout.

use serde::Serialize;

use crate::models::{Column, LayoutConfiguration, Widget, WidgetType};

/// Control block shown in a panel body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "kebab-case")]
pub enum ControlBlock {
    /// Saved designs list
    SavedDesignList,
    /// Preset thumbnails
    PresetGrid,
    /// Undo/redo timeline
    HistoryTimeline,
    /// Button preview canvas
    PreviewCanvas,
    /// Read-only CSS with copy action
    CssCode,
    /// Font, size, weight and color inputs
    TextInputs,
    /// Gradient stop editor for the background
    BackgroundGradientEditor,
    /// Gradient stop editor for the border
    BorderGradientEditor,
    /// Border width, style and radius sliders
    BorderInputs,
    /// Shadow layer list for box-shadow
    BoxShadowLayers,
    /// Text shadow offset, blur and color
    TextShadowInputs,
    /// Width and height sliders
    SizeInputs,
    /// Padding and margin sliders
    SpacingInputs,
    /// Hover state overrides
    HoverInputs,
    /// Depth and perspective controls
    DepthInputs,
    /// Transition and animation controls
    AnimationInputs,
    /// Fallback for types this build cannot draw
    Placeholder {
        /// Type tag of the unsupported widget
        type_tag: String,
    },
}

/// Picks the control block for a widget type.
#[must_use]
pub fn control_block_for(widget_type: WidgetType) -> ControlBlock {
    match widget_type {
        WidgetType::SavedDesigns => ControlBlock::SavedDesignList,
        WidgetType::PresetGallery => ControlBlock::PresetGrid,
        WidgetType::DesignHistory => ControlBlock::HistoryTimeline,
        WidgetType::LivePreview => ControlBlock::PreviewCanvas,
        WidgetType::CssOutput => ControlBlock::CssCode,
        WidgetType::TextControls => ControlBlock::TextInputs,
        WidgetType::BackgroundGradient => ControlBlock::BackgroundGradientEditor,
        WidgetType::BorderGradient => ControlBlock::BorderGradientEditor,
        WidgetType::BorderControls => ControlBlock::BorderInputs,
        WidgetType::BoxShadow => ControlBlock::BoxShadowLayers,
        WidgetType::TextShadow => ControlBlock::TextShadowInputs,
        WidgetType::Dimensions => ControlBlock::SizeInputs,
        WidgetType::Spacing => ControlBlock::SpacingInputs,
        WidgetType::HoverEffects => ControlBlock::HoverInputs,
        WidgetType::ThreeDEffects => ControlBlock::DepthInputs,
        WidgetType::AnimationControls => ControlBlock::AnimationInputs,
        WidgetType::Unknown => ControlBlock::Placeholder {
            type_tag: widget_type.as_str().to_string(),
        },
    }
}

/// A visible panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    /// Widget id
    pub widget_id: String,
    /// Header text
    pub title: String,
    /// Whether only the header is drawn
    pub collapsed: bool,
    /// Panel body, `None` while collapsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ControlBlock>,
}

impl PanelView {
    fn from_widget(widget: &Widget) -> Self {
        Self {
            widget_id: widget.id.clone(),
            title: widget.title.clone(),
            collapsed: widget.collapsed,
            body: (!widget.collapsed).then(|| control_block_for(widget.widget_type)),
        }
    }
}

/// One column of the render plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Which column
    pub column: Column,
    /// Width in percent
    pub width: u16,
    /// Enabled panels in display order
    pub panels: Vec<PanelView>,
}

/// What the frontend should draw for a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    /// Left, center and right columns
    pub columns: Vec<ColumnView>,
}

impl RenderPlan {
    /// Gets the view of a column.
    #[must_use]
    pub fn column(&self, column: Column) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.column == column)
    }
}

/// Builds the render plan of a layout. Disabled widgets are left out.
#[must_use]
pub fn render_plan(layout: &LayoutConfiguration) -> RenderPlan {
    let columns = Column::ALL
        .into_iter()
        .map(|column| ColumnView {
            column,
            width: layout.column_widths.get(column),
            panels: layout
                .columns
                .get(column)
                .iter()
                .filter(|w| w.enabled)
                .map(PanelView::from_widget)
                .collect(),
        })
        .collect();

    RenderPlan { columns }
}
