use crate::ui::components::*;
use bevy::color::Color;
use bevy::prelude::*;

#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }

    pub fn with_max_width(mut self, width: f32) -> Self {
        self.node.max_width = Val::Px(width);
        self
    }
}

/// Rounded call-to-action button with hover and press colors.
#[derive(Bundle)]
pub struct CtaButtonBundle {
    pub button: Button,
    pub node: Node,
    pub background: BackgroundColor,
    pub border_radius: BorderRadius,
    pub interaction: Interaction,
    pub ui_button: UIButton,
    pub config: ButtonConfig,
}

impl CtaButtonBundle {
    pub fn new(
        width: f32,
        height: f32,
        normal_color: Color,
        hover_color: Color,
        pressed_color: Color,
    ) -> Self {
        Self {
            button: Button,
            node: Node {
                width: Val::Px(width),
                height: Val::Px(height),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: BackgroundColor(normal_color),
            border_radius: BorderRadius::all(Val::Px(height / 2.0)),
            interaction: Interaction::None,
            ui_button: UIButton,
            config: ButtonConfig {
                normal_color,
                hover_color,
                pressed_color,
            },
        }
    }
}

#[derive(Bundle)]
pub struct PanelBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub border_radius: BorderRadius,
}

impl PanelBundle {
    pub fn new(width: Val, color: Color, radius: f32) -> Self {
        Self {
            node: Node {
                width,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            background: BackgroundColor(color),
            border_radius: BorderRadius::all(Val::Px(radius)),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }
}

#[derive(Bundle)]
pub struct ProgressTrackBundle {
    pub node: Node,
    pub background: BackgroundColor,
    pub border_radius: BorderRadius,
    pub progress: ProgressBar,
}

impl ProgressTrackBundle {
    pub fn new(width: Val, height: f32, color: Color, value: f32) -> Self {
        Self {
            node: Node {
                width,
                height: Val::Px(height),
                overflow: Overflow::clip(),
                ..default()
            },
            background: BackgroundColor(color),
            border_radius: BorderRadius::all(Val::Px(height / 2.0)),
            progress: ProgressBar { value },
        }
    }
}
