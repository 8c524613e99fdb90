use crate::merge::{add_not_empty, compact_options, soft_update, soft_updates};
use crate::ToJson;
use serde_json::{json, Map, Value};
use std::fmt;

/// Map icon, serialized in full with no compaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub path: String,
    pub size: (u32, u32),
    pub color: String,
}

impl Icon {
    pub fn new(path: &str) -> Icon {
        Icon {
            path: path.to_string(),
            ..Icon::default()
        }
    }
}

impl Default for Icon {
    fn default() -> Icon {
        Icon {
            path: String::new(),
            size: (100, 100),
            color: "black".to_string(),
        }
    }
}

impl ToJson for Icon {
    fn to_json(&self) -> Value {
        json!({
            "path": &self.path,
            "size": { "width": self.size.0, "height": self.size.1 },
            "color": &self.color,
        })
    }
}

/// Small text label shown when hovering a feature.
///
/// Option fields left at `None` stay out of the serialized `options`
/// block entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub text: String,
    pub pane: Option<String>,
    pub attribution: Option<String>,
    pub interactive: Option<bool>,
    pub bubbling_mouse_events: Option<bool>,
    pub offset: Option<(i32, i32)>,
    pub class_name: Option<String>,
    pub direction: Option<String>,
    pub permanent: Option<bool>,
    pub sticky: Option<bool>,
    pub opacity: Option<f64>,
}

impl Tooltip {
    pub fn new(text: &str) -> Tooltip {
        Tooltip {
            text: text.to_string(),
            ..Tooltip::default()
        }
    }
}

impl ToJson for Tooltip {
    fn to_json(&self) -> Value {
        let own = compact_options([
            ("direction", self.direction.as_deref().into()),
            ("permanent", self.permanent.into()),
            ("sticky", self.sticky.into()),
            ("opacity", self.opacity.into()),
        ]);
        let shared = overlay_options(
            self.pane.as_deref(),
            self.attribution.as_deref(),
            self.interactive,
            self.bubbling_mouse_events,
            self.offset,
            self.class_name.as_deref(),
        );
        div_overlay_json(&self.text, soft_update(&shared, &own))
    }
}

/// Dialog bubble opened by clicking a feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Popup {
    pub text: String,
    pub pane: Option<String>,
    pub attribution: Option<String>,
    pub interactive: Option<bool>,
    pub bubbling_mouse_events: Option<bool>,
    pub offset: Option<(i32, i32)>,
    pub class_name: Option<String>,
    pub max_width: Option<u32>,
    pub min_width: Option<u32>,
    pub max_height: Option<u32>,
    pub auto_pan: Option<bool>,
    pub auto_pan_padding_top_left: Option<(i32, i32)>,
    pub auto_pan_padding_bottom_right: Option<(i32, i32)>,
    pub auto_pan_padding: Option<(i32, i32)>,
    pub keep_in_view: Option<bool>,
    pub close_button: Option<bool>,
    pub auto_close: Option<bool>,
    pub close_on_escape_key: Option<bool>,
    pub close_on_click: Option<bool>,
}

impl Popup {
    pub fn new(text: &str) -> Popup {
        Popup {
            text: text.to_string(),
            ..Popup::default()
        }
    }
}

impl ToJson for Popup {
    fn to_json(&self) -> Value {
        let own = compact_options([
            ("maxWidth", self.max_width.into()),
            ("minWidth", self.min_width.into()),
            ("maxHeight", self.max_height.into()),
            ("autoPan", self.auto_pan.into()),
            (
                "autoPanPaddingTopLeft",
                padding_value(self.auto_pan_padding_top_left),
            ),
            (
                "autoPanPaddingBottomRight",
                padding_value(self.auto_pan_padding_bottom_right),
            ),
            ("autoPanPadding", padding_value(self.auto_pan_padding)),
            ("keepInView", self.keep_in_view.into()),
            ("closeButton", self.close_button.into()),
            ("autoClose", self.auto_close.into()),
            ("closeOnEscapeKey", self.close_on_escape_key.into()),
            ("closeOnClick", self.close_on_click.into()),
        ]);
        let shared = overlay_options(
            self.pane.as_deref(),
            self.attribution.as_deref(),
            self.interactive,
            self.bubbling_mouse_events,
            self.offset,
            self.class_name.as_deref(),
        );
        div_overlay_json(&self.text, soft_update(&shared, &own))
    }
}

/// Decoration bundle attached to a feature: icon, tooltip and popup are
/// all optional and serialize independently.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Marker {
    pub icon: Option<Icon>,
    pub tooltip: Option<Tooltip>,
    pub popup: Option<Popup>,
}

impl Marker {
    pub fn new() -> Marker {
        Marker::default()
    }

    pub fn with_icon(mut self, icon: Icon) -> Marker {
        self.icon = Some(icon);
        self
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Marker {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Marker {
        self.popup = Some(popup);
        self
    }
}

impl ToJson for Marker {
    fn to_json(&self) -> Value {
        let mut blocks = Vec::new();
        if let Some(icon) = &self.icon {
            let mut block = Map::new();
            add_not_empty(&mut block, "icon", icon.to_json());
            blocks.push(block);
        }
        if let Some(tooltip) = &self.tooltip {
            let mut block = Map::new();
            add_not_empty(&mut block, "tooltip", tooltip.to_json());
            blocks.push(block);
        }
        if let Some(popup) = &self.popup {
            let mut block = Map::new();
            add_not_empty(&mut block, "popup", popup.to_json());
            blocks.push(block);
        }
        Value::Object(soft_updates(blocks))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

// The option keys shared by every overlay, spelled the way map widgets
// expect them.
fn overlay_options(
    pane: Option<&str>,
    attribution: Option<&str>,
    interactive: Option<bool>,
    bubbling_mouse_events: Option<bool>,
    offset: Option<(i32, i32)>,
    class_name: Option<&str>,
) -> Map<String, Value> {
    compact_options([
        ("pane", pane.into()),
        ("attribution", attribution.into()),
        ("interactive", interactive.into()),
        ("bubblingMouseEvents", bubbling_mouse_events.into()),
        ("offset", offset_value(offset)),
        ("className", class_name.into()),
    ])
}

// `content` is always emitted; `options` only when something survived
// compaction.
fn div_overlay_json(text: &str, options: Map<String, Value>) -> Value {
    let mut obj = Map::new();
    obj.insert("content".to_string(), json!({ "text": text }));
    add_not_empty(&mut obj, "options", Value::Object(options));
    Value::Object(obj)
}

fn offset_value(offset: Option<(i32, i32)>) -> Value {
    match offset {
        Some((x, y)) => json!({ "x": x, "y": y }),
        None => Value::Null,
    }
}

fn padding_value(padding: Option<(i32, i32)>) -> Value {
    match padding {
        Some((x, y)) => json!([x, y]),
        None => Value::Null,
    }
}
