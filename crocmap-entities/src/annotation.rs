use crate::geo::MapPoint;
use serde::Serialize;
use strum::{Display, EnumString};

pub const DEFAULT_POPUP_MAX_WIDTH: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Gray,
    Black,
}

/// Text shown when an annotation is clicked.
///
/// Every line is displayed as plain text, i.e. no markup
/// is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub lines: Vec<String>,
    pub max_width: u32,
}

impl Popup {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_lines(vec![text.into()])
    }

    pub fn with_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            max_width: DEFAULT_POPUP_MAX_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub pos: MapPoint,
    pub popup: Option<Popup>,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub pos: MapPoint,
    /// Radius in meters
    pub radius: f64,
    pub color: Color,
    pub fill_color: Color,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Annotation {
    Marker(Marker),
    Circle(Circle),
}

impl Annotation {
    pub fn pos(&self) -> MapPoint {
        match self {
            Self::Marker(m) => m.pos,
            Self::Circle(c) => c.pos,
        }
    }
}

impl From<Marker> for Annotation {
    fn from(from: Marker) -> Self {
        Self::Marker(from)
    }
}

impl From<Circle> for Annotation {
    fn from(from: Circle) -> Self {
        Self::Circle(from)
    }
}
