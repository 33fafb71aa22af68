use crate::{annotation::Annotation, geo::MapPoint};

/// An append-only collection of annotations
/// together with the initial viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    center: MapPoint,
    zoom: u8,
    annotations: Vec<Annotation>,
}

impl MapDocument {
    pub fn new(center: MapPoint, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            annotations: vec![],
        }
    }

    pub fn add(&mut self, annotation: impl Into<Annotation>) {
        self.annotations.push(annotation.into());
    }

    pub fn center(&self) -> MapPoint {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
