use askama::Template;
use crocmap_core::gateways::render::MapRenderer;
use crocmap_entities::map::MapDocument;

pub const DEFAULT_TITLE: &str = "crocmap";

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate<'a> {
    title: &'a str,
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    annotations: &'a str,
}

/// Renders a self-contained HTML page with a Leaflet map.
#[derive(Debug, Clone)]
pub struct LeafletRenderer {
    title: String,
}

impl LeafletRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for LeafletRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

// The JSON is embedded into a <script> element
// that must not be terminated early.
fn annotations_to_script_json(map: &MapDocument) -> serde_json::Result<String> {
    let json = serde_json::to_string(map.annotations())?;
    Ok(json.replace("</", "<\\/"))
}

impl MapRenderer for LeafletRenderer {
    fn render(&self, map: &MapDocument) -> anyhow::Result<String> {
        let annotations = annotations_to_script_json(map)?;
        let center = map.center();
        let html = MapTemplate {
            title: &self.title,
            center_lat: center.lat(),
            center_lng: center.lng(),
            zoom: map.zoom(),
            annotations: &annotations,
        }
        .render()?;
        log::debug!(
            "Rendered {} annotations into {} bytes of HTML",
            map.len(),
            html.len()
        );
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crocmap_entities::{annotation::*, geo::MapPoint};

    fn nt_map() -> MapDocument {
        MapDocument::new(MapPoint::from_lat_lng_deg(-12.4634, 130.8456), 6)
    }

    #[test]
    fn render_view_and_annotations() {
        let mut map = nt_map();
        map.add(Marker {
            pos: MapPoint::from_lat_lng_deg(-12.46, 130.84),
            popup: Some(Popup::new("Address: 123 Example Rd")),
            color: Some(Color::Red),
        });
        let html = LeafletRenderer::new("Crocodile captures").render(&map).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Crocodile captures</title>"));
        assert!(html.contains("setView([-12.4634, 130.8456], 6)"));
        assert!(html.contains(r#""lines":["Address: 123 Example Rd"]"#));
        assert!(html.contains(r#""kind":"marker""#));
        assert!(html.contains(r#""color":"red""#));
    }

    #[test]
    fn escape_title() {
        let html = LeafletRenderer::new("<b>Map</b>")
            .render(&nt_map())
            .unwrap();
        assert!(!html.contains("<b>Map</b>"));
    }

    #[test]
    fn do_not_close_script_from_popup_text() {
        let mut map = nt_map();
        map.add(Marker {
            pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
            popup: Some(Popup::new("</script><script>alert(1)</script>")),
            color: None,
        });
        let html = LeafletRenderer::default().render(&map).unwrap();
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r"<\/script><script>alert(1)<\/script>"));
    }

    #[test]
    fn render_empty_map() {
        let html = LeafletRenderer::default().render(&nt_map()).unwrap();
        assert!(html.contains("const annotations = [];"));
    }
}
