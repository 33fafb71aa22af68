use super::prelude::*;

pub const DEFAULT_CAPTURE_THRESHOLD: usize = 50;

/// Appearance of a single highlight circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleStyle {
    /// Radius in meters
    pub radius: f64,
    pub color: Color,
    pub fill_color: Color,
    pub fill_opacity: f64,
}

/// Two concentric circles around a location.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightStyle {
    pub inner: CircleStyle,
    pub outer: CircleStyle,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            inner: CircleStyle {
                radius: 200.0,
                color: Color::Red,
                fill_color: Color::Red,
                fill_opacity: 0.3,
            },
            outer: CircleStyle {
                radius: 500.0,
                color: Color::Orange,
                fill_color: Color::Orange,
                fill_opacity: 0.2,
            },
        }
    }
}

pub fn address_marker(pos: MapPoint, resolution: &Resolution) -> Marker {
    let text = format!("Address: {}", resolution.address_or_not_found());
    Marker {
        pos,
        popup: Some(Popup::new(text)),
        color: None,
    }
}

pub fn highlight_circles(pos: MapPoint, style: &HighlightStyle) -> [Circle; 2] {
    let circle = |s: &CircleStyle| Circle {
        pos,
        radius: s.radius,
        color: s.color,
        fill_color: s.fill_color,
        fill_opacity: s.fill_opacity,
    };
    [circle(&style.inner), circle(&style.outer)]
}

/// Zones with more captures than the threshold are red.
pub fn zone_captures_marker(captures: &ZoneCaptures, threshold: usize) -> Marker {
    let ZoneCaptures {
        zone,
        total,
        per_year,
    } = captures;
    let mut lines = vec![
        format!("Zone: {}", zone.name),
        format!("Total Captures: {total}"),
    ];
    lines.extend(per_year.iter().map(|(year, n)| format!("{year}: {n}")));
    let color = if *total > threshold {
        Color::Red
    } else {
        Color::Blue
    };
    Marker {
        pos: zone.pos,
        popup: Some(Popup::with_lines(lines)),
        color: Some(color),
    }
}

pub fn add_address_marker(map: &mut MapDocument, pos: MapPoint, resolution: &Resolution) {
    map.add(address_marker(pos, resolution));
}

pub fn add_highlight_circles(map: &mut MapDocument, pos: MapPoint, style: &HighlightStyle) {
    for circle in highlight_circles(pos, style) {
        map.add(circle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn marker_with_resolved_address() {
        let pos = MapPoint::from_lat_lng_deg(-12.46, 130.84);
        let marker = address_marker(pos, &Resolution::Resolved("123 Example Rd".into()));
        assert_eq!(pos, marker.pos);
        let popup = marker.popup.unwrap();
        assert_eq!(vec!["Address: 123 Example Rd".to_string()], popup.lines);
        assert_eq!(300, popup.max_width);
        assert!(marker.color.is_none());
    }

    #[test]
    fn marker_without_address() {
        let pos = MapPoint::from_lat_lng_deg(0.0, 0.0);
        let marker = address_marker(pos, &Resolution::Unavailable);
        assert_eq!(
            vec!["Address: Address not found".to_string()],
            marker.popup.unwrap().lines
        );
    }

    #[test]
    fn two_concentric_circles() {
        let pos = MapPoint::from_lat_lng_deg(-12.0, 131.0);
        let mut map = MapDocument::new(MapPoint::from_lat_lng_deg(0.0, 0.0), 2);
        add_highlight_circles(&mut map, pos, &HighlightStyle::default());
        assert_eq!(2, map.len());
        match (&map.annotations()[0], &map.annotations()[1]) {
            (Annotation::Circle(inner), Annotation::Circle(outer)) => {
                assert_eq!(pos, inner.pos);
                assert_eq!(pos, outer.pos);
                assert_eq!(200.0, inner.radius);
                assert_eq!(Color::Red, inner.fill_color);
                assert_eq!(0.3, inner.fill_opacity);
                assert_eq!(500.0, outer.radius);
                assert_eq!(Color::Orange, outer.color);
                assert_eq!(0.2, outer.fill_opacity);
            }
            _ => panic!("Expected two circles"),
        }
    }

    #[test]
    fn color_zone_marker_by_number_of_captures() {
        let zone = Zone {
            name: "Shoal Bay".into(),
            pos: MapPoint::from_lat_lng_deg(-12.8456, 131.387),
        };
        let mut captures = ZoneCaptures {
            zone,
            total: 50,
            per_year: BTreeMap::from([(2020, 20), (2021, 30)]),
        };
        let marker = zone_captures_marker(&captures, DEFAULT_CAPTURE_THRESHOLD);
        assert_eq!(Some(Color::Blue), marker.color);
        assert_eq!(
            vec![
                "Zone: Shoal Bay".to_string(),
                "Total Captures: 50".to_string(),
                "2020: 20".to_string(),
                "2021: 30".to_string(),
            ],
            marker.popup.unwrap().lines
        );
        captures.total = 51;
        let marker = zone_captures_marker(&captures, DEFAULT_CAPTURE_THRESHOLD);
        assert_eq!(Some(Color::Red), marker.color);
    }
}
