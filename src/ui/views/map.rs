//! Map widget keyed by coordinates.
//!
//! A `MapInstance` is reused only while the `(lat, lon)` key is unchanged.
//! Any coordinate change builds a new instance with a new `instance_id`,
//! so instance-local state such as the pan offset never carries over to a
//! different address.

use std::fmt;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::Widget;

use crate::ui::theme::{MAP_LAND, MAP_MARKER};
use crate::ui::views::card;

/// Pan step as a fraction of the visible span.
const PAN_FRACTION: f64 = 0.125;

/// Identity of a map widget: the exact coordinate bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapKey {
    lat_bits: u64,
    lon_bits: u64,
}

impl MapKey {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat_bits: lat.to_bits(),
            lon_bits: lon.to_bits(),
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            f64::from_bits(self.lat_bits),
            f64::from_bits(self.lon_bits)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapInstance {
    key: MapKey,
    instance_id: u64,
    lat: f64,
    lon: f64,
    label: String,
    span_degrees: f64,
    /// Offset of the view centre from the marker, in degrees (lat, lon).
    pan: (f64, f64),
}

impl MapInstance {
    pub fn key(&self) -> MapKey {
        self.key
    }

    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Marker position as `(lat, lon)`.
    pub fn center(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Popup text next to the marker.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pan_offset(&self) -> (f64, f64) {
        self.pan
    }

    /// Centre of the visible area as `(lat, lon)`.
    pub fn view_center(&self) -> (f64, f64) {
        (self.lat + self.pan.0, self.lon + self.pan.1)
    }

    /// Moves the view by whole steps; positive is north / east.
    pub fn pan(&mut self, north_steps: i32, east_steps: i32) {
        let step = self.span_degrees * PAN_FRACTION;
        self.pan.0 += f64::from(north_steps) * step;
        self.pan.1 += f64::from(east_steps) * step;
    }

    /// Canvas bounds as `(x = lon, y = lat)`. Terminal cells are about twice
    /// as tall as wide, so the latitude range is half the longitude range.
    fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let (lat, lon) = self.view_center();
        let half_x = self.span_degrees / 2.0;
        let half_y = self.span_degrees / 4.0;
        ([lon - half_x, lon + half_x], [lat - half_y, lat + half_y])
    }
}

impl Widget for &MapInstance {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (x_bounds, y_bounds) = self.bounds();
        let marker = [(self.lon, self.lat)];
        let title = format!(" Map {:.4}, {:.4} ", self.lat, self.lon);

        Canvas::default()
            .block(card(title))
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: MAP_LAND,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &marker,
                    color: MAP_MARKER,
                });
                ctx.print(
                    self.lon,
                    self.lat,
                    Line::styled(
                        format!("◉ {}", self.label),
                        Style::default().fg(MAP_MARKER),
                    ),
                );
            })
            .render(area, buf);
    }
}

/// Holds the live map instance across redraws.
#[derive(Debug)]
pub struct MapSlot {
    current: Option<MapInstance>,
    last_instance_id: u64,
    span_degrees: f64,
}

impl MapSlot {
    pub fn new(span_degrees: f64) -> Self {
        Self {
            current: None,
            last_instance_id: 0,
            span_degrees,
        }
    }

    /// Points the slot at `(lat, lon)`.
    ///
    /// Same coordinates keep the instance (only the label follows the new
    /// value); different coordinates replace it.
    pub fn sync(&mut self, lat: f64, lon: f64, label: &str) {
        let key = MapKey::new(lat, lon);
        if let Some(instance) = self.current.as_mut().filter(|i| i.key == key) {
            if instance.label != label {
                instance.label = label.to_string();
            }
            return;
        }

        self.last_instance_id += 1;
        tracing::debug!(
            key = %key,
            instance_id = self.last_instance_id,
            "Map reinitialized"
        );
        self.current = Some(MapInstance {
            key,
            instance_id: self.last_instance_id,
            lat,
            lon,
            label: label.to_string(),
            span_degrees: self.span_degrees,
            pan: (0.0, 0.0),
        });
    }

    pub fn current(&self) -> Option<&MapInstance> {
        self.current.as_ref()
    }

    pub fn pan(&mut self, north_steps: i32, east_steps: i32) {
        if let Some(instance) = self.current.as_mut() {
            instance.pan(north_steps, east_steps);
        }
    }
}
