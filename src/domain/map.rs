use super::coordinate::Coordinate;

pub const DEFAULT_ZOOM: u8 = 15;
pub const OSM_TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

type ClickListener = Box<dyn FnMut(Coordinate) + Send>;

/// The delivery-point picker: a tiled map with a single marker.
///
/// Tile fetching belongs to whatever widget draws this view. Clicks are delivered
/// through plain callbacks registered with [`MapView::on_click`].
pub struct MapView {
    center: Coordinate,
    zoom: u8,
    tile_url_template: String,
    attribution: String,
    marker: Coordinate,
    listeners: Vec<ClickListener>,
}

impl MapView {
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            tile_url_template: OSM_TILE_URL_TEMPLATE.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            marker: center,
            listeners: Vec::new(),
        }
    }

    pub fn with_tiles(mut self, url_template: impl Into<String>, attribution: impl Into<String>) -> Self {
        self.tile_url_template = url_template.into();
        self.attribution = attribution.into();
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_url_template(&self) -> &str {
        &self.tile_url_template
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn marker(&self) -> Coordinate {
        self.marker
    }

    pub fn on_click<F>(&mut self, listener: F)
    where
        F: FnMut(Coordinate) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Delivers a click: moves the marker and calls every listener in registration order.
    pub fn click(&mut self, latitude: f64, longitude: f64) -> Coordinate {
        let point = Coordinate::new(latitude, longitude);
        self.marker = point;
        for listener in &mut self.listeners {
            listener(point);
        }
        point
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(Coordinate::DEFAULT)
    }
}

impl std::fmt::Debug for MapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView")
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .field("tile_url_template", &self.tile_url_template)
            .field("marker", &self.marker)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
