//! Headless model of the map pin next to the facility form.
//!
//! The widget only tracks where the marker is and where the camera looks.
//! It never geocodes; drag releases are reported back to the controller as
//! [`MarkerMoved`].

use estace_core::Coordinates;

/// Obelisco, Buenos Aires.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: -34.6037,
    longitude: -58.3816,
};

/// Country-level zoom used before anything is placed.
pub const DEFAULT_ZOOM: u8 = 5;

/// Street-level zoom used once a location is known.
pub const PLACED_ZOOM: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinates,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PinState {
    #[default]
    Unplaced,
    Placed(Coordinates),
}

/// Emitted when the user releases a dragged marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerMoved {
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Default)]
pub struct MapPin {
    state: PinState,
    viewport: Viewport,
    /// Animated fly-to requested by the last `place`, not yet rendered.
    pending_fly_to: Option<Viewport>,
}

impl MapPin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> PinState {
        self.state
    }

    #[must_use]
    pub fn marker(&self) -> Option<Coordinates> {
        match self.state {
            PinState::Placed(c) => Some(c),
            PinState::Unplaced => None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Moves the marker to coordinates supplied by the controller and flies
    /// the camera there.
    pub fn place(&mut self, coordinates: Coordinates) {
        let target = Viewport {
            center: coordinates,
            zoom: PLACED_ZOOM,
        };
        self.state = PinState::Placed(coordinates);
        self.viewport = target;
        self.pending_fly_to = Some(target);
    }

    /// Marker released after a drag. The camera stays where it is.
    pub fn drag_end(&mut self, latitude: f64, longitude: f64) -> Option<MarkerMoved> {
        match self.state {
            PinState::Unplaced => None,
            PinState::Placed(_) => {
                let coordinates = Coordinates::new(latitude, longitude);
                self.state = PinState::Placed(coordinates);
                Some(MarkerMoved { coordinates })
            }
        }
    }

    /// Hands the pending camera animation to the renderer, once.
    pub fn take_fly_to(&mut self) -> Option<Viewport> {
        self.pending_fly_to.take()
    }
}
