//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Route costs are sums of
//! kilometre-scale terms, and near-ties between candidate paths are decided
//! by the heuristic, so single precision is not enough here.

/// Mean Earth radius used by every distance in the router, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Standard half-angle form on a sphere of radius [`EARTH_RADIUS_KM`].
    /// Symmetric in its arguments.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
    }

    /// Position on the unit sphere as `[x, y, z]`.
    ///
    /// Straight-line (chord) distance between two such vectors grows
    /// monotonically with great-circle distance, which lets a Euclidean
    /// spatial index answer great-circle nearest-neighbour queries.
    pub fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }

    /// `true` if both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = crate::CoreError;

    /// Parse `"lat,lon"` (whitespace around either number is ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || crate::CoreError::InvalidPoint(s.to_owned());
        let (lat, lon) = s.split_once(',').ok_or_else(bad)?;
        let lat: f64 = lat.trim().parse().map_err(|_| bad())?;
        let lon: f64 = lon.trim().parse().map_err(|_| bad())?;
        let p = GeoPoint::new(lat, lon);
        if p.is_finite() { Ok(p) } else { Err(bad()) }
    }
}
