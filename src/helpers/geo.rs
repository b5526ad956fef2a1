/// Great-circle distance in kilometers between two coordinates, using the
/// haversine formula with an Earth radius of 6371 km.
///
/// Any missing input makes the distance `None`: the distance to an unknown
/// location is undefined, not zero and not an error. Inputs are not range
/// checked; out-of-range coordinates produce a mathematically valid but
/// meaningless result.
pub fn calculate_distance(
    lat1: Option<f64>,
    lon1: Option<f64>,
    lat2: Option<f64>,
    lon2: Option<f64>,
) -> Option<f64> {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let (lat1, lon1, lat2, lon2) = (lat1?, lon1?, lat2?, lon2?);

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Some(EARTH_RADIUS_KM * c)
}
