pub mod coor2d;

/// Methods for changing the coordinate representation of angles.
/// The geodesic engine works in radians only, so conversion is
/// always explicit, and always at the edge of the computation.
pub trait AngularUnits {
    /// Transform the elements of a coordinate tuple from degrees to radians
    fn to_radians(self) -> Self;

    /// Transform the elements of a coordinate tuple from radians to degrees
    fn to_degrees(self) -> Self;

    /// Transform the internal lon/lat-in-radians to lat/lon-in-degrees
    fn to_geo(self) -> Self;
}
