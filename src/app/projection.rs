//! Projection metadata derived from a tile's bounds and pixel grid

use crate::app::models::Bbox;
use crate::errors::{ItemError, ItemResult};

/// Affine transform mapping the pixel grid `shape` (rows, cols) onto `bbox`
///
/// Returned row-major as the full 3x3 matrix
/// `[xres, 0, west, 0, yres, north, 0, 0, 1]` where `xres = (east - west) / cols`
/// and `yres = (south - north) / rows`, so pixel (0, 0) is the north-west corner.
pub fn affine_from_bounds(bbox: Bbox, shape: [u32; 2]) -> ItemResult<[f64; 9]> {
    let [rows, cols] = shape;
    if rows == 0 || cols == 0 {
        return Err(ItemError::Projection {
            reason: format!("pixel shape {:?} has a zero dimension", shape),
        });
    }

    let [west, south, east, north] = bbox;
    let x_resolution = (east - west) / f64::from(cols);
    let y_resolution = (south - north) / f64::from(rows);

    Ok([
        x_resolution,
        0.0,
        west,
        0.0,
        y_resolution,
        north,
        0.0,
        0.0,
        1.0,
    ])
}

/// Authority code for an EPSG coordinate reference system
pub fn epsg_code(epsg: u32) -> String {
    format!("EPSG:{}", epsg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_for_gmw_tile() {
        let transform = affine_from_bounds([-82.0, 25.0, -81.0, 26.0], [4500, 4500]).unwrap();

        assert_eq!(transform[0], 1.0 / 4500.0);
        assert_eq!(transform[2], -82.0);
        assert_eq!(transform[4], -1.0 / 4500.0);
        assert_eq!(transform[5], 26.0);
        assert_eq!(&transform[6..], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_transform_maps_far_corner_to_south_east() {
        let bbox = [10.0, -5.0, 11.0, -4.0];
        let shape = [200, 400];
        let t = affine_from_bounds(bbox, shape).unwrap();

        let x = t[0] * 400.0 + t[1] * 200.0 + t[2];
        let y = t[3] * 400.0 + t[4] * 200.0 + t[5];
        assert!((x - 11.0).abs() < 1e-12);
        assert!((y + 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_shape_rejected() {
        let result = affine_from_bounds([0.0, 0.0, 1.0, 1.0], [0, 4500]);
        assert!(matches!(result, Err(ItemError::Projection { .. })));
    }

    #[test]
    fn test_epsg_code() {
        assert_eq!(epsg_code(4326), "EPSG:4326");
    }
}
