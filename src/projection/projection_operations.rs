//! Projection Operations - Pure DOP Functions
//!
//! Fixed isometric mapping: +x runs right and up the image, +y runs left
//! and up, +z runs straight up, so the cells nearest the viewer land at the
//! bottom. Coordinates are Y-up; the canvas flips them when rasterizing.

use super::projection_data::{CubeOutline, DiamondSize, ImageSize, WorldBox};
use crate::grid::GridShape;
use glam::DVec2;

/// Half the diamond width (DW/2)
#[inline]
pub fn half_width(diamond: DiamondSize) -> f64 {
    (diamond.width / 2) as f64
}

/// Half the diamond height (DH/2)
#[inline]
pub fn half_height(diamond: DiamondSize) -> f64 {
    (diamond.height / 2) as f64
}

/// Screen origin of a voxel's cube (lower-left corner of its bounding box)
pub fn voxel_origin(shape: GridShape, diamond: DiamondSize, x: usize, y: usize, z: usize) -> DVec2 {
    let dw2 = half_width(diamond);
    let dh2 = half_height(diamond);
    let dh = diamond.height as f64;

    let (x, y, z) = (x as f64, y as f64, z as f64);
    DVec2::new(
        dw2 * (shape.y as f64 - 1.0) + dw2 * (x - y),
        dh2 * (x + y) + dh * z,
    )
}

/// Seven key points of a cube in its local frame
pub fn cube_outline(diamond: DiamondSize) -> CubeOutline {
    let dw = diamond.width as f64;
    let dh = diamond.height as f64;
    let dw2 = half_width(diamond);
    let dh2 = half_height(diamond);

    CubeOutline {
        p1: DVec2::new(0.0, dh2),
        p2: DVec2::new(0.0, dh2 + dh),
        p3: DVec2::new(dw2, dh),
        p4: DVec2::new(dw2, 0.0),
        p5: DVec2::new(dw2, 2.0 * dh),
        p6: DVec2::new(dw, dh2 + dh),
        p7: DVec2::new(dw, dh2),
    }
}

/// Eight key points of the grid's bounding box, in the same frame as
/// `voxel_origin`
pub fn world_box(shape: GridShape, diamond: DiamondSize) -> WorldBox {
    let dh = diamond.height as f64;
    let dw2 = half_width(diamond);
    let dh2 = half_height(diamond);
    let (xm, ym, zm) = (shape.x as f64, shape.y as f64, shape.z as f64);

    let p1 = DVec2::new(0.0, ym * dh2);
    let p2 = DVec2::new(0.0, p1.y + dh * zm);
    let p3 = DVec2::new(ym * dw2, dh * zm);
    let p4 = DVec2::new(p3.x, 0.0);
    let p5 = DVec2::new(xm * dw2, (xm + ym) * dh2 + zm * dh);
    let p6 = DVec2::new((xm + ym) * dw2, xm * dh2 + zm * dh);
    let p7 = DVec2::new(p6.x, xm * dh2);
    let p8 = DVec2::new(p5.x, (xm + ym) * dh2);

    WorldBox {
        p1,
        p2,
        p3,
        p4,
        p5,
        p6,
        p7,
        p8,
    }
}

/// The three edges meeting at the hidden back corner p8
pub fn world_box_back_segments(wb: &WorldBox) -> [(DVec2, DVec2); 3] {
    [(wb.p5, wb.p8), (wb.p1, wb.p8), (wb.p8, wb.p7)]
}

/// The nine edges visible in front of the model
pub fn world_box_front_segments(wb: &WorldBox) -> [(DVec2, DVec2); 9] {
    [
        // outer hexagon
        (wb.p1, wb.p2),
        (wb.p2, wb.p5),
        (wb.p5, wb.p6),
        (wb.p6, wb.p7),
        (wb.p7, wb.p4),
        (wb.p4, wb.p1),
        // edges meeting at the front corner p3
        (wb.p2, wb.p3),
        (wb.p3, wb.p6),
        (wb.p3, wb.p4),
    ]
}

/// Output image size for a grid, including the margin on every side
pub fn image_size(shape: GridShape, diamond: DiamondSize, margin: u32) -> ImageSize {
    let xy = (shape.x + shape.y) as u32;
    ImageSize {
        width: xy * (diamond.width / 2) + 2 * margin,
        height: xy * (diamond.height / 2) + shape.z as u32 * diamond.height + 2 * margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAMOND: DiamondSize = DiamondSize {
        width: 28,
        height: 14,
    };

    fn shape(x: usize, y: usize, z: usize) -> GridShape {
        GridShape { x, y, z }
    }

    #[test]
    fn test_voxel_origin_lattice() {
        let s = shape(4, 3, 2);
        // Leftmost column sits at x = 0
        assert_eq!(voxel_origin(s, DIAMOND, 0, 2, 0), DVec2::new(0.0, 14.0));
        // +x steps half a diamond right and up
        assert_eq!(voxel_origin(s, DIAMOND, 0, 0, 0), DVec2::new(28.0, 0.0));
        assert_eq!(voxel_origin(s, DIAMOND, 1, 0, 0), DVec2::new(42.0, 7.0));
        // +z is straight up by one diamond height
        assert_eq!(voxel_origin(s, DIAMOND, 1, 0, 1), DVec2::new(42.0, 21.0));
    }

    #[test]
    fn test_cube_outline_points() {
        let o = cube_outline(DIAMOND);
        assert_eq!(o.p1, DVec2::new(0.0, 7.0));
        assert_eq!(o.p2, DVec2::new(0.0, 21.0));
        assert_eq!(o.p3, DVec2::new(14.0, 14.0));
        assert_eq!(o.p4, DVec2::new(14.0, 0.0));
        assert_eq!(o.p5, DVec2::new(14.0, 28.0));
        assert_eq!(o.p6, DVec2::new(28.0, 21.0));
        assert_eq!(o.p7, DVec2::new(28.0, 7.0));
    }

    #[test]
    fn test_unit_world_box_matches_cube() {
        let s = shape(1, 1, 1);
        let wb = world_box(s, DIAMOND);
        let o = cube_outline(DIAMOND);
        let origin = voxel_origin(s, DIAMOND, 0, 0, 0);

        assert_eq!(wb.p1, origin + o.p1);
        assert_eq!(wb.p2, origin + o.p2);
        assert_eq!(wb.p3, origin + o.p3);
        assert_eq!(wb.p4, origin + o.p4);
        assert_eq!(wb.p5, origin + o.p5);
        assert_eq!(wb.p6, origin + o.p6);
        assert_eq!(wb.p7, origin + o.p7);
        // Back and front middle corners coincide for a single cell
        assert_eq!(wb.p8, wb.p3);
    }

    #[test]
    fn test_world_box_encloses_far_corner_cube() {
        let s = shape(12, 8, 6);
        let wb = world_box(s, DIAMOND);
        let o = cube_outline(DIAMOND);
        let top = voxel_origin(s, DIAMOND, 11, 7, 5) + o.p5;
        assert_eq!(top, wb.p5);
    }

    #[test]
    fn test_image_size_formula() {
        assert_eq!(
            image_size(shape(1, 1, 1), DIAMOND, 40),
            ImageSize {
                width: 28 + 80,
                height: 28 + 80,
            }
        );
        assert_eq!(
            image_size(shape(12, 8, 6), DIAMOND, 40),
            ImageSize {
                width: 20 * 14 + 80,
                height: 20 * 7 + 6 * 14 + 80,
            }
        );
    }

    #[test]
    fn test_world_box_back_segments_meet_at_p8() {
        let wb = world_box(shape(2, 3, 4), DIAMOND);
        assert!(world_box_back_segments(&wb)
            .iter()
            .all(|(a, b)| *a == wb.p8 || *b == wb.p8));
        assert!(world_box_front_segments(&wb)
            .iter()
            .all(|(a, b)| *a != wb.p8 && *b != wb.p8));
    }
}
