//! Cube Renderer Operations
//!
//! Draws a single voxel as up to three shaded faces plus the outline
//! segments that lie on the silhouette of its object. Faces shared with a
//! same-id neighbor are skipped and so are seam edges between same-id
//! voxels, which makes a block of equal ids read as one solid.

use super::cube_data::{CubeEdge, CubeJob, CubeStats, Face, FaceSet};
use crate::canvas::{fill_polygon, stroke_polyline, Canvas, CanvasScope, Color};
use crate::config::Palette;
use crate::grid::NeighborFlags;
use crate::projection::CubeOutline;
use glam::DVec2;

// ============================================================================
// SHADING
// ============================================================================

/// Linear height gradient: `shade_floor + shade_range * z / z_max`
pub fn shade_ratio(palette: &Palette, z: usize, z_max: usize) -> f64 {
    palette.shade_floor + palette.shade_range * z as f64 / z_max as f64
}

fn scale(color: Color, shade: f64) -> Color {
    Color {
        r: color.r * shade,
        g: color.g * shade,
        b: color.b * shade,
    }
}

/// Shaded fill color of one face
pub fn face_color(palette: &Palette, face: Face, shade: f64) -> Color {
    match face {
        Face::Right => scale(palette.right, shade),
        Face::Left => scale(palette.left, shade),
        Face::Top => scale(palette.top, shade),
    }
}

// ============================================================================
// SUPPRESSION RULES
// ============================================================================

/// A face is hidden when the neighbor it faces belongs to the same object
pub fn visible_faces(flags: &NeighborFlags) -> FaceSet {
    FaceSet {
        right: !flags.y_neg,
        left: !flags.x_neg,
        top: !flags.z_pos,
    }
}

/// Whether an outline segment lies on the silhouette of the merged object
///
/// The four two-part rules keep an edge next to a same-id neighbor when
/// the diagonal cell beyond that neighbor is filled, so inner corners of
/// concave shapes keep their crease line.
pub fn edge_visible(edge: CubeEdge, n: &NeighborFlags) -> bool {
    match edge {
        CubeEdge::P5P6 => (!n.x_pos && !n.z_pos) || (n.x_pos && n.x_pos_z_pos),
        CubeEdge::P6P7 => (!n.x_pos && !n.y_neg) || (n.x_pos && n.x_pos_y_neg),
        CubeEdge::P2P5 => (!n.y_pos && !n.z_pos) || (n.y_pos && n.y_pos_z_pos),
        CubeEdge::P1P4 => (!n.z_neg && !n.x_neg) || (n.z_neg && n.x_neg_z_neg),
        CubeEdge::P2P1 => !n.y_pos && !n.x_neg,
        CubeEdge::P4P7 => !n.z_neg && !n.y_neg,
        CubeEdge::P3P4 => !n.x_neg && !n.y_neg,
        CubeEdge::P6P3 => !n.z_pos && !n.y_neg,
        CubeEdge::P2P3 => !n.z_pos && !n.x_neg,
    }
}

/// Outline segments owned by each face, in drawing order
///
/// An edge is only ever drawn together with its face.
pub fn face_edges(face: Face) -> &'static [CubeEdge] {
    match face {
        Face::Right => &[CubeEdge::P6P7, CubeEdge::P4P7],
        Face::Left => &[CubeEdge::P1P4, CubeEdge::P2P1, CubeEdge::P3P4],
        Face::Top => &[
            CubeEdge::P5P6,
            CubeEdge::P2P5,
            CubeEdge::P6P3,
            CubeEdge::P2P3,
        ],
    }
}

/// Edges of `face` that survive suppression
pub fn visible_face_edges(face: Face, flags: &NeighborFlags) -> Vec<CubeEdge> {
    face_edges(face)
        .iter()
        .copied()
        .filter(|edge| edge_visible(*edge, flags))
        .collect()
}

// ============================================================================
// GEOMETRY
// ============================================================================

pub fn face_points(outline: &CubeOutline, face: Face) -> [DVec2; 4] {
    let o = outline;
    match face {
        Face::Right => [o.p3, o.p6, o.p7, o.p4],
        Face::Left => [o.p1, o.p2, o.p3, o.p4],
        Face::Top => [o.p2, o.p5, o.p6, o.p3],
    }
}

pub fn edge_points(outline: &CubeOutline, edge: CubeEdge) -> (DVec2, DVec2) {
    let o = outline;
    match edge {
        CubeEdge::P5P6 => (o.p5, o.p6),
        CubeEdge::P6P7 => (o.p6, o.p7),
        CubeEdge::P2P5 => (o.p2, o.p5),
        CubeEdge::P1P4 => (o.p1, o.p4),
        CubeEdge::P2P1 => (o.p2, o.p1),
        CubeEdge::P4P7 => (o.p4, o.p7),
        CubeEdge::P3P4 => (o.p3, o.p4),
        CubeEdge::P6P3 => (o.p6, o.p3),
        CubeEdge::P2P3 => (o.p2, o.p3),
    }
}

// ============================================================================
// DRAWING
// ============================================================================

/// Draw one occupied, visible voxel
///
/// Faces go right, left, top; each face's surviving edges are stroked
/// straight after its fill.
pub fn draw_cube<C: Canvas + ?Sized>(
    canvas: &mut C,
    job: &CubeJob,
    outline: &CubeOutline,
    palette: &Palette,
) -> CubeStats {
    let faces = visible_faces(&job.flags);
    let mut stats = CubeStats::default();

    let mut scope = CanvasScope::new(canvas);
    scope.translate(job.origin);

    for (face, drawn) in [
        (Face::Right, faces.right),
        (Face::Left, faces.left),
        (Face::Top, faces.top),
    ] {
        if !drawn {
            continue;
        }

        fill_polygon(
            &mut *scope,
            &face_points(outline, face),
            face_color(palette, face, job.shade),
        );
        stats.faces += 1;

        for edge in visible_face_edges(face, &job.flags) {
            let (from, to) = edge_points(outline, edge);
            scope.stroke_segment(from, to);
            stats.edges += 1;
        }
    }

    stats
}

/// Outline of a cube's bottom diamond, unfilled (floor grid tile)
pub fn draw_flat_tile<C: Canvas + ?Sized>(canvas: &mut C, origin: DVec2, outline: &CubeOutline) {
    let o = outline;
    let mut scope = CanvasScope::new(canvas);
    scope.translate(origin);
    stroke_polyline(&mut *scope, &[o.p1, o.p3, o.p7, o.p4, o.p1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::projection::{cube_outline, DiamondSize};

    const DIAMOND: DiamondSize = DiamondSize {
        width: 28,
        height: 14,
    };

    fn job(flags: NeighborFlags) -> CubeJob {
        CubeJob {
            x: 0,
            y: 0,
            z: 0,
            origin: DVec2::new(100.0, 50.0),
            flags,
            shade: 1.0,
        }
    }

    #[test]
    fn test_isolated_cube_draws_everything() {
        let mut canvas = RecordingCanvas::new();
        let stats = draw_cube(
            &mut canvas,
            &job(NeighborFlags::default()),
            &cube_outline(DIAMOND),
            &Palette::default(),
        );
        assert_eq!(stats, CubeStats { faces: 3, edges: 9 });
        assert_eq!(canvas.fill_count(), 3);
        assert_eq!(canvas.stroke_count(), 9);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_interior_cube_draws_nothing() {
        let flags = NeighborFlags {
            x_pos: true,
            x_neg: true,
            y_neg: true,
            z_pos: true,
            ..NeighborFlags::default()
        };
        let mut canvas = RecordingCanvas::new();
        let stats = draw_cube(
            &mut canvas,
            &job(flags),
            &cube_outline(DIAMOND),
            &Palette::default(),
        );
        assert_eq!(stats, CubeStats::default());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_face_suppression_rules() {
        let flags = NeighborFlags {
            y_neg: true,
            ..NeighborFlags::default()
        };
        assert_eq!(
            visible_faces(&flags),
            FaceSet {
                right: false,
                left: true,
                top: true
            }
        );

        let flags = NeighborFlags {
            x_neg: true,
            z_pos: true,
            ..NeighborFlags::default()
        };
        assert_eq!(
            visible_faces(&flags),
            FaceSet {
                right: true,
                left: false,
                top: false
            }
        );
    }

    #[test]
    fn test_x_neighbor_hides_shared_top_seam() {
        let flags = NeighborFlags {
            x_pos: true,
            ..NeighborFlags::default()
        };
        assert!(!edge_visible(CubeEdge::P5P6, &flags));
        assert!(!edge_visible(CubeEdge::P6P7, &flags));
        assert!(edge_visible(CubeEdge::P2P5, &flags));
    }

    #[test]
    fn test_filled_diagonal_keeps_crease() {
        let flags = NeighborFlags {
            x_pos: true,
            x_pos_z_pos: true,
            ..NeighborFlags::default()
        };
        assert!(edge_visible(CubeEdge::P5P6, &flags));

        let flags = NeighborFlags {
            z_neg: true,
            x_neg_z_neg: true,
            ..NeighborFlags::default()
        };
        assert!(edge_visible(CubeEdge::P1P4, &flags));
    }

    #[test]
    fn test_single_flag_edges_have_no_diagonal_exception() {
        let flags = NeighborFlags {
            y_pos: true,
            x_neg: true,
            y_neg: true,
            z_pos: true,
            z_neg: true,
            x_pos_y_neg: true,
            x_pos_z_pos: true,
            x_neg_z_neg: true,
            y_pos_z_pos: true,
            y_neg_z_neg: true,
            x_pos: false,
        };
        for edge in [
            CubeEdge::P2P1,
            CubeEdge::P4P7,
            CubeEdge::P3P4,
            CubeEdge::P6P3,
            CubeEdge::P2P3,
        ] {
            assert!(!edge_visible(edge, &flags), "{edge:?} should be hidden");
        }
    }

    #[test]
    fn test_every_edge_belongs_to_one_face() {
        let mut all: Vec<CubeEdge> = [Face::Right, Face::Left, Face::Top]
            .iter()
            .flat_map(|f| face_edges(*f).iter().copied())
            .collect();
        assert_eq!(all.len(), 9);
        all.sort_by_key(|e| *e as u8);
        all.dedup();
        assert_eq!(all.len(), 9);
    }

    #[test]
    fn test_hidden_face_takes_its_edges_along() {
        // Left face hidden, but its edge rules would otherwise pass
        let flags = NeighborFlags {
            x_neg: true,
            ..NeighborFlags::default()
        };
        let mut canvas = RecordingCanvas::new();
        let stats = draw_cube(
            &mut canvas,
            &job(flags),
            &cube_outline(DIAMOND),
            &Palette::default(),
        );
        assert_eq!(stats.faces, 2);
        // right: P6P7, P4P7; top: P5P6, P2P5, P6P3 (P2P3 needs !x_neg)
        assert_eq!(stats.edges, 5);
    }

    #[test]
    fn test_faces_are_distinct_shades() {
        let palette = Palette::default();
        let shade = shade_ratio(&palette, 0, 1);
        assert_eq!(shade, 0.4);

        let top = face_color(&palette, Face::Top, shade);
        let right = face_color(&palette, Face::Right, shade);
        let left = face_color(&palette, Face::Left, shade);
        assert_ne!(top, right);
        assert_ne!(right, left);
        assert_ne!(top, left);
        assert!((right.r - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_cube_is_drawn_at_origin() {
        let mut canvas = RecordingCanvas::new();
        let outline = cube_outline(DIAMOND);
        draw_cube(
            &mut canvas,
            &job(NeighborFlags::default()),
            &outline,
            &Palette::default(),
        );
        match &canvas.commands()[0] {
            DrawCommand::Fill { points, .. } => {
                assert_eq!(points[0], DVec2::new(100.0, 50.0) + outline.p3);
            }
            other => panic!("expected right face fill first, got {other:?}"),
        }
    }

    #[test]
    fn test_flat_tile_is_four_strokes() {
        let mut canvas = RecordingCanvas::new();
        draw_flat_tile(&mut canvas, DVec2::ZERO, &cube_outline(DIAMOND));
        assert_eq!(canvas.stroke_count(), 4);
        assert_eq!(canvas.fill_count(), 0);
        assert_eq!(canvas.depth(), 0);
    }
}
