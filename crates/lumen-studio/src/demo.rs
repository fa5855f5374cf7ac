//! Built-in demo scene: a row of cards with shadows, borders, mixed corner
//! radii and one clipped card.

use lumen_engine::coords::{Bounds, Corners, Edges, Globals};
use lumen_engine::paint::Hsla;
use lumen_engine::scene::{Quad, Scene, Shadow, ViewId};

const CARD_WIDTH: f32 = 220.0;
const CARD_HEIGHT: f32 = 140.0;
const GAP: f32 = 40.0;

pub fn build(globals: Globals) -> Scene {
    let viewport = globals.viewport_size;
    let mut scene = Scene::new();

    // Header bar, square bottom corners.
    scene.push_quad(
        Quad::new(Bounds::new(0.0, 0.0, viewport.x, 64.0), Hsla::new(0.62, 0.45, 0.22, 1.0))
            .with_border(Edges::new(0.0, 0.0, 2.0, 0.0), Hsla::new(0.62, 0.6, 0.5, 1.0)),
    );

    let top = 110.0;
    let cards: [(Corners, f32, Hsla); 3] = [
        (Corners::all(12.0), 8.0, Hsla::new(0.58, 0.8, 0.55, 1.0)),
        (Corners::new(28.0, 4.0, 28.0, 4.0), 16.0, Hsla::new(0.95, 0.7, 0.6, 1.0)),
        (Corners::all(0.0), 2.0, Hsla::new(0.33, 0.5, 0.45, 1.0)),
    ];

    for (i, (radii, blur, accent)) in cards.into_iter().enumerate() {
        let x = GAP + i as f32 * (CARD_WIDTH + GAP);
        let bounds = Bounds::new(x, top, CARD_WIDTH, CARD_HEIGHT);
        // One view per card; shadow on layer 0, card body and badge on layer 1.
        let view = ViewId::new(i as u64 + 1);

        scene.push_shadow(
            Shadow::new(offset(bounds, 0.0, blur * 0.5), Hsla::black().alpha(0.35), blur)
                .with_corner_radii(radii)
                .with_tags(view, 0, 0),
        );
        scene.push_quad(
            Quad::new(bounds, Hsla::white())
                .with_corner_radii(radii)
                .with_border(Edges::new(1.0, 1.0, 1.0, 6.0), accent)
                .with_tags(view, 1, 0),
        );
        // Badge in the top-right corner.
        let badge = Bounds::new(x + CARD_WIDTH - 44.0, top + 16.0, 28.0, 28.0);
        scene.push_quad(
            Quad::new(badge, accent.alpha(0.85))
                .with_corner_radii(Corners::all(14.0))
                .with_tags(view, 1, 1),
        );
    }

    // A card scrolled halfway out of a clipping panel.
    let panel = Bounds::new(GAP, 300.0, viewport.x - 2.0 * GAP, 200.0);
    scene.push_quad(
        Quad::new(panel, Hsla::new(0.6, 0.15, 0.9, 1.0))
            .with_corner_radii(Corners::all(16.0))
            .with_border(Edges::all(1.0), Hsla::new(0.6, 0.15, 0.75, 1.0)),
    );
    let clipped = Bounds::new(GAP + 24.0, 400.0, panel.size.x - 48.0, 160.0);
    scene.push_shadow(
        Shadow::new(clipped, Hsla::black().alpha(0.25), 10.0)
            .with_corner_radii(Corners::all(10.0))
            .with_content_mask(panel),
    );
    scene.push_quad(
        Quad::new(clipped, Hsla::new(0.12, 0.9, 0.7, 1.0))
            .with_corner_radii(Corners::all(10.0))
            .with_border(Edges::all(3.0), Hsla::new(0.08, 0.9, 0.45, 0.8))
            .with_content_mask(panel),
    );

    scene
}

fn offset(bounds: Bounds, dx: f32, dy: f32) -> Bounds {
    Bounds::new(bounds.origin.x + dx, bounds.origin.y + dy, bounds.size.x, bounds.size.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scene_has_cards_and_shadows() {
        let scene = build(Globals::new(820.0, 560.0));
        assert_eq!(scene.shadows.len(), 4);
        assert_eq!(scene.quads.len(), 9);
        assert!(scene.quads.iter().all(|(_, q)| q.bounds.is_finite() && !q.bounds.is_empty()));
    }

    #[test]
    fn card_parts_share_a_view() {
        let scene = build(Globals::new(820.0, 560.0));
        let second_card: Vec<_> = scene
            .quads
            .iter()
            .filter(|(_, q)| q.view_id == ViewId::new(2))
            .map(|(_, q)| (q.layer_id, q.order))
            .collect();
        assert_eq!(second_card, vec![(1, 0), (1, 1)]);
        assert!(scene.shadows.iter().any(|(_, s)| s.view_id == ViewId::new(2) && s.layer_id == 0));
    }
}
