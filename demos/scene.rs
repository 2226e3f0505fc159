use bounding_volume::{Point, Scene};

// Replays what the viewer does on key presses and clicks, printing instead of drawing.
fn main() {
    let mut s = Scene::new();

    // "R" twice: two random subsets of 10 points in [-100, 100]
    for _ in 0..2 {
        s.add_default_subset().unwrap();
    }

    // "A": compute the bounding volumes
    s.recompute_aabbs();
    s.recompute_circles();

    for (h, subset) in s.subsets() {
        let aabb = subset.aabb.unwrap();
        let circle = subset.circle.unwrap();
        println!(
            "{:?}: {} points, aabb {:?} -> {:?}, circle at {:?} r={:.2}",
            h,
            subset.points.len(),
            aabb.ll,
            aabb.ur,
            circle.center,
            circle.radius
        );
    }

    // Clicks, already converted to world coordinates
    s.add_probe_point(Point::new(0.0, 0.0));
    s.add_probe_point(Point::new(99.0, -99.0));
    for (p, inside) in s.probe_points().iter().zip(s.probe_containment()) {
        println!("probe {:?} inside: {}", p, inside);
    }

    println!("{} overlap points", s.compute_overlaps().len());
    for p in s.compute_unique_overlaps() {
        println!("  {:?}", p);
    }

    // "E": clear everything
    s.clear();
    println!("cleared: {}", s.is_cleared());
}
