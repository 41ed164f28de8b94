//! MST-cut clustering on a simple 2D dataset, with both center rules.

use mst_cluster::{CenterKind, MstCut, Point};

fn main() {
    // Three well-separated groups in 2D.
    let data: Vec<Point> = vec![
        // Group A (near origin)
        Point::new(0.0, 0.0),
        Point::new(0.1, 0.2),
        Point::new(0.2, 0.1),
        Point::new(-0.1, 0.1),
        // Group B (near (5, 5))
        Point::new(5.0, 5.0),
        Point::new(5.1, 4.9),
        Point::new(4.9, 5.1),
        Point::new(5.2, 5.2),
        // Group C (near (10, 0))
        Point::new(10.0, 0.0),
        Point::new(10.1, 0.1),
        Point::new(9.9, -0.1),
        Point::new(10.2, 0.2),
    ];

    for center in [CenterKind::Medoid, CenterKind::Centroid] {
        let fit = match MstCut::new(3).with_center(center).fit(&data) {
            Ok(fit) => fit,
            Err(err) => {
                eprintln!("clustering failed: {err}");
                return;
            }
        };

        println!("=== MST cut (k=3, {center} centers) ===");
        for (i, label) in fit.labels().iter().enumerate() {
            println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i].x, data[i].y, label);
        }
        for (id, cluster) in fit.clusters().iter().enumerate() {
            println!(
                "  cluster {} center ({:.3}, {:.3}) spread {:.3}",
                id, cluster.center.x, cluster.center.y, cluster.spread
            );
        }
        println!("  delta_max = {:.6}\n", fit.delta_max());
    }
}
