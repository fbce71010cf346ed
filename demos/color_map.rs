use chromap::{build_adjacency, color_regions_seeded, Intersects, Palette, Region};

/// Axis-aligned rectangle standing in for a real polygon engine.
#[derive(Debug, Clone, Copy)]
struct Rect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Intersects for Rect {
    fn intersects(&self, other: &Self) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }
}

fn main() {
    env_logger::init();
    println!("chromap demo: coloring a 3x3 district grid\n===========================================\n");

    let mut records = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            records.push(Region::new(
                format!("district-{row}{col}"),
                Rect {
                    x0: col as f64,
                    y0: row as f64,
                    x1: col as f64 + 1.0,
                    y1: row as f64 + 1.0,
                },
            ));
        }
    }

    let model = build_adjacency(records, true);
    println!(
        "\n{} districts, max degree {}, {} colors guaranteed sufficient",
        model.len(),
        model.max_degree(),
        model.sufficient_palette_len()
    );

    let palette = Palette::new(vec![
        "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
        "#e41a1c",
    ])
    .expect("palette");

    let assignment = color_regions_seeded(&model, &palette, 42).expect("coloring failed");
    println!("\nassignment ({} distinct colors used):", assignment.color_count());
    for entry in model.iter() {
        println!(
            "  {} -> {}",
            entry.name,
            assignment.get(&entry.name).expect("colored")
        );
    }
}
