// Example: dragging a finger down the jump strip and jumping with estimated offsets.
use jumplist::{
    CoordinatorOptions, IndexStrip, ScrollCoordinator, ScrollTarget, SectionId, SectionLayout,
    SectionRegistry, SectionedData, StripMetrics,
};

struct PrintTarget;

impl ScrollTarget for PrintTarget {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        println!("  list.scroll_to_offset({offset}, animated={animated})");
    }
}

fn main() {
    let data = SectionedData::group_by_initial(
        [
            "Alice", "Amos", "Bianca", "Dmitri", "Dora", "Eve", "Mallory", "Zed", "42 Club",
        ],
        |name| *name,
    );

    let options = CoordinatorOptions::estimated(22.0, 44.0).with_on_scroll_to_section(Some(
        |s: SectionId| println!("  on_scroll_to_section({s})"),
    ));
    let mut coordinator = match ScrollCoordinator::new(options) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("bad options: {err}");
            return;
        }
    };
    coordinator.set_layout(SectionLayout::from_data(&data));
    let registry = SectionRegistry::new();

    let mut strip = IndexStrip::new(data.occupied());
    // 27 items of 16 px, starting 80 px from the top of the screen.
    strip.set_metrics(StripMetrics::new(80.0, 16.0));

    let mut target = PrintTarget;
    let mut y = 70.0;
    if let Some(sel) = strip.on_touch_start(y) {
        println!("touch y={y} -> {}", sel.section);
        let _ = coordinator.scroll_to_section(sel.section, &registry, &mut target);
    }
    while y < 520.0 {
        y += 7.0;
        if let Some(sel) = strip.on_touch_move(y) {
            println!("move  y={y} -> {}", sel.section);
            if let Err(err) = coordinator.scroll_to_section(sel.section, &registry, &mut target) {
                println!("  skipped: {err}");
            }
        }
    }
    strip.on_touch_end();
}
