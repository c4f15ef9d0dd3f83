// Example: header measurements arriving out of order, then a jump to a measured section.
use jumplist::{
    CoordinatorOptions, Geometry, Resolution, ScrollCommand, ScrollCoordinator, ScrollOutcome,
    ScrollTarget, SectionId, SectionLayout, SectionRegistry, SectionedData,
};

#[derive(Default)]
struct Recorded(Vec<f32>);

impl ScrollTarget for Recorded {
    fn scroll_to_offset(&mut self, offset: f32, _animated: bool) {
        self.0.push(offset);
    }
}

fn main() {
    let Some(k) = SectionId::from_char('K') else {
        return;
    };
    let data = SectionedData::group_by_initial(["Kai", "Kim", "Lea", "Abe"], |s| *s);

    let mut registry = SectionRegistry::new();
    let slow = registry.register(k);
    let fast = registry.register(k);

    // The newer measurement lands first; the older one must not overwrite it.
    println!("{:?}", registry.resolve(fast, Ok(Geometry::new(412.0, 22.0))));
    let late = registry.resolve(slow, Ok(Geometry::new(390.0, 22.0)));
    assert_eq!(late, Resolution::Stale);
    println!("{late:?} -> stored {:?}", registry.lookup(k));

    let options = CoordinatorOptions::new()
        .with_section_header_height(Some(22.0))
        .with_header_offset(48.0);
    let Ok(mut coordinator) = ScrollCoordinator::new(options) else {
        return;
    };
    coordinator.set_layout(SectionLayout::from_data(&data));

    let mut list = Recorded::default();
    match coordinator.scroll_to_section(k, &registry, &mut list) {
        Ok(ScrollOutcome::Committed(ScrollCommand { offset, strategy, .. })) => {
            println!("jumped to {k} at {offset} ({strategy:?})");
        }
        other => println!("{other:?}"),
    }
    println!("scroll commands: {:?}", list.0);
}
