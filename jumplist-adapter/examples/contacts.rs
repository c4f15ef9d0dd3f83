// Example: a contacts list wired to a terminal "renderer".
//
// The list engine and the layout primitive are stand-ins: rows are strings, and every element
// is "measured" from a precomputed table on the next tick.
use std::collections::HashMap;
use std::future::ready;

use jumplist::{LayoutRect, MeasurementError, ScrollTarget, SectionId, SectionedData};
use jumplist_adapter::{
    CellProps, Chrome, HostOptions, LayoutMeasure, ListView, MeasureFuture, RenderMode,
    SectionedListHost,
};

#[derive(Default)]
struct TerminalList {
    offset: f32,
}

impl ScrollTarget for TerminalList {
    fn scroll_to_offset(&mut self, offset: f32, _animated: bool) {
        self.offset = offset;
        println!("  <scroll to {offset}>");
    }
}

impl ListView for TerminalList {
    type View = String;

    fn reload(&mut self, mode: RenderMode, len: usize) {
        println!("reload {mode:?} with {len} entries");
    }

    fn default_section_header(&self, title: &str) -> String {
        format!("== {title} ==")
    }

    fn default_strip_item(&self, title: &str) -> String {
        title.to_string()
    }
}

/// Element handles are names; positions come from a table filled in by the "layout pass".
struct TableLayout {
    rects: HashMap<String, LayoutRect>,
}

impl LayoutMeasure for TableLayout {
    type Handle = String;

    fn measure(&self, handle: &String) -> MeasureFuture {
        let result = self
            .rects
            .get(handle)
            .copied()
            .ok_or(MeasurementError::Detached);
        Box::pin(ready(result))
    }
}

fn cell(p: CellProps<'_, &'static str, ()>) -> String {
    let corner = match (p.is_first, p.is_last) {
        (true, true) => "╶",
        (true, false) => "┌",
        (false, true) => "└",
        (false, false) => "│",
    };
    format!("{corner} {}", p.item)
}

fn main() {
    const HEADER: f32 = 40.0;
    const SECTION: f32 = 22.0;
    const ROW: f32 = 44.0;

    let names = [
        "Ada", "Alan", "Barbara", "Dennis", "Donald", "Edsger", "Grace", "Ken", "Linus", "Niklaus",
        "1337 Hackers",
    ];
    let data = SectionedData::group_by_initial(names, |n| *n);

    // Lay everything out top to bottom, like a real list engine would.
    let mut rects = HashMap::new();
    let mut y = HEADER;
    for section in data.sections() {
        rects.insert(
            format!("header-{}", section.id),
            LayoutRect::new(0.0, y, 320.0, SECTION),
        );
        y += SECTION + section.len() as f32 * ROW;
    }
    rects.insert("strip".to_string(), LayoutRect::new(300.0, 60.0, 20.0, 16.0));

    let options = HostOptions::new(cell)
        .with_list_header(Chrome::from_component(|| "My Contacts".to_string()))
        .with_header_height(Some(HEADER))
        .with_section_header_height(Some(SECTION))
        .with_on_cell_select(|name: &&str| println!("selected {name}"))
        .with_on_scroll_to_section(|s| println!("  on_scroll_to_section({s})"));

    let mut host = match SectionedListHost::new(
        options,
        data,
        TerminalList::default(),
        TableLayout { rects },
    ) {
        Ok(host) => host,
        Err(err) => {
            eprintln!("configuration error: {err}");
            return;
        }
    };

    if let Some(header) = host.render_list_header() {
        println!("{header}");
    }
    for i in 0..host.entries().len() {
        if let Some(view) = host.render_entry(i) {
            println!("{view}");
        }
    }
    if let Some(strip) = host.render_strip() {
        println!("strip: {}", strip.join(" "));
    }

    // Layout callbacks from the list engine.
    let ids: Vec<SectionId> = host.data().section_ids().collect();
    for id in ids {
        host.on_section_header_layout(id, &format!("header-{id}"));
    }
    host.on_strip_layout(&"strip".to_string());
    host.tick();

    println!("drag on the strip:");
    for y in [61.0, 80.0, 95.0, 110.0, 150.0, 200.0, 500.0] {
        match host.on_strip_touch_move(y) {
            Some(Ok(outcome)) => println!("  y={y}: {outcome:?}"),
            Some(Err(err)) => println!("  y={y}: {err}"),
            None => {}
        }
    }
    host.on_strip_touch_end();

    let offset = host.list().offset;
    println!("current section at {offset}: {:?}", host.on_scroll(offset));
}
