use crate::*;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::sync::atomic::{AtomicUsize, Ordering};
use core::task::Poll;
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use jumplist::{
    ConfigError, Geometry, LayoutRect, MeasurementError, MeasurementState, Phase, ScrollError,
    ScrollOutcome, ScrollTarget, SectionId, SectionedData, Strategy, StripMetrics,
};

#[derive(Debug, Default)]
struct FakeList {
    scrolls: Vec<(f32, bool)>,
    reloads: Vec<(RenderMode, usize)>,
}

impl ScrollTarget for FakeList {
    fn scroll_to_offset(&mut self, offset: f32, animated: bool) {
        self.scrolls.push((offset, animated));
    }
}

impl ListView for FakeList {
    type View = String;

    fn reload(&mut self, mode: RenderMode, len: usize) {
        self.reloads.push((mode, len));
    }

    fn default_section_header(&self, title: &str) -> String {
        format!("header:{title}")
    }

    fn default_strip_item(&self, title: &str) -> String {
        format!("strip:{title}")
    }
}

type Reply = Result<LayoutRect, MeasurementError>;

/// Layout primitive whose measurements resolve only when the test says so.
#[derive(Clone, Default)]
struct ScriptedLayout {
    requests: Rc<RefCell<Vec<(&'static str, oneshot::Sender<Reply>)>>>,
}

impl ScriptedLayout {
    fn reply(&self, handle: &str, reply: Reply) -> bool {
        let mut requests = self.requests.borrow_mut();
        let Some(pos) = requests.iter().position(|(h, _)| *h == handle) else {
            return false;
        };
        let (_, tx) = requests.remove(pos);
        tx.send(reply).is_ok()
    }

    fn resolve(&self, handle: &str, y: f32, height: f32) -> bool {
        self.reply(handle, Ok(LayoutRect::new(0.0, y, 320.0, height)))
    }

    fn outstanding(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl LayoutMeasure for ScriptedLayout {
    type Handle = &'static str;

    fn measure(&self, handle: &&'static str) -> MeasureFuture {
        let (tx, rx) = oneshot::channel();
        self.requests.borrow_mut().push((*handle, tx));
        Box::pin(async move { rx.await.unwrap_or(Err(MeasurementError::Unmounted)) })
    }
}

type Host<X = ()> = SectionedListHost<&'static str, FakeList, ScriptedLayout, X>;

fn cell(p: CellProps<'_, &'static str, ()>) -> String {
    format!("{}:{}:{}:{}", p.item, p.index, p.is_first, p.is_last)
}

fn mount(
    options: HostOptions<&'static str, String>,
    data: SectionedData<&'static str>,
) -> (Host, ScriptedLayout) {
    let layout = ScriptedLayout::default();
    let host = SectionedListHost::new(options, data, FakeList::default(), layout.clone()).unwrap();
    (host, layout)
}

fn id(c: char) -> SectionId {
    SectionId::from_char(c).unwrap()
}

fn contacts() -> SectionedData<&'static str> {
    SectionedData::sectioned([
        (id('A'), vec!["Alice"]),
        (id('B'), vec![]),
        (id('C'), vec!["Carl", "Cid"]),
    ])
}

/// Lays the strip out at y = 100 with 10 px items and resolves it.
fn lay_out_strip(host: &mut Host, layout: &ScriptedLayout) {
    host.on_strip_layout(&"strip");
    assert!(layout.resolve("strip", 100.0, 10.0));
    assert_eq!(host.tick(), None);
    assert_eq!(host.strip().metrics(), Some(StripMetrics::new(100.0, 10.0)));
}

#[test]
fn flat_data_never_shows_strip_or_scrolls() {
    let options = HostOptions::new(cell)
        .with_section_header_height(Some(22.0))
        .with_cell_height(Some(44.0))
        .with_use_dynamic_heights(false);
    let (mut host, layout) = mount(options, SectionedData::flat(["x", "y", "z"]));

    assert_eq!(host.mode(), RenderMode::Flat);
    assert_eq!(host.list().reloads, vec![(RenderMode::Flat, 3)]);
    assert!(!host.shows_strip());
    assert_eq!(host.render_strip(), None);

    let rows: Vec<String> = (0..3).filter_map(|i| host.render_entry(i)).collect();
    assert_eq!(
        rows,
        vec!["x:0:true:false", "y:1:false:false", "z:2:false:true"]
    );

    host.on_strip_layout(&"strip");
    layout.resolve("strip", 100.0, 10.0);
    host.tick();
    assert_eq!(host.on_strip_touch_start(105.0), None);
    assert_eq!(host.on_strip_touch_move(135.0), None);
    host.on_strip_touch_end();
    assert_eq!(
        host.scroll_to_section(id('A')),
        Err(ScrollError::NotSectioned)
    );
    assert_eq!(host.on_scroll(500.0), None);
    assert!(host.list().scrolls.is_empty());
}

#[test]
fn sectioned_data_interleaves_headers_and_rows() {
    let options = HostOptions::new(cell).with_section_title(|s| format!("Section {s}"));
    let (host, _) = mount(options, contacts());

    assert_eq!(host.mode(), RenderMode::Sectioned);
    assert_eq!(
        host.entries(),
        &[
            ListEntry::Header(id('A')),
            ListEntry::Row {
                section: Some(id('A')),
                index: 0
            },
            ListEntry::Header(id('B')),
            ListEntry::Header(id('C')),
            ListEntry::Row {
                section: Some(id('C')),
                index: 0
            },
            ListEntry::Row {
                section: Some(id('C')),
                index: 1
            },
        ]
    );
    assert_eq!(host.list().reloads, vec![(RenderMode::Sectioned, 6)]);

    let rendered: Vec<String> = (0..host.entries().len())
        .filter_map(|i| host.render_entry(i))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "header:Section A",
            "Alice:0:true:true",
            "header:Section B",
            "header:Section C",
            "Carl:0:true:false",
            "Cid:1:false:true",
        ]
    );
    assert_eq!(host.render_entry(6), None);
    assert_eq!(host.render_row(None, 0), None);
}

#[test]
fn strip_renders_the_whole_universe() {
    let options = HostOptions::new(cell)
        .with_section_list_title(|s| format!("{}", s.as_char().to_ascii_lowercase()))
        .with_strip_item(|s, title| format!("{}={title}", s.as_str()));
    let (host, _) = mount(options, contacts());

    let strip = host.render_strip().unwrap();
    assert_eq!(strip.len(), 27);
    assert_eq!(strip[0], "A=a");
    assert_eq!(strip[26], "#=#");

    let (hidden, _) = host_with_hidden_strip();
    assert_eq!(hidden.render_strip(), None);
    assert_eq!(hidden.mode(), RenderMode::Sectioned);
}

fn host_with_hidden_strip() -> (Host, ScriptedLayout) {
    mount(HostOptions::new(cell).with_hide_section_list(true), contacts())
}

#[test]
fn hidden_strip_ignores_touches_but_allows_programmatic_scrolls() {
    let (mut host, layout) = {
        let options = HostOptions::new(cell)
            .with_hide_section_list(true)
            .with_section_header_height(Some(22.0))
            .with_cell_height(Some(44.0));
        mount(options, contacts())
    };
    lay_out_strip(&mut host, &layout);
    assert_eq!(host.on_strip_touch_start(125.0), None);
    assert!(host.scroll_to_section(id('C')).is_ok());
    assert_eq!(host.list().scrolls, vec![(88.0, false)]);
}

#[test]
fn strip_touches_drive_debounced_scrolls() {
    let options = HostOptions::new(cell)
        .with_section_header_height(Some(22.0))
        .with_cell_height(Some(44.0))
        .with_use_dynamic_heights(false);
    let (mut host, layout) = mount(options, contacts());

    // Geometry unknown: touches are no-ops.
    assert_eq!(host.on_strip_touch_start(115.0), None);
    lay_out_strip(&mut host, &layout);

    // Band `B` is empty and resolves to `A`.
    let outcome = host.on_strip_touch_start(115.0).unwrap().unwrap();
    assert_eq!(outcome.command().unwrap().section, id('A'));
    // `C` starts after two headers and one row.
    let outcome = host.on_strip_touch_move(125.0).unwrap().unwrap();
    assert_eq!(outcome.command().unwrap().offset, 88.0);
    assert_eq!(host.on_strip_touch_move(126.0), None);
    assert_eq!(host.on_strip_touch_move(129.9), None);
    host.on_strip_touch_end();

    assert!(host.on_strip_touch_start(125.0).is_some());
    assert_eq!(
        host.list().scrolls,
        vec![(0.0, false), (88.0, false), (88.0, false)]
    );
}

#[test]
fn deferred_scroll_commits_when_header_resolves() {
    let calls = Arc::new(AtomicUsize::new(0));
    let options = HostOptions::new(cell)
        .with_section_header_height(Some(22.0))
        .with_on_scroll_to_section({
            let calls = Arc::clone(&calls);
            move |_| {
                calls.fetch_add(1, Ordering::Relaxed);
            }
        });
    let (mut host, layout) = mount(options, contacts());

    host.on_section_header_layout(id('A'), &"hA");
    host.on_section_header_layout(id('C'), &"hC");
    assert_eq!(host.pending_measurements(), 2);

    let outcome = host.scroll_to_section(id('C')).unwrap();
    assert!(matches!(outcome, ScrollOutcome::Deferred(_)));
    assert_eq!(host.tick(), None);
    assert!(host.list().scrolls.is_empty());

    assert!(layout.resolve("hC", 210.0, 22.0));
    let command = host.tick().unwrap();
    assert_eq!(command.section, id('C'));
    assert_eq!(command.offset, 188.0);
    assert_eq!(command.strategy, Strategy::Measured);
    assert_eq!(host.list().scrolls, vec![(188.0, false)]);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(host.pending_measurements(), 1);

    // Now measured: commits right away.
    let outcome = host.scroll_to_section(id('C')).unwrap();
    assert_eq!(outcome.command().unwrap().offset, 188.0);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn second_request_supersedes_a_deferred_one() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    host.on_section_header_layout(id('A'), &"hA");
    host.on_section_header_layout(id('C'), &"hC");

    assert!(matches!(
        host.scroll_to_section(id('C')),
        Ok(ScrollOutcome::Deferred(_))
    ));
    assert!(matches!(
        host.scroll_to_section(id('A')),
        Ok(ScrollOutcome::Deferred(_))
    ));

    layout.resolve("hC", 210.0, 22.0);
    assert_eq!(host.tick(), None);
    assert!(host.list().scrolls.is_empty());
    assert_eq!(host.registry().lookup(id('C')), Some(Geometry::new(210.0, 22.0)));

    layout.resolve("hA", 22.0, 22.0);
    let command = host.tick().unwrap();
    assert_eq!(command.section, id('A'));
    assert_eq!(host.list().scrolls, vec![(0.0, false)]);
}

#[test]
fn failed_measurement_falls_back_or_drops_the_request() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());

    host.on_section_header_layout(id('A'), &"hA");
    assert!(host.scroll_to_section(id('A')).is_ok());
    assert!(layout.reply("hA", Err(MeasurementError::Detached)));
    assert_eq!(host.tick(), None);
    assert_eq!(host.registry().lookup(id('A')), None);
    assert_eq!(host.coordinator().phase(), Phase::Idle);
    assert_eq!(
        host.scroll_to_section(id('A')),
        Err(ScrollError::Unmeasured(id('A')))
    );
    assert!(host.list().scrolls.is_empty());

    // With fixed heights configured the estimate takes over.
    let options = HostOptions::new(cell)
        .with_section_header_height(Some(22.0))
        .with_cell_height(Some(44.0));
    let (mut host, layout) = mount(options, contacts());
    host.on_section_header_layout(id('C'), &"hC");
    // Dropping the sender is how the layout primitive reports an unmounted element.
    layout.requests.borrow_mut().clear();
    host.tick();
    let command = host.scroll_to_section(id('C')).unwrap().command().unwrap();
    assert_eq!(command.strategy, Strategy::Estimated);
    assert_eq!(command.offset, 88.0);
}

#[test]
fn second_measurement_in_flight_keeps_deferred_scroll_alive() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    host.on_section_header_layout(id('C'), &"first");
    host.on_section_header_layout(id('C'), &"second");
    assert!(host.scroll_to_section(id('C')).is_ok());

    layout.reply("first", Err(MeasurementError::Failed("zero size".into())));
    assert_eq!(host.tick(), None);
    assert!(matches!(host.coordinator().phase(), Phase::Resolving(_)));

    layout.resolve("second", 122.0, 22.0);
    assert_eq!(host.tick().map(|c| c.offset), Some(100.0));
}

#[test]
fn changing_the_layout_invalidates_measurements() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    host.on_section_header_layout(id('A'), &"hA");
    layout.resolve("hA", 22.0, 22.0);
    host.tick();
    host.on_section_header_layout(id('C'), &"hC");
    assert_eq!(host.registry().len(), 1);

    // Same keys and counts, different rows: measurements survive.
    host.set_data(SectionedData::sectioned([
        (id('A'), vec!["Amy"]),
        (id('B'), vec![]),
        (id('C'), vec!["Cora", "Cy"]),
    ]));
    assert_eq!(host.registry().len(), 1);
    assert_eq!(host.pending_measurements(), 1);

    let before = host.registry().generation();
    host.set_data(SectionedData::sectioned([(id('A'), vec!["Alice"]), (id('Z'), vec!["Zed"])]));
    assert!(host.registry().generation() > before);
    assert!(host.registry().is_empty());
    assert_eq!(host.pending_measurements(), 0);
    assert!(!layout.resolve("hC", 300.0, 22.0));
    assert_eq!(
        host.list().reloads.last(),
        Some(&(RenderMode::Sectioned, 4))
    );

    // Headers of the new data set.
    assert_eq!(
        host.scroll_to_section(id('C')),
        Err(ScrollError::UnknownSection(id('C')))
    );
    host.on_section_header_layout(id('C'), &"stale");
    assert_eq!(host.pending_measurements(), 0);
}

#[test]
fn refresh_with_new_item_counts_drops_measured_offsets() {
    let options = HostOptions::new(cell)
        .with_section_header_height(Some(22.0))
        .with_cell_height(Some(44.0));
    let (mut host, layout) = mount(
        options,
        SectionedData::sectioned([(id('A'), vec!["Alice"]), (id('C'), vec!["Carl"])]),
    );
    host.on_section_header_layout(id('C'), &"hC");
    assert!(layout.resolve("hC", 88.0, 22.0));
    host.tick();
    assert_eq!(host.registry().lookup(id('C')), Some(Geometry::new(88.0, 22.0)));

    // Same keys, but A grew by nine rows: C's header moved down.
    host.set_data(SectionedData::sectioned([
        (id('A'), vec!["Alice"; 10]),
        (id('C'), vec!["Carl"]),
    ]));
    assert_eq!(host.registry().lookup(id('C')), None);

    let command = host.scroll_to_section(id('C')).unwrap().command().unwrap();
    assert_eq!(command.strategy, Strategy::Estimated);
    assert_eq!(command.offset, 22.0 + 10.0 * 44.0);
    assert_eq!(host.list().scrolls, vec![(462.0, false)]);
}

#[test]
fn header_measurements_overtaken_by_a_newer_one_are_dropped() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    for handle in ["c1", "c2", "c3"] {
        host.on_section_header_layout(id('C'), &handle);
    }
    assert_eq!(host.pending_measurements(), 3);

    assert!(layout.resolve("c3", 122.0, 22.0));
    host.tick();
    assert_eq!(host.pending_measurements(), 0);
    assert!(!host.registry().is_pending(id('C')));
    assert_eq!(host.registry().lookup(id('C')), Some(Geometry::new(122.0, 22.0)));
    // The older futures were dropped along with their receivers.
    assert!(!layout.resolve("c1", 10.0, 22.0));
    assert_eq!(layout.outstanding(), 1);

    // A deferred scroll waits only on a measurement that can still land.
    host.on_section_header_layout(id('A'), &"a1");
    host.on_section_header_layout(id('A'), &"a2");
    assert!(matches!(
        host.scroll_to_section(id('A')),
        Ok(ScrollOutcome::Deferred(_))
    ));
    assert!(layout.resolve("a2", 22.0, 22.0));
    assert_eq!(host.tick().map(|c| c.offset), Some(0.0));
    assert_eq!(host.pending_measurements(), 0);
}

#[test]
fn unmount_cancels_pending_work() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    lay_out_strip(&mut host, &layout);
    host.on_section_header_layout(id('A'), &"hA");
    host.on_strip_layout(&"strip");
    assert!(host.scroll_to_section(id('A')).is_ok());

    host.unmount();
    assert_eq!(host.pending_measurements(), 0);
    assert_eq!(host.coordinator().phase(), Phase::Idle);
    assert_eq!(host.strip().metrics(), None);
    assert!(!layout.resolve("hA", 22.0, 22.0));
    assert!(!layout.resolve("strip", 100.0, 10.0));
    assert_eq!(host.tick(), None);
    assert!(host.list().scrolls.is_empty());
    assert_eq!(layout.outstanding(), 0);
}

#[test]
fn latest_strip_measurement_wins() {
    let (mut host, layout) = mount(HostOptions::new(cell), contacts());
    host.on_strip_layout(&"old");
    host.on_strip_layout(&"new");

    layout.resolve("new", 200.0, 12.0);
    layout.resolve("old", 100.0, 10.0);
    host.tick();
    assert_eq!(host.strip().metrics(), Some(StripMetrics::new(200.0, 12.0)));
}

#[test]
fn list_header_offsets_measured_scrolls() {
    let options = HostOptions::new(cell)
        .with_list_header(Chrome::from_render(|| String::from("banner")))
        .with_header_height(Some(50.0))
        .with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    assert_eq!(host.render_list_header().as_deref(), Some("banner"));
    assert_eq!(host.render_list_footer(), None);

    host.on_section_header_layout(id('C'), &"hC");
    layout.resolve("hC", 300.5, 22.0);
    host.tick();
    let command = host.scroll_to_section(id('C')).unwrap().command().unwrap();
    assert_eq!(command.offset, 300.5 - 22.0 - 50.0);
}

#[test]
fn chrome_prefers_component_over_render_function() {
    let both = Chrome {
        component: Chrome::from_component(|| String::from("component")).component,
        render: Chrome::from_render(|| String::from("render")).render,
    };
    assert_eq!(both.resolve().as_deref(), Some("component"));
    assert_eq!(
        Chrome::from_render(|| String::from("render")).resolve().as_deref(),
        Some("render")
    );
    assert!(!Chrome::<String>::none().is_present());
    assert_eq!(Chrome::<String>::default().resolve(), None);
}

#[test]
fn invalid_configuration_is_rejected_at_setup() {
    let layout = ScriptedLayout::default();

    let options = HostOptions::new(cell).with_list_header(Chrome::from_component(String::new));
    assert_eq!(options.validate(), Err(ConfigError::MissingHeaderHeight));
    let err = SectionedListHost::new(options, contacts(), FakeList::default(), layout).err();
    assert!(matches!(err, Some(ConfigError::MissingHeaderHeight)));

    let options = HostOptions::new(cell)
        .with_use_dynamic_heights(false)
        .with_section_header_height(Some(22.0));
    assert_eq!(options.validate(), Err(ConfigError::MissingCellHeight));

    let options = HostOptions::new(cell).with_cell_height(Some(f32::NAN));
    assert!(matches!(
        options.validate(),
        Err(ConfigError::InvalidHeight { field: "cell_height", .. })
    ));

    // A rejected update leaves the host untouched.
    let (mut host, _) = mount(HostOptions::new(cell), contacts());
    let bad = HostOptions::new(cell).with_use_dynamic_heights(false);
    assert!(host.set_options(bad).is_err());
    assert!(host.options().use_dynamic_heights);
}

#[derive(Clone, Debug)]
struct Theme {
    accent: &'static str,
}

#[test]
fn cells_get_extra_props_and_a_select_callback() {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let options = HostOptions::new_with_extra(
        |p: CellProps<'_, &'static str, Theme>| {
            if p.is_last {
                p.select();
            }
            format!("{}[{}]", p.item, p.extra.accent)
        },
        Theme { accent: "blue" },
    )
    .with_on_cell_select({
        let selected = Arc::clone(&selected);
        move |item: &&'static str| selected.lock().unwrap().push(*item)
    });

    let layout = ScriptedLayout::default();
    let host: Host<Theme> =
        SectionedListHost::new(options, contacts(), FakeList::default(), layout).unwrap();

    assert_eq!(host.render_row(Some(id('C')), 0).as_deref(), Some("Carl[blue]"));
    assert_eq!(host.render_row(Some(id('C')), 1).as_deref(), Some("Cid[blue]"));
    assert_eq!(host.render_row(Some(id('C')), 2), None);
    assert_eq!(*selected.lock().unwrap(), vec!["Cid"]);
}

#[test]
fn section_header_template_gets_section_data() {
    let options = HostOptions::new(cell)
        .with_section_header(|s, section, title| format!("{title} ({}) {}", section.len(), s));
    let (host, _) = mount(options, contacts());
    assert_eq!(
        host.render_section_header(id('C')).as_deref(),
        Some("C (2) C")
    );
    assert_eq!(host.render_section_header(id('Q')), None);
}

#[test]
fn scroll_offsets_report_the_current_section() {
    let options = HostOptions::new(cell)
        .with_section_header_height(Some(22.0))
        .with_cell_height(Some(44.0));
    let (mut host, layout) = mount(options, contacts());

    // Estimated starts: A = 0, B = 66, C = 88.
    assert_eq!(host.on_scroll(10.0), Some(id('A')));
    assert_eq!(host.on_scroll(70.0), Some(id('B')));
    assert_eq!(host.on_scroll(90.0), Some(id('C')));
    assert_eq!(host.scroll_state().current_section, Some(id('C')));
    assert_eq!(host.scroll_state().offset, 90.0);

    // Measured offsets take over where they exist; B keeps its estimate.
    host.on_section_header_layout(id('A'), &"hA");
    host.on_section_header_layout(id('C'), &"hC");
    layout.resolve("hA", 22.0, 22.0);
    layout.resolve("hC", 500.0, 22.0);
    host.tick();
    assert_eq!(host.on_scroll(50.0), Some(id('A')));
    assert_eq!(host.on_scroll(90.0), Some(id('B')));
    assert_eq!(host.on_scroll(477.0), Some(id('B')));
    assert_eq!(host.on_scroll(478.0), Some(id('C')));
}

#[test]
fn snapshot_restores_measurements_into_a_fresh_host() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut first, layout) = mount(options.clone(), contacts());
    lay_out_strip(&mut first, &layout);
    first.on_section_header_layout(id('C'), &"hC");
    layout.resolve("hC", 222.0, 22.0);
    first.tick();

    let state = first.snapshot();
    assert_eq!(
        state,
        MeasurementState {
            sections: vec![(id('C'), Geometry::new(222.0, 22.0))],
            strip: Some(StripMetrics::new(100.0, 10.0)),
        }
    );

    let (mut second, _) = mount(options, contacts());
    second.restore(state);
    let outcome = second.on_strip_touch_start(125.0).unwrap().unwrap();
    assert_eq!(outcome.command().unwrap().offset, 200.0);
}

#[test]
fn poll_pending_works_under_an_executor() {
    let options = HostOptions::new(cell).with_section_header_height(Some(22.0));
    let (mut host, layout) = mount(options, contacts());
    host.on_section_header_layout(id('A'), &"hA");
    assert!(host.scroll_to_section(id('A')).is_ok());

    layout.resolve("hA", 30.0, 22.0);
    let command = futures::executor::block_on(futures::future::poll_fn(|cx| {
        Poll::Ready(host.poll_pending(cx))
    }));
    assert_eq!(command.map(|c| c.offset), Some(8.0));
}
