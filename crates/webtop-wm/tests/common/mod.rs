//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use webtop_store::MemoryStore;
use webtop_wm::{HeadlessSurface, Rect, Size, WindowDefinition, WindowManager, WmConfig, WmEvent};

pub type Wm = WindowManager<HeadlessSurface>;

/// 1280×800 viewport: usable area is `(0, 0, 1280, 752)` with the default dock
pub const VIEWPORT: Size = Size::new(1280.0, 800.0);

/// Default geometry of the `about` window
pub const ABOUT: Rect = Rect::new(100.0, 100.0, 400.0, 300.0);

pub fn definitions() -> Vec<WindowDefinition> {
    vec![
        WindowDefinition::new("about", "About").with_geometry(ABOUT),
        WindowDefinition::new("projects", "Projects").with_geometry(Rect::new(120.0, 300.0, 500.0, 400.0)),
        WindowDefinition::new("terminal", "Terminal").with_geometry(Rect::new(200.0, 500.0, 600.0, 350.0)),
    ]
}

/// Manager over a headless surface with the standard definitions registered
pub fn manager_with(surface: HeadlessSurface, store: Rc<MemoryStore>) -> Wm {
    let mut wm = WindowManager::new(WmConfig::default(), surface, store);
    for definition in definitions() {
        wm.register(definition);
    }
    wm
}

pub fn manager() -> (Wm, Rc<MemoryStore>) {
    let store = Rc::new(MemoryStore::new());
    let wm = manager_with(HeadlessSurface::new(VIEWPORT), Rc::clone(&store));
    (wm, store)
}

/// Collect every published event
pub fn record(wm: &mut Wm) -> Rc<RefCell<Vec<WmEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    wm.subscribe(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// Ids of open windows, lowest z-index first
pub fn stack(wm: &Wm) -> Vec<String> {
    wm.get_open_windows().iter().map(|w| w.id.clone()).collect()
}

pub fn geometry(wm: &Wm, id: &str) -> Rect {
    wm.get(id).map(|w| w.geometry).unwrap_or_default()
}
