//! In-memory stand-ins for page elements and the container.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gravity_bridge::domain::outline::PlacedOutline;
use gravity_bridge::{BodyElement, Container, Cursor, GravityConfig, GravityCore, RenderSurface, Size};

pub const FRAME_MS: f64 = 1000.0 / 60.0;

struct ElementState {
    size: Size,
    paths: Vec<String>,
    transform: RefCell<Option<String>>,
    writes: Cell<usize>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<ElementState>);

impl FakeElement {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_paths(width, height, &[])
    }

    pub fn with_paths(width: f64, height: f64, paths: &[&str]) -> Self {
        Self(Rc::new(ElementState {
            size: Size::new(width, height),
            paths: paths.iter().map(|d| d.to_string()).collect(),
            transform: RefCell::new(None),
            writes: Cell::new(0),
        }))
    }

    pub fn transform(&self) -> Option<String> {
        self.0.transform.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.0.writes.get()
    }
}

impl BodyElement for FakeElement {
    fn offset_size(&self) -> Size {
        self.0.size
    }

    fn path_data(&self) -> Vec<String> {
        self.0.paths.clone()
    }

    fn set_transform(&self, transform: &str) {
        *self.0.transform.borrow_mut() = Some(transform.to_string());
        self.0.writes.set(self.0.writes.get() + 1);
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Default)]
struct ContainerState {
    size: Cell<Option<Size>>,
    cursor: Cell<Cursor>,
    attached: Cell<usize>,
    detached: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakeContainer(Rc<ContainerState>);

impl FakeContainer {
    pub fn sized(width: f64, height: f64) -> Self {
        let container = Self::default();
        container.resize(width, height);
        container
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.0.size.set(Some(Size::new(width, height)));
    }

    pub fn cursor(&self) -> Cursor {
        self.0.cursor.get()
    }

    /// Surfaces still on the page.
    pub fn live_surfaces(&self) -> usize {
        self.0.attached.get() - self.0.detached.get()
    }
}

pub struct FakeSurface(Rc<ContainerState>);

impl RenderSurface for FakeSurface {
    fn draw(&mut self, _outlines: &[PlacedOutline<'_>]) {}

    fn detach(&mut self) {
        self.0.detached.set(self.0.detached.get() + 1);
    }
}

impl Container for FakeContainer {
    type Surface = FakeSurface;

    fn bounding_size(&self) -> Option<Size> {
        self.0.size.get()
    }

    fn set_cursor(&self, cursor: Cursor) {
        self.0.cursor.set(cursor);
    }

    fn attach_surface(&self, _size: Size) -> Option<FakeSurface> {
        self.0.attached.set(self.0.attached.get() + 1);
        Some(FakeSurface(self.0.clone()))
    }
}

pub type Core = GravityCore<FakeElement, FakeContainer>;

pub fn setup(width: f64, height: f64, config: GravityConfig) -> (Core, FakeContainer) {
    let container = FakeContainer::sized(width, height);
    (GravityCore::new(container.clone(), config), container)
}

/// Advance `count` frames of `FRAME_MS` from `now`; returns the last timestamp.
pub fn frames(core: &mut Core, mut now: f64, count: usize) -> f64 {
    for _ in 0..count {
        now += FRAME_MS;
        core.frame(now).expect("frame");
    }
    now
}
