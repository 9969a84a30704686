use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::domain::config::GravityConfig;
use crate::domain::props::BodyProps;
use crate::simulation::GravityCore;
use crate::utils::clock::now_ms;

use super::dom::{DomContainer, DomElement};

type DomCore = GravityCore<DomElement, DomContainer>;

struct Shared {
    core: RefCell<DomCore>,
    container: DomContainer,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
    mounted: Cell<bool>,
    next_id: Cell<u32>,
}

/// Gravity container handle exposed to JavaScript.
///
/// ```js
/// const gravity = new Gravity(container, JSON.stringify({ debug: true }));
/// gravity.registerElement(gravity.nextElementId(), el, JSON.stringify({ bodyType: "circle", x: "50%" }));
/// gravity.mount();
/// ```
#[wasm_bindgen]
pub struct Gravity {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl Gravity {
    /// Create a handle for `container`. `config_json` may be empty.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config_json: &str) -> Result<Gravity, JsValue> {
        let config = GravityConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let container = DomContainer::new(container);
        Ok(Self {
            shared: Rc::new(Shared {
                core: RefCell::new(GravityCore::new(container.clone(), config)),
                container,
                frame: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
                mounted: Cell::new(false),
                next_id: Cell::new(0),
            }),
        })
    }

    /// Build the world, hook up resize and pointer events, start the frame loop.
    pub fn mount(&self) -> Result<(), JsValue> {
        if self.shared.mounted.replace(true) {
            return Ok(());
        }
        install_listeners(&self.shared);
        schedule_frame(&self.shared);
        self.shared
            .core
            .borrow_mut()
            .initialize(now_ms())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = registerElement)]
    pub fn register_element(&self, id: &str, element: HtmlElement, props_json: &str) -> Result<(), JsValue> {
        let props = BodyProps::from_json(props_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.shared
            .core
            .borrow_mut()
            .register_element(id, DomElement::new(element), props)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = unregisterElement)]
    pub fn unregister_element(&self, id: &str) -> bool {
        self.shared.core.borrow_mut().unregister_element(id)
    }

    /// Fresh id for hosts without one of their own.
    #[wasm_bindgen(js_name = nextElementId)]
    pub fn next_element_id(&self) -> String {
        let n = self.shared.next_id.get();
        self.shared.next_id.set(n + 1);
        format!("gravity-body-{n}")
    }

    pub fn start(&self) {
        self.shared.core.borrow_mut().start(now_ms());
    }

    pub fn stop(&self) {
        self.shared.core.borrow_mut().stop();
    }

    pub fn reset(&self) {
        self.shared.core.borrow_mut().reset();
    }

    /// Stop the loop, drop listeners and tear the world down.
    pub fn unmount(&self) {
        self.shared.mounted.set(false);
        self.shared.frame.borrow_mut().take();
        self.shared.listeners.borrow_mut().clear();
        self.shared.core.borrow_mut().unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.shared.core.borrow().is_running()
    }

    #[wasm_bindgen(getter, js_name = bodyCount)]
    pub fn body_count(&self) -> u32 {
        self.shared.core.borrow().hydrated_count() as u32
    }
}

impl Drop for Gravity {
    fn drop(&mut self) {
        if self.shared.mounted.get() {
            self.unmount();
        }
    }
}

fn schedule_frame(shared: &Rc<Shared>) {
    let weak = Rc::downgrade(shared);
    let handle = request_animation_frame(move |timestamp| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        shared.frame.borrow_mut().take();
        if !shared.mounted.get() {
            return;
        }
        {
            let mut core = shared.core.borrow_mut();
            // The container may have had no size at mount.
            if !core.is_initialized() {
                if let Err(err) = core.initialize(timestamp) {
                    bridge_log!("gravity: {}", err);
                }
            }
            if let Err(err) = core.frame(timestamp) {
                bridge_log!("gravity: {}", err);
            }
        }
        schedule_frame(&shared);
    });
    *shared.frame.borrow_mut() = Some(handle);
}

fn install_listeners(shared: &Rc<Shared>) {
    let mut listeners = Vec::new();
    let node = shared.container.node().clone();

    if let Some(window) = web_sys::window() {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(&window, "resize", move |_event| {
            with_core(&weak, |core, _| core.request_resize(now_ms()));
        }));
    }

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(&node, "mousedown", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        with_core(&weak, |core, container| {
            let (x, y) = container.local_point(event);
            core.pointer_down(x, y);
        });
    }));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(&node, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        with_core(&weak, |core, container| {
            let (x, y) = container.local_point(event);
            core.pointer_move(x, y);
        });
    }));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(&node, "mouseup", move |_event| {
        with_core(&weak, |core, _| core.pointer_up());
    }));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(&node, "mouseleave", move |_event| {
        with_core(&weak, |core, _| core.pointer_leave());
    }));

    *shared.listeners.borrow_mut() = listeners;
}

fn with_core(weak: &Weak<Shared>, f: impl FnOnce(&mut DomCore, &DomContainer)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    // Listeners can fire while a frame holds the core (nested dispatch);
    // drop the event rather than panic.
    let Ok(mut core) = shared.core.try_borrow_mut() else {
        return;
    };
    f(&mut core, &shared.container);
}
