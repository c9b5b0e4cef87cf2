use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// How far ahead of the visible area thumbnails start loading.
pub const PRELOAD_MARGIN_PX: u32 = 300;

/// Thumbnails above the fold skip deferred loading.
pub const EAGER_COUNT: usize = 2;

/// Whether the thumbnail at `display_index` of the filtered list loads at
/// once. Re-evaluated on every render, since a filter change moves items.
pub fn loads_eagerly(display_index: usize) -> bool {
    display_index < EAGER_COUNT
}

/// A request made once stays made; an eager render forces it.
pub fn load_requested(observed: bool, start_requested: bool) -> bool {
    observed || start_requested
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    NotRequested,
    Requested,
}

/// One-way `NotRequested -> Requested` switch. Observers may deliver several
/// intersecting entries before they are torn down; only the first counts.
#[derive(Debug)]
pub struct VisibilityTracker {
    state: Cell<LoadState>,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self { state: Cell::new(LoadState::NotRequested) }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    /// Returns true only for the call that performed the transition.
    pub fn trigger(&self) -> bool {
        match self.state.get() {
            LoadState::NotRequested => {
                self.state.set(LoadState::Requested);
                true
            }
            LoadState::Requested => false,
        }
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Live intersection observer for one element. Dropping it disconnects the
/// observer, so no callback can fire against a torn-down component.
pub struct ViewportSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_viewport<F>(element: &Element, margin_px: u32, on_enter: F) -> Result<ViewportSubscription, JsValue>
where
    F: Fn() + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if entered {
                on_enter();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&format!("{}px 0px", margin_px));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(ViewportSubscription { observer, _callback: callback })
}

/// True once `node` has come within `margin_px` of the viewport, or whenever
/// `start_requested` is set (it may turn on after mount). The observer is
/// dropped as soon as the flag flips and on unmount.
#[hook]
pub fn use_viewport_once(node: NodeRef, margin_px: u32, start_requested: bool) -> bool {
    let observed = use_state(|| start_requested);
    let already = load_requested(*observed, start_requested);

    {
        let requested = observed.clone();
        use_effect_with_deps(
            move |(node, already): &(NodeRef, bool)| {
                let mut subscription = None;
                if !*already {
                    if let Some(element) = node.cast::<Element>() {
                        let tracker = Rc::new(VisibilityTracker::new());
                        let setter = requested.setter();
                        let result = observe_viewport(&element, margin_px, move || {
                            if tracker.trigger() {
                                setter.set(true);
                            }
                        });
                        match result {
                            Ok(sub) => subscription = Some(sub),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable, loading eagerly: {:?}", err);
                                requested.set(true);
                            }
                        }
                    }
                }
                move || drop(subscription)
            },
            (node, already),
        );
    }

    already
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_requested() {
        assert_eq!(VisibilityTracker::new().state(), LoadState::NotRequested);
    }

    #[test]
    fn trigger_fires_once() {
        let tracker = VisibilityTracker::new();
        assert!(tracker.trigger());
        assert_eq!(tracker.state(), LoadState::Requested);
        assert!(!tracker.trigger());
        assert!(!tracker.trigger());
        assert_eq!(tracker.state(), LoadState::Requested);
    }

    #[test]
    fn first_two_positions_are_eager() {
        assert!(loads_eagerly(0));
        assert!(loads_eagerly(1));
        assert!(!loads_eagerly(2));
        assert!(!loads_eagerly(7));
    }

    #[test]
    fn eager_position_forces_request_after_mount() {
        // Mounted lazily, never observed, then moved to the top by a filter.
        assert!(!load_requested(false, false));
        assert!(load_requested(false, true));
        // Moving back down never un-requests.
        assert!(load_requested(true, false));
    }

    #[test]
    fn side_effect_runs_once_through_shared_tracker() {
        let tracker = Rc::new(VisibilityTracker::new());
        let fired = Rc::new(Cell::new(0));
        let on_enter = {
            let tracker = tracker.clone();
            let fired = fired.clone();
            move || {
                if tracker.trigger() {
                    fired.set(fired.get() + 1);
                }
            }
        };
        on_enter();
        on_enter();
        assert_eq!(fired.get(), 1);
    }
}
