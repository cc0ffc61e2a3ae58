//! Core data models for the grid command map.
//! Placements, the active selection, the per-module content cache and the
//! drag controller all live in one reducible `MapState`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

use crate::catalog::{self, ModuleDef};
use crate::state::{DragSession, DragSource, Viewport};
use crate::util::{clog, cwarn};

pub const DEFAULT_ACTIVE_COLOR: &str = "#ff9933";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlob {
    /// Present in the payload but not rendered by any panel mode.
    pub status_update: String,
    pub technical_metrics: String,
    pub impact_analysis: String,
}

impl ContentBlob {
    pub fn mock() -> Self {
        Self {
            status_update: "Grid stability at 98%. No active faults.".to_string(),
            technical_metrics: "Load: 450MW | Freq: 50.02Hz".to_string(),
            impact_analysis: "Minimal impact on residential sectors.".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContentSlot {
    /// Marked for fetching; the fetch has not been spawned yet.
    Requested,
    Loading,
    Ready(ContentBlob),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub module_id: String,
    pub instance_id: String,
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn module(&self) -> Option<&'static ModuleDef> {
        catalog::find_module(&self.module_id)
    }
}

/// Placed instances. At most one placement per module id; instance ids are never reused.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementStore {
    placements: Vec<Placement>,
    next_seq: u64,
}

impl PlacementStore {
    /// Places `module_id` at (x, y). Returns the new instance id, or None when the
    /// module is unknown or already placed.
    pub fn add(&mut self, module_id: &str, x: f64, y: f64) -> Option<String> {
        catalog::find_module(module_id)?;
        if self.is_placed(module_id) {
            return None;
        }
        self.next_seq += 1;
        let instance_id = format!("{}-{}", module_id, self.next_seq);
        self.placements.push(Placement {
            module_id: module_id.to_string(),
            instance_id: instance_id.clone(),
            x,
            y,
        });
        Some(instance_id)
    }

    pub fn update_position(&mut self, instance_id: &str, x: f64, y: f64) -> bool {
        match self.placements.iter_mut().find(|p| p.instance_id == instance_id) {
            Some(p) => {
                p.x = x;
                p.y = y;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, instance_id: &str) -> Option<Placement> {
        let idx = self.placements.iter().position(|p| p.instance_id == instance_id)?;
        Some(self.placements.remove(idx))
    }

    pub fn get(&self, instance_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.instance_id == instance_id)
    }

    pub fn is_placed(&self, module_id: &str) -> bool {
        self.placements.iter().any(|p| p.module_id == module_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSelection {
    pub zone_id: Option<&'static str>,
    pub color: &'static str,
    pub instance_id: Option<String>,
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self { zone_id: None, color: DEFAULT_ACTIVE_COLOR, instance_id: None }
    }
}

impl ActiveSelection {
    fn activate(&mut self, module: &ModuleDef) {
        self.zone_id = Some(module.zone_id);
        self.color = module.color;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    pub store: PlacementStore,
    pub selection: ActiveSelection,
    /// Content cache keyed by module id, shared by every placement of that module.
    pub content: HashMap<String, ContentSlot>,
    pub drag: Option<DragSession>,
    /// Selection in effect when the current dock drag began; restored if the drop is discarded.
    selection_before_drag: Option<ActiveSelection>,
    pub viewport: Viewport,
    /// Bumped whenever a module is newly marked `Requested`.
    pub fetch_epoch: u64,
}

impl MapState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            store: PlacementStore::default(),
            selection: ActiveSelection::default(),
            content: HashMap::new(),
            drag: None,
            selection_before_drag: None,
            viewport,
            fetch_epoch: 0,
        }
    }

    /// Catalog modules with no placement, in catalog order.
    pub fn dock_modules(&self) -> Vec<&'static ModuleDef> {
        catalog::MODULES
            .iter()
            .filter(|m| !self.store.is_placed(m.id))
            .collect()
    }

    pub fn content_for(&self, module_id: &str) -> Option<&ContentBlob> {
        match self.content.get(module_id) {
            Some(ContentSlot::Ready(blob)) => Some(blob),
            _ => None,
        }
    }

    pub fn is_loading(&self, module_id: &str) -> bool {
        matches!(
            self.content.get(module_id),
            Some(ContentSlot::Requested | ContentSlot::Loading)
        )
    }

    /// Module ids marked for fetching but not yet spawned.
    pub fn requested_modules(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .content
            .iter()
            .filter(|(_, slot)| matches!(slot, ContentSlot::Requested))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Marks the module for fetching unless it already has a cache slot.
    pub fn request_content(&mut self, module_id: &str) -> bool {
        if self.content.contains_key(module_id) {
            return false;
        }
        self.content.insert(module_id.to_string(), ContentSlot::Requested);
        self.fetch_epoch += 1;
        true
    }

    fn start_session(&mut self, session: DragSession) {
        if let Some(prev) = &self.drag {
            cwarn(&format!(
                "drag: session for {} replaced by {}",
                prev.module_id, session.module_id
            ));
        } else {
            self.selection_before_drag = Some(self.selection.clone());
        }
        self.drag = Some(session);
    }

    pub fn begin_dock_drag(&mut self, module_id: &str, x: f64, y: f64) {
        let Some(module) = catalog::find_module(module_id) else {
            return;
        };
        if self.store.is_placed(module_id) {
            return;
        }
        self.start_session(DragSession::new(module_id, DragSource::Dock, x, y));
        self.selection.activate(module);
    }

    pub fn begin_node_drag(&mut self, instance_id: &str, x: f64, y: f64) {
        let Some(placement) = self.store.get(instance_id) else {
            return;
        };
        let Some(module) = placement.module() else {
            return;
        };
        let source = DragSource::Placed {
            instance_id: instance_id.to_string(),
            origin: (placement.x, placement.y),
        };
        self.start_session(DragSession::new(module.id, source, x, y));
        self.selection.activate(module);
        self.selection.instance_id = Some(instance_id.to_string());
    }

    pub fn drag_move(&mut self, x: f64, y: f64) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.cursor = (x, y);
        let moved = session.placed_position(x, y, &self.viewport);
        if let (Some((nx, ny)), DragSource::Placed { instance_id, .. }) = (moved, &session.source) {
            let instance_id = instance_id.clone();
            self.store.update_position(&instance_id, nx, ny);
        }
    }

    /// Ends the session. Returns the new instance id when a dock drop was committed.
    pub fn end_drag(&mut self, x: f64, y: f64) -> Option<String> {
        self.drag_move(x, y);
        let session = self.drag.take()?;
        let prior = self.selection_before_drag.take();
        if !session.is_new() {
            return None;
        }
        let (fx, fy) = self.viewport.clamp(x, y);
        let placed = if self.viewport.accepts_drop(fy) {
            self.store.add(&session.module_id, fx, fy)
        } else {
            None
        };
        match &placed {
            Some(instance_id) => {
                clog(&format!("drop: {} at ({fx:.0}, {fy:.0})", instance_id));
                self.selection.instance_id = Some(instance_id.clone());
                self.request_content(&session.module_id);
            }
            None => {
                clog(&format!("drop: {} discarded", session.module_id));
                if let Some(prior) = prior {
                    self.selection = prior;
                }
            }
        }
        placed
    }

    pub fn remove(&mut self, instance_id: &str) {
        if self.store.remove(instance_id).is_none() {
            return;
        }
        clog(&format!("remove: {instance_id} ({} placed)", self.store.len()));
        if self.selection.instance_id.as_deref() == Some(instance_id) {
            self.selection.instance_id = None;
            self.selection.zone_id = None;
        }
        let dragging_removed = matches!(
            &self.drag,
            Some(DragSession { source: DragSource::Placed { instance_id: id, .. }, .. }) if id == instance_id
        );
        if dragging_removed {
            self.drag = None;
            self.selection_before_drag = None;
        }
    }

    /// A content mode was selected on a node: it becomes active and its content is requested.
    pub fn select_content(&mut self, instance_id: &str) {
        let Some(module) = self.store.get(instance_id).and_then(Placement::module) else {
            return;
        };
        self.selection.activate(module);
        self.selection.instance_id = Some(instance_id.to_string());
        self.request_content(module.id);
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum MapAction {
    BeginDockDrag { module_id: String, x: f64, y: f64 },
    BeginNodeDrag { instance_id: String, x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    EndDrag { x: f64, y: f64 },
    Remove { instance_id: String },
    SelectContent { instance_id: String },
    FetchStarted { module_id: String },
    ContentLoaded { module_id: String, blob: ContentBlob },
    Resize { width: f64, height: f64 },
}

impl Reducible for MapState {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MapAction::*;
        let mut new = (*self).clone();
        match action {
            BeginDockDrag { module_id, x, y } => new.begin_dock_drag(&module_id, x, y),
            BeginNodeDrag { instance_id, x, y } => new.begin_node_drag(&instance_id, x, y),
            DragMove { x, y } => {
                if self.drag.is_none() {
                    return self;
                }
                new.drag_move(x, y);
            }
            EndDrag { x, y } => {
                new.end_drag(x, y);
            }
            Remove { instance_id } => new.remove(&instance_id),
            SelectContent { instance_id } => new.select_content(&instance_id),
            FetchStarted { module_id } => {
                if matches!(new.content.get(&module_id), Some(ContentSlot::Requested)) {
                    new.content.insert(module_id, ContentSlot::Loading);
                }
            }
            ContentLoaded { module_id, blob } => {
                new.content.insert(module_id, ContentSlot::Ready(blob));
            }
            Resize { width, height } => {
                new.viewport = Viewport { width, height };
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const VP: Viewport = Viewport { width: 1280.0, height: 800.0 };

    fn drop_from_dock(state: &mut MapState, module_id: &str, x: f64, y: f64) -> Option<String> {
        state.begin_dock_drag(module_id, 640.0, 760.0);
        state.drag_move(x, y);
        state.end_drag(x, y)
    }

    #[test]
    fn industrial_drop_scenario() {
        let mut state = MapState::new(VP);
        let id = drop_from_dock(&mut state, "industrial", 500.0, 400.0).unwrap();

        assert_eq!(state.store.len(), 1);
        let p = state.store.get(&id).unwrap();
        assert_eq!((p.x, p.y), (500.0, 400.0));
        assert!(state.dock_modules().iter().all(|m| m.id != "industrial"));
        assert_eq!(state.selection.zone_id, Some("dasarahalli"));
        assert_eq!(state.selection.color, "#5ac8fa");
        assert_eq!(state.selection.instance_id.as_deref(), Some(id.as_str()));
        assert!(state.drag.is_none());
        assert_eq!(state.requested_modules(), vec!["industrial".to_string()]);
        assert!(state.is_loading("industrial"));
    }

    #[test]
    fn drop_inside_dock_strip_creates_nothing() {
        let mut state = MapState::new(VP);
        assert!(drop_from_dock(&mut state, "ev_grid", 500.0, 750.0).is_none());
        assert_eq!(state.store.len(), 0);
        assert!(state.drag.is_none());
        assert_eq!(state.selection, ActiveSelection::default());
        assert!(state.content.is_empty());
    }

    #[test]
    fn dropping_off_screen_is_clamped_into_viewport() {
        let mut state = MapState::new(VP);
        let id = drop_from_dock(&mut state, "renewables", -40.0, 300.0).unwrap();
        let p = state.store.get(&id).unwrap();
        assert_eq!((p.x, p.y), (0.0, 300.0));
    }

    #[test]
    fn instance_ids_stay_unique_across_add_remove() {
        let mut state = MapState::new(VP);
        let mut seen = HashSet::new();
        for round in 0..5 {
            for m in ["industrial", "corporate", "overload"] {
                let id = drop_from_dock(&mut state, m, 100.0 + round as f64, 200.0).unwrap();
                assert!(seen.insert(id));
            }
            let ids: Vec<String> = state.store.iter().map(|p| p.instance_id.clone()).collect();
            let unique: HashSet<_> = ids.iter().collect();
            assert_eq!(unique.len(), ids.len());
            for id in ids {
                state.remove(&id);
            }
        }
        assert_eq!(state.store.len(), 0);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = MapState::new(VP);
        let id = drop_from_dock(&mut state, "corporate", 300.0, 300.0).unwrap();
        state.remove(&id);
        let snapshot = state.clone();
        state.remove(&id);
        state.remove("nope-99");
        assert_eq!(state, snapshot);
    }

    #[test]
    fn one_placement_per_module() {
        let mut state = MapState::new(VP);
        drop_from_dock(&mut state, "overload", 300.0, 300.0).unwrap();
        state.begin_dock_drag("overload", 10.0, 10.0);
        assert!(state.drag.is_none());
        assert!(state.store.add("overload", 1.0, 1.0).is_none());
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn dragging_existing_placement_applies_clamped_delta() {
        let mut state = MapState::new(VP);
        let id = drop_from_dock(&mut state, "maintenance", 400.0, 300.0).unwrap();

        state.begin_node_drag(&id, 410.0, 310.0);
        state.drag_move(460.0, 290.0);
        let p = state.store.get(&id).unwrap();
        assert_eq!((p.x, p.y), (450.0, 280.0));

        state.drag_move(5000.0, -900.0);
        assert_eq!(state.end_drag(5000.0, -900.0), None);
        let p = state.store.get(&id).unwrap();
        assert_eq!((p.x, p.y), (VP.width, 0.0));
        assert!(state.drag.is_none());
    }

    #[test]
    fn removing_active_instance_clears_highlight() {
        let mut state = MapState::new(VP);
        let a = drop_from_dock(&mut state, "industrial", 200.0, 200.0).unwrap();
        let b = drop_from_dock(&mut state, "corporate", 600.0, 200.0).unwrap();
        assert_eq!(state.selection.instance_id.as_deref(), Some(b.as_str()));

        state.remove(&a);
        assert_eq!(state.selection.zone_id, Some("mahadevapura"));
        assert_eq!(state.selection.instance_id.as_deref(), Some(b.as_str()));

        state.remove(&b);
        assert_eq!(state.selection.zone_id, None);
        assert_eq!(state.selection.instance_id, None);
    }

    #[test]
    fn content_is_fetched_at_most_once_per_module() {
        let mut state = MapState::new(VP);
        let first = drop_from_dock(&mut state, "industrial", 200.0, 200.0).unwrap();
        let epoch = state.fetch_epoch;
        state.remove(&first);
        let second = drop_from_dock(&mut state, "industrial", 250.0, 250.0).unwrap();
        state.select_content(&second);
        assert_eq!(state.fetch_epoch, epoch);
        assert_eq!(state.requested_modules().len(), 1);

        let rc = Rc::new(state).reduce(MapAction::FetchStarted { module_id: "industrial".into() });
        assert!(rc.requested_modules().is_empty());
        assert!(rc.is_loading("industrial"));
        let rc = rc.reduce(MapAction::ContentLoaded {
            module_id: "industrial".into(),
            blob: ContentBlob::mock(),
        });
        assert_eq!(rc.content_for("industrial"), Some(&ContentBlob::mock()));
        assert!(!rc.is_loading("industrial"));
    }

    #[test]
    fn late_content_for_removed_instance_is_still_cached() {
        let mut state = MapState::new(VP);
        let id = drop_from_dock(&mut state, "ev_grid", 200.0, 200.0).unwrap();
        state.remove(&id);
        let rc = Rc::new(state).reduce(MapAction::ContentLoaded {
            module_id: "ev_grid".into(),
            blob: ContentBlob::mock(),
        });
        assert_eq!(rc.store.len(), 0);
        assert!(rc.content_for("ev_grid").is_some());
    }

    #[test]
    fn selecting_content_activates_instance_and_requests_once() {
        let mut state = MapState::new(VP);
        let a = drop_from_dock(&mut state, "industrial", 200.0, 200.0).unwrap();
        let _b = drop_from_dock(&mut state, "renewables", 600.0, 200.0).unwrap();
        state.content.insert("industrial".into(), ContentSlot::Ready(ContentBlob::mock()));
        let epoch = state.fetch_epoch;

        state.select_content(&a);
        assert_eq!(state.selection.instance_id.as_deref(), Some(a.as_str()));
        assert_eq!(state.selection.zone_id, Some("dasarahalli"));
        assert_eq!(state.fetch_epoch, epoch);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut state = MapState::new(VP);
        state.begin_dock_drag("fusion_reactor", 0.0, 0.0);
        state.begin_node_drag("ghost-1", 0.0, 0.0);
        state.select_content("ghost-1");
        assert_eq!(state, MapState::new(VP));
        assert!(state.end_drag(10.0, 10.0).is_none());
    }

    #[test]
    fn second_pointer_down_replaces_session() {
        let mut state = MapState::new(VP);
        state.begin_dock_drag("industrial", 0.0, 0.0);
        state.begin_dock_drag("corporate", 5.0, 5.0);
        let id = state.end_drag(300.0, 300.0).unwrap();
        assert!(id.starts_with("corporate-"));
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn moves_without_session_do_not_rerender() {
        let rc = Rc::new(MapState::new(VP));
        let next = rc.clone().reduce(MapAction::DragMove { x: 1.0, y: 1.0 });
        assert!(Rc::ptr_eq(&rc, &next));
    }
}
