//! The window tree and the protocol that keeps the shared canvas consistent
//! with it.
//!
//! Painting model
//! - Every paint starts by computing the window's visible clip: the dirty
//!   rects (or the whole screen) narrowed by each ancestor's client area and
//!   carved by every sibling stacked above along the way.
//! - Decorations are drawn first, then the clip shrinks to the client area,
//!   children are carved out, and the window's kind paints in local
//!   coordinates.
//! - The canvas clip is always cleared before a traversal step returns, so
//!   callers never observe stale clip state.
//!
//! Input model
//! - `dispatch_mouse` only updates tree state (z-order, drag offsets,
//!   positions, button edges) and reports what happened.
//! - `handle_pointer` is the desktop-level driver that turns that report into
//!   repaints, widget notifications and the pointer sprite.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::decorator::{DefaultDecorator, WindowDecorator};
use super::{CompositorError, DragState, Window, WindowId, WindowSpec, check_position};
use crate::canvas::Canvas;
use crate::components::desktop::CURSOR_SPRITE;
use crate::components::{Component, Desktop, PaintContext, WidgetCommand, WidgetEvent, WindowKind};
use crate::constants::{CURSOR_HEIGHT, CURSOR_WIDTH, MAX_COORDINATE};
use crate::drivers::PointerSample;
use crate::rect::Rect;
use crate::region::Region;

/// A child position change made by an active titlebar drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragMove {
    pub window: WindowId,
    pub from: (i32, i32),
    pub to: (i32, i32),
}

/// A press edge delivered to a window that no child consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressRecord {
    pub window: WindowId,
    /// Client coordinates of the press.
    pub x: i32,
    pub y: i32,
    pub event: Option<WidgetEvent>,
}

/// Everything a single mouse dispatch changed in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Windows moved to the top of their siblings, outermost first.
    pub raised: Vec<WindowId>,
    /// Former active children that lost focus to a raised sibling.
    pub deactivated: Vec<WindowId>,
    pub moved: Vec<DragMove>,
    pub pressed: Vec<PressRecord>,
}

impl DispatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.raised.is_empty()
            && self.deactivated.is_empty()
            && self.moved.is_empty()
            && self.pressed.is_empty()
    }

    /// Whether `window` reported `event` during this dispatch.
    pub fn reported(&self, window: WindowId, event: WidgetEvent) -> bool {
        self.pressed
            .iter()
            .any(|p| p.window == window && p.event == Some(event))
    }
}

struct RaiseChange {
    reordered: bool,
    previous_active: Option<WindowId>,
}

#[derive(Debug)]
pub struct Compositor {
    windows: BTreeMap<WindowId, Window>,
    next_window_seq: u64,
    root: WindowId,
    canvas: Canvas,
    decorator: Arc<dyn WindowDecorator>,
    // last drawn pointer sprite origin
    cursor: Option<(i32, i32)>,
}

impl Compositor {
    /// Create a compositor over a `width x height` buffer with an undecorated
    /// desktop window as the root.
    pub fn new(width: u16, height: u16) -> Result<Self, CompositorError> {
        if width == 0 || height == 0 {
            return Err(CompositorError::EmptyCanvas { width, height });
        }
        let canvas = Canvas::new(width, height)?;
        let root = WindowId::from_raw(0);
        let mut windows = BTreeMap::new();
        windows.insert(
            root,
            Window::new(
                None,
                WindowSpec::undecorated(0, 0, width, height),
                WindowKind::Desktop(Desktop),
            ),
        );
        tracing::debug!(window_id = ?root, width, height, "created desktop");
        Ok(Self {
            windows,
            next_window_seq: 1,
            root,
            canvas,
            decorator: Arc::new(DefaultDecorator),
            cursor: None,
        })
    }

    pub fn set_decorator(&mut self, decorator: Arc<dyn WindowDecorator>) {
        self.decorator = decorator;
    }

    pub fn root(&self) -> WindowId {
        self.root
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn kind_mut(&mut self, id: WindowId) -> Option<&mut WindowKind> {
        self.windows.get_mut(&id).map(|w| &mut w.kind)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    fn check(&self, id: WindowId) -> Result<&Window, CompositorError> {
        self.windows
            .get(&id)
            .ok_or(CompositorError::UnknownWindow(id))
    }

    /// Internal lookup for ids already known to be live.
    ///
    /// Panics if `id` was removed; public entry points validate ids first.
    fn node(&self, id: WindowId) -> &Window {
        &self.windows[&id]
    }

    /// Create a window as the topmost child of `parent`. The new window
    /// becomes the parent's active child. Nothing is painted.
    pub fn create_window(
        &mut self,
        parent: WindowId,
        spec: WindowSpec,
        kind: WindowKind,
    ) -> Result<WindowId, CompositorError> {
        self.check(parent)?;
        spec.validate()?;

        let id = WindowId::from_raw(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.saturating_add(1);
        self.windows.insert(id, Window::new(Some(parent), spec, kind));
        if let Some(p) = self.windows.get_mut(&parent) {
            p.children.push(id);
            p.active_child = Some(id);
        }
        tracing::debug!(
            window_id = ?id,
            parent = ?parent,
            x = spec.x,
            y = spec.y,
            width = spec.width,
            height = spec.height,
            "opened window"
        );
        Ok(id)
    }

    /// Detach `id` from its parent and drop its whole subtree. Returns the
    /// screen rect the window used to cover. Nothing is repainted.
    pub fn remove_window(&mut self, id: WindowId) -> Result<Rect, CompositorError> {
        let window = self.check(id)?;
        let Some(parent) = window.parent else {
            return Err(CompositorError::RootWindow);
        };
        let vacated = self.outer_rect(id);

        if let Some(p) = self.windows.get_mut(&parent) {
            p.children.retain(|&c| c != id);
            if p.active_child == Some(id) {
                p.active_child = p.children.last().copied();
            }
            if p.drag.is_some_and(|d| d.child == id) {
                p.drag = None;
            }
        }

        let mut stack = vec![id];
        let mut removed = 0usize;
        while let Some(next) = stack.pop() {
            if let Some(window) = self.windows.remove(&next) {
                stack.extend(window.children);
                removed += 1;
            }
        }
        tracing::debug!(window_id = ?id, removed, "closed window");
        Ok(vacated)
    }

    /// Remove `id` and repaint whatever it was covering.
    pub fn close_window(&mut self, id: WindowId) -> Result<(), CompositorError> {
        let vacated = self.remove_window(id)?;
        self.invalidate_screen(vacated);
        Ok(())
    }

    // ---- geometry ----
    //
    // Screen coordinates saturate: a deep chain of far-placed windows lands
    // at the edge of the i32 range and clips away instead of wrapping.

    fn screen_origin(&self, id: WindowId) -> (i32, i32) {
        let window = self.node(id);
        match window.parent {
            None => (window.x, window.y),
            Some(parent) => {
                let (px, py) = self.screen_origin(parent);
                let (ox, oy) = self.node(parent).client_offset();
                (
                    px.saturating_add(ox).saturating_add(window.x),
                    py.saturating_add(oy).saturating_add(window.y),
                )
            }
        }
    }

    fn outer_rect(&self, id: WindowId) -> Rect {
        let (x, y) = self.screen_origin(id);
        let window = self.node(id);
        Rect::from_edges(
            y,
            x,
            y.saturating_add(window.height as i32 - 1),
            x.saturating_add(window.width as i32 - 1),
        )
    }

    fn inner_rect(&self, id: WindowId) -> Rect {
        let (x, y) = self.screen_origin(id);
        let window = self.node(id);
        let (ox, oy) = window.client_offset();
        let (w, h) = window.client_size();
        let (left, top) = (x.saturating_add(ox), y.saturating_add(oy));
        Rect::from_edges(
            top,
            left,
            top.saturating_add(h as i32 - 1),
            left.saturating_add(w as i32 - 1),
        )
    }

    pub fn screen_x(&self, id: WindowId) -> Result<i32, CompositorError> {
        self.check(id)?;
        Ok(self.screen_origin(id).0)
    }

    pub fn screen_y(&self, id: WindowId) -> Result<i32, CompositorError> {
        self.check(id)?;
        Ok(self.screen_origin(id).1)
    }

    /// Outer bounds of `id` in screen coordinates.
    pub fn screen_rect(&self, id: WindowId) -> Result<Rect, CompositorError> {
        self.check(id)?;
        Ok(self.outer_rect(id))
    }

    /// Client area of `id` in screen coordinates.
    pub fn client_rect(&self, id: WindowId) -> Result<Rect, CompositorError> {
        self.check(id)?;
        Ok(self.inner_rect(id))
    }

    // ---- clipping ----

    /// Leave the visible clip of `id` in the canvas region.
    ///
    /// With `is_recursive_call` a decorated window contributes only its
    /// client area, which is what its descendants are limited to.
    pub fn compute_visible_clip(
        &mut self,
        id: WindowId,
        is_recursive_call: bool,
        dirty: Option<&[Rect]>,
    ) -> Result<(), CompositorError> {
        self.check(id)?;
        self.canvas.reset();
        self.apply_bound_clipping(id, is_recursive_call, dirty);
        Ok(())
    }

    /// The visible region of `id`, leaving the canvas clip cleared.
    pub fn visible_region(&mut self, id: WindowId) -> Result<Region, CompositorError> {
        self.compute_visible_clip(id, false, None)?;
        let region = Region::from_rects(self.canvas.clip_mut().take_rects());
        Ok(region)
    }

    fn apply_bound_clipping(&mut self, id: WindowId, in_recursion: bool, dirty: Option<&[Rect]>) {
        let window = self.node(id);
        let own = if in_recursion && window.style.is_decorated() {
            self.inner_rect(id)
        } else {
            self.outer_rect(id)
        };

        let Some(parent) = window.parent else {
            let clip = self.canvas.clip_mut();
            clip.clear();
            match dirty {
                Some(rects) => {
                    clip.activate();
                    for rect in rects {
                        clip.add(*rect);
                    }
                    clip.intersect(&own);
                }
                None => clip.add(own),
            }
            return;
        };

        self.apply_bound_clipping(parent, true, dirty);
        self.canvas.clip_mut().intersect(&own);

        let siblings = &self.node(parent).children;
        let Some(pos) = siblings.iter().position(|&c| c == id) else {
            return;
        };
        let above: Vec<Rect> = siblings[pos + 1..]
            .iter()
            .map(|&s| self.outer_rect(s))
            .collect();
        let clip = self.canvas.clip_mut();
        for rect in &above {
            clip.subtract(rect);
        }
    }

    // ---- painting ----

    /// Repaint `id`, limited to `dirty` screen rects when given.
    ///
    /// Children are painted after the window when `paint_children` is set;
    /// with dirty rects only the children they touch are visited.
    pub fn paint(
        &mut self,
        id: WindowId,
        dirty: Option<&[Rect]>,
        paint_children: bool,
    ) -> Result<(), CompositorError> {
        self.check(id)?;
        self.paint_window(id, dirty, paint_children);
        Ok(())
    }

    /// Full repaint of the whole tree.
    pub fn paint_screen(&mut self) {
        self.paint_window(self.root, None, true);
    }

    fn paint_window(&mut self, id: WindowId, dirty: Option<&[Rect]>, paint_children: bool) {
        self.apply_bound_clipping(id, false, dirty);

        if !self.canvas.clip().is_empty() {
            let window = self.node(id);
            let outer = self.outer_rect(id);
            let inner = self.inner_rect(id);
            let active = window
                .parent
                .is_none_or(|p| self.node(p).active_child == Some(id));
            let child_rects: Vec<Rect> =
                window.children.iter().map(|&c| self.outer_rect(c)).collect();
            tracing::trace!(window_id = ?id, clip_rects = self.canvas.clip().len(), "paint");

            let window = &self.windows[&id];
            if window.style.is_decorated() {
                self.decorator.render_window(
                    &mut self.canvas,
                    outer,
                    window.title.as_deref().unwrap_or(""),
                    active,
                );
                self.canvas.clip_mut().intersect(&inner);
            }
            for rect in &child_rects {
                self.canvas.clip_mut().subtract(rect);
            }

            self.canvas.set_translation(inner.left(), inner.top());
            let mut ctx = PaintContext::new(
                &mut self.canvas,
                inner.width(),
                inner.height(),
                window.title.as_deref(),
            );
            window.kind.paint(&mut ctx);
        }
        self.canvas.reset();

        if !paint_children {
            return;
        }
        let children = self.node(id).children.clone();
        for child in children {
            if let Some(rects) = dirty {
                let rect = self.outer_rect(child);
                if !rects.iter().any(|d| d.overlaps(&rect)) {
                    continue;
                }
            }
            self.paint_window(child, dirty, true);
        }
    }

    /// Repaint the part of the screen covered by `local`, a rect relative to
    /// the outer origin of `id`.
    pub fn invalidate(&mut self, id: WindowId, local: Rect) -> Result<(), CompositorError> {
        self.check(id)?;
        let (x, y) = self.screen_origin(id);
        self.invalidate_screen(local.translate(x, y));
        Ok(())
    }

    /// Repaint everything under `rect` (screen coordinates).
    pub fn invalidate_screen(&mut self, rect: Rect) {
        self.paint_window(self.root, Some(&[rect]), true);
    }

    fn invalidate_window(&mut self, id: WindowId) {
        let rect = self.outer_rect(id);
        self.invalidate_screen(rect);
    }

    pub fn set_title(
        &mut self,
        id: WindowId,
        text: impl Into<String>,
    ) -> Result<(), CompositorError> {
        let text = text.into();
        self.check(id)?;
        if let Some(window) = self.windows.get_mut(&id) {
            window.title = Some(text);
        }
        self.invalidate_window(id);
        Ok(())
    }

    pub fn append_title(&mut self, id: WindowId, text: &str) -> Result<(), CompositorError> {
        self.check(id)?;
        if let Some(window) = self.windows.get_mut(&id) {
            window.title.get_or_insert_with(String::new).push_str(text);
        }
        self.invalidate_window(id);
        Ok(())
    }

    // ---- stacking ----

    /// Move `id` to the top of its siblings and make it the active child.
    /// The root is left alone. Nothing is repainted.
    pub fn raise(&mut self, id: WindowId) -> Result<(), CompositorError> {
        self.check(id)?;
        self.raise_window(id);
        Ok(())
    }

    fn raise_window(&mut self, id: WindowId) -> RaiseChange {
        let mut change = RaiseChange {
            reordered: false,
            previous_active: None,
        };
        let Some(parent) = self.node(id).parent else {
            return change;
        };
        let Some(p) = self.windows.get_mut(&parent) else {
            return change;
        };
        if let Some(pos) = p.children.iter().position(|&c| c == id)
            && pos + 1 != p.children.len()
        {
            let item = p.children.remove(pos);
            p.children.push(item);
            change.reordered = true;
        }
        if p.active_child != Some(id) {
            change.previous_active = p.active_child;
            p.active_child = Some(id);
            change.reordered = true;
        }
        if change.reordered {
            tracing::debug!(window_id = ?id, "raised window");
        }
        change
    }

    fn overlapping_siblings(&self, id: WindowId, above: bool) -> Vec<WindowId> {
        let Some(parent) = self.node(id).parent else {
            return Vec::new();
        };
        let siblings = &self.node(parent).children;
        let Some(pos) = siblings.iter().position(|&c| c == id) else {
            return Vec::new();
        };
        let rect = self.outer_rect(id);
        let range = if above {
            &siblings[pos + 1..]
        } else {
            &siblings[..pos]
        };
        range
            .iter()
            .copied()
            .filter(|&s| self.outer_rect(s).overlaps(&rect))
            .collect()
    }

    /// Overlapping siblings stacked above `id`, back to front.
    pub fn windows_above(&self, id: WindowId) -> Result<Vec<WindowId>, CompositorError> {
        self.check(id)?;
        Ok(self.overlapping_siblings(id, true))
    }

    /// Overlapping siblings stacked below `id`, back to front.
    pub fn windows_below(&self, id: WindowId) -> Result<Vec<WindowId>, CompositorError> {
        self.check(id)?;
        Ok(self.overlapping_siblings(id, false))
    }

    /// Raise `id` and set its position without repainting anything. The
    /// root is left alone.
    pub fn place_window(&mut self, id: WindowId, x: i32, y: i32) -> Result<(), CompositorError> {
        let window = self.check(id)?;
        if window.parent.is_none() {
            return Ok(());
        }
        check_position(x, y)?;
        self.raise_window(id);
        if let Some(window) = self.windows.get_mut(&id) {
            window.x = x;
            window.y = y;
        }
        Ok(())
    }

    /// Raise `id`, move it to `(new_x, new_y)` in its parent's client
    /// coordinates and repaint.
    ///
    /// Only the area the window no longer covers is repainted underneath:
    /// overlapped lower siblings first, then the parent's own surface. A
    /// sibling that lost focus to the raise has its frame redrawn, and the
    /// window itself is fully repainted at its new position. Returns the
    /// exposed rects. Moving the root does nothing. A position outside the
    /// coordinate range is rejected before anything changes.
    pub fn move_window(
        &mut self,
        id: WindowId,
        new_x: i32,
        new_y: i32,
    ) -> Result<Vec<Rect>, CompositorError> {
        let window = self.check(id)?;
        let Some(parent) = window.parent else {
            return Ok(Vec::new());
        };
        check_position(new_x, new_y)?;
        let (old_x, old_y) = (window.x, window.y);
        let change = self.raise_window(id);

        self.apply_bound_clipping(id, false, None);
        let mut exposed = Region::from_rects(self.canvas.clip_mut().take_rects());
        let new_rect = self.outer_rect(id).translate(new_x - old_x, new_y - old_y);
        exposed.subtract(&new_rect);
        let exposed = exposed.take_rects();
        let below = self.overlapping_siblings(id, false);

        if let Some(window) = self.windows.get_mut(&id) {
            window.x = new_x;
            window.y = new_y;
        }
        tracing::debug!(
            window_id = ?id,
            from = ?(old_x, old_y),
            to = ?(new_x, new_y),
            exposed = exposed.len(),
            "moved window"
        );

        if !exposed.is_empty() {
            for sibling in below {
                self.paint_window(sibling, Some(&exposed), true);
            }
            self.paint_window(parent, Some(&exposed), false);
        }
        // the sibling that lost focus redraws its titlebar as inactive
        if let Some(previous) = change.previous_active
            && self.contains(previous)
        {
            self.paint_window(previous, None, false);
        }
        self.paint_window(id, None, true);
        Ok(exposed)
    }

    // ---- input ----

    /// Route a pointer sample through the subtree of `id`. `(x, y)` is
    /// relative to the outer origin of `id`.
    ///
    /// Updates z-order, drag state, dragged positions and button edges but
    /// never repaints; the outcome says what changed.
    pub fn dispatch_mouse(
        &mut self,
        id: WindowId,
        x: i32,
        y: i32,
        buttons: u8,
    ) -> Result<DispatchOutcome, CompositorError> {
        self.check(id)?;
        let mut outcome = DispatchOutcome::default();
        self.dispatch(id, x, y, buttons, &mut outcome);
        if buttons == 0 {
            self.release_subtree(id);
        }
        Ok(outcome)
    }

    fn dispatch(&mut self, id: WindowId, x: i32, y: i32, buttons: u8, out: &mut DispatchOutcome) {
        let window = self.node(id);
        let (ox, oy) = window.client_offset();
        let (cx, cy) = (x.saturating_sub(ox), y.saturating_sub(oy));
        let pressed = buttons != 0 && !window.last_button_down;
        // an active drag owns the pointer until release
        let captured = buttons != 0 && window.drag.is_some();
        let mut consumed = false;

        if !captured {
            let children = window.children.clone();
            for &child in children.iter().rev() {
                let c = self.node(child);
                if !c.hit(cx, cy) {
                    continue;
                }
                consumed = true;
                let (child_x, child_y) = (c.x, c.y);
                let in_titlebar = c.in_titlebar(cy);
                if pressed {
                    let change = self.raise_window(child);
                    if change.reordered {
                        out.raised.push(child);
                    }
                    out.deactivated.extend(change.previous_active);
                    if in_titlebar {
                        if let Some(w) = self.windows.get_mut(&id) {
                            w.drag = Some(DragState {
                                child,
                                offset_x: cx.saturating_sub(child_x),
                                offset_y: cy.saturating_sub(child_y),
                            });
                        }
                        break;
                    }
                }
                self.dispatch(
                    child,
                    cx.saturating_sub(child_x),
                    cy.saturating_sub(child_y),
                    buttons,
                    out,
                );
                break;
            }
        }

        let Some(window) = self.windows.get_mut(&id) else {
            return;
        };
        if buttons == 0 {
            window.drag = None;
        }
        let drag = window.drag;
        let event = if pressed && !consumed {
            let event = window.kind.on_press(cx, cy);
            out.pressed.push(PressRecord {
                window: id,
                x: cx,
                y: cy,
                event,
            });
            event
        } else {
            None
        };
        window.last_button_down = buttons != 0;
        if let Some(event) = event {
            tracing::debug!(window_id = ?id, ?event, x = cx, y = cy, "press");
        }

        if let Some(drag) = drag
            && let Some(child) = self.windows.get_mut(&drag.child)
        {
            let to = (
                cx.saturating_sub(drag.offset_x).clamp(-MAX_COORDINATE, MAX_COORDINATE),
                cy.saturating_sub(drag.offset_y).clamp(-MAX_COORDINATE, MAX_COORDINATE),
            );
            let from = (child.x, child.y);
            if from != to {
                child.x = to.0;
                child.y = to.1;
                out.moved.push(DragMove {
                    window: drag.child,
                    from,
                    to,
                });
            }
        }
    }

    /// Forget button and drag state below `id` after a release, including
    /// windows the release never reached.
    fn release_subtree(&mut self, id: WindowId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(window) = self.windows.get_mut(&next) {
                window.last_button_down = false;
                window.drag = None;
                stack.extend(window.children.iter().copied());
            }
        }
    }

    /// Desktop-level pointer handling: dispatch at the root, then repaint
    /// what changed, deliver widget events and redraw the pointer sprite.
    pub fn handle_pointer(
        &mut self,
        sample: PointerSample,
    ) -> Result<DispatchOutcome, CompositorError> {
        let (x, y) = (sample.x as i32, sample.y as i32);
        let outcome = self.dispatch_mouse(self.root, x, y, sample.buttons)?;

        for mv in &outcome.moved {
            // dispatch already moved the window; replay it with repaint
            if let Some(window) = self.windows.get_mut(&mv.window) {
                window.x = mv.from.0;
                window.y = mv.from.1;
            }
            self.move_window(mv.window, mv.to.0, mv.to.1)?;
        }
        for &id in &outcome.deactivated {
            if self.contains(id) {
                self.paint_window(id, None, false);
            }
        }
        for &id in &outcome.raised {
            if self.contains(id) {
                self.paint_window(id, None, true);
            }
        }
        for press in &outcome.pressed {
            let Some(event) = press.event else {
                continue;
            };
            if !self.contains(press.window) {
                continue;
            }
            self.invalidate_window(press.window);
            let Some(parent) = self.node(press.window).parent else {
                continue;
            };
            let commands = match self.windows.get_mut(&parent) {
                Some(p) => p.kind.on_child_event(press.window, event),
                None => Vec::new(),
            };
            self.apply_commands(commands)?;
        }

        self.draw_cursor_at(x, y);
        Ok(outcome)
    }

    pub fn apply_commands(&mut self, commands: Vec<WidgetCommand>) -> Result<(), CompositorError> {
        for command in commands {
            match command {
                WidgetCommand::SetTitle { window, text } => self.set_title(window, text)?,
                WidgetCommand::AppendTitle { window, text } => self.append_title(window, &text)?,
            }
        }
        Ok(())
    }

    /// Redraw the pointer sprite at its last position, e.g. after a repaint
    /// that did not come from pointer input.
    pub fn draw_cursor(&mut self) {
        if let Some((x, y)) = self.cursor {
            self.draw_cursor_at(x, y);
        }
    }

    pub fn cursor(&self) -> Option<(i32, i32)> {
        self.cursor
    }

    fn draw_cursor_at(&mut self, x: i32, y: i32) {
        if let Some((old_x, old_y)) = self.cursor
            && let Ok(old) =
                Rect::from_origin_size(old_x, old_y, CURSOR_WIDTH as u32, CURSOR_HEIGHT as u32)
        {
            self.invalidate_screen(old);
        }
        self.canvas.reset();
        self.canvas
            .blit_sprite(x, y, CURSOR_WIDTH, CURSOR_HEIGHT, &CURSOR_SPRITE);
        self.cursor = Some((x, y));
    }
}
