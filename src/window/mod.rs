pub mod compositor;
pub mod decorator;

use std::fmt;

use thiserror::Error;

use crate::components::WindowKind;
use crate::constants::{BORDER_WIDTH, MAX_COORDINATE, TITLE_HEIGHT};
use crate::rect::GeometryError;

pub use compositor::{Compositor, DispatchOutcome, DragMove, PressRecord};

/// Smallest outer size a decorated window can have and still keep a
/// one-pixel client area inside its frame.
pub const MIN_DECORATED_WIDTH: u16 = (2 * BORDER_WIDTH + 1) as u16;
pub const MIN_DECORATED_HEIGHT: u16 = (TITLE_HEIGHT + BORDER_WIDTH + 1) as u16;

/// Arena key for a window. Ids come from a monotonically increasing sequence
/// and are never reused, so a stale id simply fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowStyle {
    /// Border and titlebar drawn by the compositor's decorator; children are
    /// placed relative to the client origin inside the frame.
    #[default]
    Decorated,
    Undecorated,
}

impl WindowStyle {
    pub const fn is_decorated(self) -> bool {
        matches!(self, WindowStyle::Decorated)
    }
}

/// Where a new window goes and how big it is, in its parent's client
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
    pub style: WindowStyle,
}

impl WindowSpec {
    pub const fn decorated(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
            style: WindowStyle::Decorated,
        }
    }

    pub const fn undecorated(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
            style: WindowStyle::Undecorated,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CompositorError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeometryError::EmptySize {
                width: self.width as u32,
                height: self.height as u32,
            }
            .into());
        }
        if self.style.is_decorated()
            && (self.width < MIN_DECORATED_WIDTH || self.height < MIN_DECORATED_HEIGHT)
        {
            return Err(CompositorError::TooSmallForDecoration {
                width: self.width,
                height: self.height,
                min_width: MIN_DECORATED_WIDTH,
                min_height: MIN_DECORATED_HEIGHT,
            });
        }
        check_position(self.x, self.y)?;
        Ok(())
    }
}

/// Positions are limited to `MAX_COORDINATE` either side of the parent's
/// client origin.
pub(crate) fn check_position(x: i32, y: i32) -> Result<(), GeometryError> {
    let range = -MAX_COORDINATE..=MAX_COORDINATE;
    if range.contains(&x) && range.contains(&y) {
        Ok(())
    } else {
        Err(GeometryError::OutOfRange {
            x,
            y,
            limit: MAX_COORDINATE,
        })
    }
}

#[derive(Debug, Error)]
pub enum CompositorError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("unknown window {0}")]
    UnknownWindow(WindowId),
    #[error(
        "decorated window {width}x{height} is smaller than the {min_width}x{min_height} frame"
    )]
    TooSmallForDecoration {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("the root window cannot be removed")]
    RootWindow,
    #[error("canvas size must be non-zero (got {width}x{height})")]
    EmptyCanvas { width: u16, height: u16 },
}

/// An in-progress titlebar drag of one of a window's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub child: WindowId,
    /// Grab point inside the child, in the parent's client coordinates.
    pub offset_x: i32,
    pub offset_y: i32,
}

#[derive(Debug)]
pub struct Window {
    pub(crate) parent: Option<WindowId>,
    /// Back to front: the last entry draws on top and hit-tests first.
    pub(crate) children: Vec<WindowId>,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) style: WindowStyle,
    pub(crate) title: Option<String>,
    pub(crate) drag: Option<DragState>,
    pub(crate) last_button_down: bool,
    pub(crate) active_child: Option<WindowId>,
    pub(crate) kind: WindowKind,
}

impl Window {
    pub(crate) fn new(parent: Option<WindowId>, spec: WindowSpec, kind: WindowKind) -> Self {
        Self {
            parent,
            children: Vec::new(),
            x: spec.x,
            y: spec.y,
            width: spec.width,
            height: spec.height,
            style: spec.style,
            title: None,
            drag: None,
            last_button_down: false,
            active_child: None,
            kind,
        }
    }

    pub fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    pub fn children(&self) -> &[WindowId] {
        &self.children
    }

    /// Position relative to the parent's client origin.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn style(&self) -> WindowStyle {
        self.style
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    pub fn last_button_down(&self) -> bool {
        self.last_button_down
    }

    pub fn active_child(&self) -> Option<WindowId> {
        self.active_child
    }

    pub fn kind(&self) -> &WindowKind {
        &self.kind
    }

    /// Offset from the outer origin to the client origin.
    pub fn client_offset(&self) -> (i32, i32) {
        if self.style.is_decorated() {
            (BORDER_WIDTH, TITLE_HEIGHT)
        } else {
            (0, 0)
        }
    }

    pub fn client_size(&self) -> (u32, u32) {
        let (w, h) = (self.width as u32, self.height as u32);
        if self.style.is_decorated() {
            (
                w.saturating_sub(2 * BORDER_WIDTH as u32),
                h.saturating_sub((TITLE_HEIGHT + BORDER_WIDTH) as u32),
            )
        } else {
            (w, h)
        }
    }

    /// Whether a point in the parent's client coordinates hits this window.
    pub(crate) fn hit(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width as i32)
            && y >= self.y
            && y < self.y.saturating_add(self.height as i32)
    }

    /// Whether a point in the parent's client coordinates lies on this
    /// window's titlebar band.
    pub(crate) fn in_titlebar(&self, y: i32) -> bool {
        self.style.is_decorated() && y >= self.y && y < self.y.saturating_add(TITLE_HEIGHT)
    }
}
