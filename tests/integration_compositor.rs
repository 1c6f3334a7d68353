use std::sync::{Arc, Mutex};

use pixel_wm::components::{Component, PaintContext, WidgetEvent, WindowKind};
use pixel_wm::constants::{BUTTON_PRIMARY, TITLE_HEIGHT};
use pixel_wm::drivers::PointerSample;
use pixel_wm::rect::Rect;
use pixel_wm::theme;
use pixel_wm::window::{Compositor, WindowId, WindowSpec};

fn decorated(c: &mut Compositor, x: i32, y: i32, w: u16, h: u16) -> WindowId {
    let root = c.root();
    c.create_window(root, WindowSpec::decorated(x, y, w, h), WindowKind::Plain)
        .unwrap()
}

fn sample(x: u16, y: u16, buttons: u8) -> PointerSample {
    PointerSample { x, y, buttons }
}

#[test]
fn occlusion_on_a_desktop_sized_buffer() {
    let mut c = Compositor::new(1024, 768).unwrap();
    let a = decorated(&mut c, 10, 10, 300, 200);
    let b = decorated(&mut c, 100, 150, 400, 400);
    c.paint_screen();

    let visible = c.visible_region(a).unwrap();
    let b_rect = c.screen_rect(b).unwrap();
    assert!(!visible.overlaps(&b_rect));
    // A's corner under B shows B, outside B shows A
    assert_eq!(c.canvas().pixel(150, 205), Some(theme::WINDOW_BG));
    assert_eq!(c.canvas().pixel(150, 152), Some(theme::TITLE_ACTIVE));
    assert_eq!(c.canvas().pixel(600, 600), Some(theme::DESKTOP_BG));
}

#[test]
fn dragging_through_the_pointer_path_keeps_buffer_consistent() {
    let mut c = Compositor::new(640, 480).unwrap();
    let a = decorated(&mut c, 10, 10, 200, 150);
    let b = decorated(&mut c, 60, 40, 200, 150);
    let d = decorated(&mut c, 110, 70, 200, 150);
    c.set_title(a, "A").unwrap();
    c.paint_screen();

    // grab A's titlebar and walk it across the others
    c.handle_pointer(sample(20, 15, BUTTON_PRIMARY)).unwrap();
    for step in 1..=10u16 {
        c.handle_pointer(sample(20 + step * 25, 15 + step * 20, BUTTON_PRIMARY))
            .unwrap();
    }
    c.handle_pointer(sample(270, 215, 0)).unwrap();

    let root = c.root();
    assert_eq!(c.window(root).unwrap().children(), &[b, d, a]);
    assert_eq!(c.window(a).unwrap().position(), (260, 210));
    assert_eq!(c.window(root).unwrap().active_child(), Some(a));

    // the whole buffer minus the pointer sprite matches a fresh full repaint
    let mut reference = Compositor::new(640, 480).unwrap();
    let rb = decorated(&mut reference, 60, 40, 200, 150);
    let rd = decorated(&mut reference, 110, 70, 200, 150);
    let ra = decorated(&mut reference, 260, 210, 200, 150);
    reference.set_title(ra, "A").unwrap();
    assert_eq!(reference.window(reference.root()).unwrap().children(), &[rb, rd, ra]);
    reference.paint_screen();

    let cursor = Rect::from_origin_size(270, 215, 11, 18).unwrap();
    for y in 0..480 {
        for x in 0..640 {
            if cursor.contains_point(x, y) {
                continue;
            }
            assert_eq!(
                c.canvas().pixel(x, y),
                reference.canvas().pixel(x, y),
                "pixel {x},{y}"
            );
        }
    }
}

#[derive(Debug)]
struct Recorder {
    presses: Arc<Mutex<Vec<(i32, i32)>>>,
}

impl Component for Recorder {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.fill(0xFF20_2020);
    }

    fn on_press(&mut self, x: i32, y: i32) -> Option<WidgetEvent> {
        if let Ok(mut presses) = self.presses.lock() {
            presses.push((x, y));
        }
        None
    }
}

#[test]
fn custom_components_paint_and_receive_client_coordinates() {
    let presses = Arc::new(Mutex::new(Vec::new()));
    let mut c = Compositor::new(300, 300).unwrap();
    let root = c.root();
    let id = c
        .create_window(
            root,
            WindowSpec::decorated(50, 50, 100, 100),
            WindowKind::Custom(Box::new(Recorder {
                presses: Arc::clone(&presses),
            })),
        )
        .unwrap();
    c.paint(id, None, true).unwrap();
    assert_eq!(c.canvas().pixel(80, 100), Some(0xFF20_2020));

    c.handle_pointer(sample(60, 100, BUTTON_PRIMARY)).unwrap();
    c.handle_pointer(sample(61, 100, BUTTON_PRIMARY)).unwrap();
    c.handle_pointer(sample(61, 100, 0)).unwrap();
    c.handle_pointer(sample(70, 110, BUTTON_PRIMARY)).unwrap();

    let presses = presses.lock().unwrap();
    assert_eq!(
        presses.as_slice(),
        &[(7, 50 - TITLE_HEIGHT), (17, 60 - TITLE_HEIGHT)]
    );
}

#[test]
fn nested_windows_follow_their_parent() {
    let mut c = Compositor::new(400, 400).unwrap();
    let outer = decorated(&mut c, 20, 20, 200, 200);
    let inner = c
        .create_window(outer, WindowSpec::decorated(10, 10, 60, 60), WindowKind::Plain)
        .unwrap();
    c.paint_screen();

    let before = c.screen_rect(inner).unwrap();
    c.move_window(outer, 120, 150).unwrap();
    let after = c.screen_rect(inner).unwrap();
    assert_eq!(after, before.translate(100, 130));
    assert_eq!(
        c.canvas().pixel(after.left() + 30, after.top() + 40),
        Some(theme::WINDOW_BG)
    );
    assert_eq!(c.canvas().pixel(before.left() + 30, before.top() + 40), Some(theme::DESKTOP_BG));
}
