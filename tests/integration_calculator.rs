use pixel_wm::components::{Calculator, WindowKind};
use pixel_wm::constants::BUTTON_PRIMARY;
use pixel_wm::drivers::PointerSample;
use pixel_wm::runner::DesktopApp;
use pixel_wm::theme;
use pixel_wm::window::WindowId;

fn click_at(app: &mut DesktopApp, x: i32, y: i32) {
    let (x, y) = (x as u16, y as u16);
    app.handle_pointer(PointerSample {
        x,
        y,
        buttons: BUTTON_PRIMARY,
    })
    .unwrap();
    app.handle_pointer(PointerSample { x, y, buttons: 0 })
        .unwrap();
}

fn click_window(app: &mut DesktopApp, id: WindowId) {
    let rect = app.compositor().screen_rect(id).unwrap();
    click_at(app, rect.left() + 2, rect.top() + 2);
}

fn open_calculator(app: &mut DesktopApp) -> WindowId {
    let launcher = app.launcher();
    click_window(app, launcher);
    let root = app.compositor().root();
    *app.compositor()
        .window(root)
        .unwrap()
        .children()
        .iter()
        .rev()
        .find(|&&id| {
            matches!(
                app.compositor().window(id).unwrap().kind(),
                WindowKind::Calculator(_)
            )
        })
        .unwrap()
}

fn calculator(app: &DesktopApp, id: WindowId) -> &Calculator {
    match app.compositor().window(id).unwrap().kind() {
        WindowKind::Calculator(calc) => calc,
        other => panic!("not a calculator: {other:?}"),
    }
}

fn press_keys(app: &mut DesktopApp, calc: WindowId, keys: &str) {
    for label in keys.chars() {
        let key = calculator(app, calc).key(label).unwrap();
        click_window(app, key);
    }
}

fn display_text(app: &DesktopApp, calc: WindowId) -> String {
    let display = calculator(app, calc).display().unwrap();
    app.compositor()
        .window(display)
        .unwrap()
        .title()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn launcher_builds_a_full_calculator() {
    let mut app = DesktopApp::new(800, 600).unwrap();
    let calc = open_calculator(&mut app);

    let window = app.compositor().window(calc).unwrap();
    assert_eq!(window.title(), Some("Calculator"));
    assert_eq!(window.size(), (Calculator::WIDTH, Calculator::HEIGHT));
    // display plus sixteen keys
    assert_eq!(window.children().len(), 17);
    assert_eq!(display_text(&app, calc), "0");

    let rect = app.compositor().screen_rect(calc).unwrap();
    assert_eq!(
        app.canvas().pixel(rect.left() + 120, rect.top() + 15),
        Some(theme::TITLE_ACTIVE)
    );
}

#[test]
fn typing_digits_updates_the_display() {
    let mut app = DesktopApp::new(800, 600).unwrap();
    let calc = open_calculator(&mut app);

    press_keys(&mut app, calc, "0");
    assert_eq!(display_text(&app, calc), "0");
    press_keys(&mut app, calc, "42");
    assert_eq!(display_text(&app, calc), "42");
    press_keys(&mut app, calc, "+7=");
    assert_eq!(display_text(&app, calc), "427");
    assert_eq!(calculator(&app, calc).entry(), "427");
    press_keys(&mut app, calc, "C");
    assert_eq!(display_text(&app, calc), "0");
}

#[test]
fn each_calculator_keeps_its_own_entry() {
    let mut app = DesktopApp::new(800, 600).unwrap();
    let first = open_calculator(&mut app);
    let second = open_calculator(&mut app);
    assert_ne!(first, second);

    press_keys(&mut app, second, "9");
    // the first one sits partly under the second; its top-left key is clear
    press_keys(&mut app, first, "7");
    assert_eq!(display_text(&app, first), "7");
    assert_eq!(display_text(&app, second), "9");

    // pressing into the first raised it
    let root = app.compositor().root();
    assert_eq!(app.compositor().window(root).unwrap().active_child(), Some(first));
}
