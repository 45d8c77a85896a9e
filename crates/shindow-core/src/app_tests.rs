use super::*;
use crate::style::{WindowStyle, is_borderless};
use crate::testing::{FakePlatform, FakeWindow, Step};

fn app_with(platform: FakePlatform, path: PathBuf) -> App<FakePlatform> {
    App::new(platform, Settings::default(), path, "eqgame.exe")
}

fn single_game() -> FakePlatform {
    FakePlatform::default().with_process("eqgame.exe", 100, FakeWindow::bordered())
}

#[test]
fn target_fields_start_from_settings() {
    // Arrange
    let mut settings = Settings::default();
    settings.set_target(&Rect::new(-1920, 0, 1920, 1080));

    // Act
    let app = App::new(FakePlatform::default(), settings, PathBuf::new(), "");

    // Assert
    assert_eq!(app.target.x, "-1920");
    assert_eq!(app.target_rect().unwrap(), Rect::new(-1920, 0, 1920, 1080));
}

#[test]
fn target_parse_names_the_bad_field() {
    // Arrange
    let mut fields = TargetFields::from_rect(&Rect::new(0, 0, 1920, 1080));
    fields.width = "wide".into();

    // Act
    let err = fields.parse().unwrap_err();

    // Assert
    assert!(matches!(&err, ToggleError::InvalidRect(msg) if msg.starts_with("w:")));
}

#[test]
fn target_parse_rejects_empty_size() {
    let fields = TargetFields::from_rect(&Rect::new(0, 0, 0, 1080));
    assert!(matches!(fields.parse(), Err(ToggleError::InvalidRect(_))));
}

#[test]
fn target_parse_trims_whitespace() {
    let fields = TargetFields {
        x: " 10".into(),
        y: "20 ".into(),
        width: "800".into(),
        height: "600".into(),
    };
    assert_eq!(fields.parse().unwrap(), Rect::new(10, 20, 800, 600));
}

#[test]
fn refresh_auto_selects_single_process() {
    // Arrange
    let mut app = app_with(single_game(), PathBuf::new());

    // Act
    app.refresh_processes().unwrap();

    // Assert
    assert_eq!(app.selected_pid().unwrap(), 100);
}

#[test]
fn refresh_applies_name_filter() {
    // Arrange
    let platform = single_game().with_process("explorer.exe", 7, FakeWindow::bordered());
    let mut app = app_with(platform, PathBuf::new());

    // Act
    let listed = app.refresh_processes().unwrap().to_vec();

    // Assert
    assert_eq!(listed, vec![ProcessEntry::new("eqgame.exe", 100)]);
}

#[test]
fn several_processes_require_a_choice() {
    // Arrange
    let platform = single_game().with_process("eqgame.exe", 200, FakeWindow::bordered());
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();

    // Act / Assert
    assert!(matches!(
        app.selected_pid(),
        Err(AppError::AmbiguousProcess(2))
    ));
    app.select_pid(200);
    assert_eq!(app.selected_pid().unwrap(), 200);
}

#[test]
fn no_process_is_reported() {
    let mut app = app_with(FakePlatform::default(), PathBuf::new());
    app.refresh_processes().unwrap();
    assert!(matches!(
        app.make_borderless(),
        Err(AppError::NoProcessSelected)
    ));
}

#[test]
fn stale_selection_is_cleared_on_refresh() {
    // Arrange
    let mut app = app_with(single_game(), PathBuf::new());
    app.select_pid(999);

    // Act
    app.refresh_processes().unwrap();

    // Assert
    assert_eq!(app.selected_pid().unwrap(), 100);
}

#[test]
fn list_failure_is_a_platform_error() {
    // Arrange
    let platform = FakePlatform {
        list_fails: true,
        ..FakePlatform::default()
    };
    let mut app = app_with(platform, PathBuf::new());

    // Act
    let err = app.refresh_processes().unwrap_err();

    // Assert
    assert_eq!(
        err.to_string(),
        "list processes: Access is denied. (0x00000005)"
    );
}

#[test]
fn missing_window_is_not_found() {
    // Arrange
    let mut app = app_with(single_game(), PathBuf::new());
    app.select_pid(555);

    // Act
    let err = app.restore_borders().unwrap_err();

    // Assert
    assert!(matches!(err, AppError::NotFound(555)));
    assert_eq!(err.to_string(), "failed to find window for process 555");
}

#[test]
fn make_borderless_uses_target_fields() {
    // Arrange
    let platform = single_game();
    let window = platform.windows[&100].clone();
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();
    app.set_target(&Rect::new(0, 0, 2560, 1440));

    // Act
    let phase = app.make_borderless().unwrap();

    // Assert
    let state = window.snapshot();
    assert_eq!(phase, TogglePhase::Redrawn);
    assert_eq!(state.bounds, Rect::new(0, 0, 2560, 1440));
    assert!(is_borderless(state.style, state.ex_style));
    assert_eq!(app.settings().target(), Rect::new(0, 0, 2560, 1440));
}

#[test]
fn invalid_target_is_rejected_before_touching_window() {
    // Arrange
    let platform = single_game();
    let window = platform.windows[&100].clone();
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();
    app.target.x = "left".into();

    // Act
    let err = app.make_borderless().unwrap_err();

    // Assert
    assert!(matches!(err, AppError::Toggle(ToggleError::InvalidRect(_))));
    assert!(window.snapshot().calls.is_empty());
}

#[test]
fn failed_toggle_does_not_update_settings() {
    // Arrange
    let platform = FakePlatform::default().with_process(
        "eqgame.exe",
        100,
        FakeWindow::failing_on(Step::Place),
    );
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();
    app.set_target(&Rect::new(5, 5, 640, 480));

    // Act
    let err = app.make_borderless().unwrap_err();

    // Assert
    assert!(matches!(
        err,
        AppError::Toggle(ToggleError::PositionApplyFailed(_))
    ));
    assert_eq!(app.settings().target(), Rect::new(0, 0, 1920, 1080));
}

#[test]
fn maximized_window_error_is_user_readable() {
    // Arrange
    let platform = FakePlatform::default().with_process("eqgame.exe", 100, FakeWindow::zoomed());
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();

    // Act
    let err = app.make_borderless().unwrap_err();

    // Assert
    assert_eq!(
        err.to_string(),
        "window is maximized, please restore it first"
    );
}

#[test]
fn restore_borders_brings_back_caption() {
    // Arrange
    let platform = single_game();
    let window = platform.windows[&100].clone();
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();
    app.make_borderless().unwrap();

    // Act
    app.restore_borders().unwrap();

    // Assert
    let state = window.snapshot();
    assert!(state.style.contains(WindowStyle::CAPTION));
    assert_eq!(state.bounds, Rect::new(0, 0, 1920, 1080));
}

#[test]
fn fill_monitor_copies_monitor_bounds() {
    // Arrange
    let mut window = FakeWindow::bordered();
    window.state.get_mut().monitor = Rect::new(1920, 0, 2560, 1440);
    let platform = FakePlatform::default().with_process("eqgame.exe", 100, window);
    let mut app = app_with(platform, PathBuf::new());
    app.refresh_processes().unwrap();

    // Act
    let rect = app.fill_monitor().unwrap();

    // Assert
    assert_eq!(rect, Rect::new(1920, 0, 2560, 1440));
    assert_eq!(app.target.x, "1920");
    assert_eq!(app.target.width, "2560");
}

#[test]
fn match_window_copies_client_area() {
    // Arrange
    let mut app = app_with(single_game(), PathBuf::new());
    app.refresh_processes().unwrap();

    // Act
    let rect = app.match_window().unwrap();

    // Assert
    assert_eq!(rect, Rect::new(108, 131, 1264, 681));
    assert_eq!(app.target_rect().unwrap(), rect);
}

#[test]
fn target_parse_rejects_overflowing_edges() {
    // Arrange
    let fields = TargetFields {
        x: "0".into(),
        y: i32::MAX.to_string(),
        width: "1920".into(),
        height: "1080".into(),
    };

    // Act
    let err = fields.parse().unwrap_err();

    // Assert
    assert!(matches!(&err, ToggleError::InvalidRect(msg) if msg == "rectangle overflows"));
}

#[test]
fn save_writes_target_and_keeps_host_window() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shindow.ini");
    let mut settings = Settings::default();
    settings.set_window_rect(&Rect::new(50, 60, 300, 400));
    let mut app = App::new(FakePlatform::default(), settings, path.clone(), "eqgame.exe");
    app.set_target(&Rect::new(0, 0, 3440, 1440));

    // Act
    app.save().unwrap();

    // Assert
    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded.target(), Rect::new(0, 0, 3440, 1440));
    assert_eq!(loaded.window_rect(), Rect::new(50, 60, 300, 400));
}

#[test]
fn save_rejects_invalid_fields() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shindow.ini");
    let mut app = app_with(FakePlatform::default(), path.clone());
    app.target.height = "".into();

    // Act
    let err = app.save().unwrap_err();

    // Assert
    assert!(matches!(err, AppError::Toggle(ToggleError::InvalidRect(_))));
    assert!(!path.exists());
}
