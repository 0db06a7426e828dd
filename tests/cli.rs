use std::process::Command;

fn scanline(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_scanline"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn two_by_two_to_stdout() {
    let out = scanline(&["-W", "2", "-H", "2"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(),
        "P3\n2 2\n255\n0 0 0\n255 0 0\n0 255 0\n255 255 63\n");
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("Scanlines remaining: 0"));
    assert!(err.contains("Done."));
}

#[test]
fn quiet_has_empty_stderr() {
    let out = scanline(&["-W", "3", "-H", "4", "-q"]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 3 + 12);
}

#[test]
fn degenerate_width_fails_without_output() {
    let out = scanline(&["-W", "1", "-H", "10"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8(out.stderr).unwrap().contains("Invalid dimension"));
}

#[test]
fn saved_config_is_reused() {
    let mut path = std::env::temp_dir();
    path.push(format!("scanline-cli-{}.cfg", std::process::id()));
    let file = path.to_string_lossy().into_owned();

    let first = scanline(&["-W", "4", "-H", "3", "-q", "--save-config", &file]);
    assert!(first.status.success());
    let second = scanline(&["-c", &file]);
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
    // The saved config was quiet too.
    assert!(second.stderr.is_empty());
    let _ = std::fs::remove_file(&file);
}

#[cfg(feature = "render")]
#[test]
fn png_output() {
    let mut path = std::env::temp_dir();
    path.push(format!("scanline-cli-{}.png", std::process::id()));
    let file = path.to_string_lossy().into_owned();

    let out = scanline(&["-W", "8", "-H", "6", "-j", "-q", "-o", &file]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let img = image::open(&file).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (8, 6));
    assert_eq!(img.get_pixel(7, 5).0, scanline::pixel::color(scanline::Size::new(8, 6).unwrap(), 7, 5));
    let _ = std::fs::remove_file(&file);
}
