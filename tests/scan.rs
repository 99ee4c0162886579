use rstest::{fixture, rstest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use unref::{Config, run};

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn config_for(root: &Path) -> Config {
    Config {
        root: root.to_path_buf(),
        output: root.join("unused_files.txt"),
        ..Config::default()
    }
}

#[fixture]
fn site() -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "index.html", r#"<html><body><img src="images/logo.png"><a href="http://cdn.example.com/img.png">cdn</a></body></html>"#);
    write(root, "css/style.css", "body { background: url('../assets/bg.jpg') no-repeat; }");
    write(root, "js/app.js", "const hero = ['slides', 'hero-2.webp'].join('/');");
    write(root, "images/logo.png", "png");
    write(root, "assets/bg.jpg", "jpg");
    write(root, "slides/hero-2.webp", "webp");
    write(root, "photos/unused-banner.jpg", "jpg");
    write(root, "img.png", "png");
    write(root, "node_modules/lib/unused.png", "png");
    temp_dir
}

#[rstest]
fn classifies_site(site: TempDir) {
    let report = run(&config_for(site.path())).unwrap();
    // `img.png` only appears inside a remote URL, but the substring fallback
    // still sees its basename.
    assert_eq!(report.used(), ["assets/bg.jpg", "images/logo.png", "img.png", "slides/hero-2.webp"]);
    assert_eq!(report.unused(), ["photos/unused-banner.jpg"]);
    assert_eq!(report.sources(), 3);
}

#[rstest]
fn partition_holds(site: TempDir) {
    let report = run(&config_for(site.path())).unwrap();
    assert_eq!(report.media(), 5);
    for path in report.used() {
        assert!(!report.unused().contains(path));
    }
    let mut all: Vec<_> = report.used().iter().chain(report.unused()).cloned().collect();
    all.sort();
    assert_eq!(all, ["assets/bg.jpg", "images/logo.png", "img.png", "photos/unused-banner.jpg", "slides/hero-2.webp"]);
}

#[rstest]
fn runs_are_idempotent(site: TempDir) {
    let config = config_for(site.path());
    let first = run(&config).unwrap();
    first.write_unused(&config.output).unwrap();
    let second = run(&config).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn writes_unused_list(site: TempDir) {
    let config = config_for(site.path());
    let report = run(&config).unwrap();
    assert!(report.write_unused(&config.output).unwrap());
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "photos/unused-banner.jpg\n");
}

#[test]
fn no_media_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "index.html", "<p>Hello</p>");
    let config = config_for(temp_dir.path());
    let report = run(&config).unwrap();
    assert_eq!(report.media(), 0);
    assert!(report.used().is_empty());
    assert!(report.unused().is_empty());
    assert!(!report.write_unused(&config.output).unwrap());
    assert!(!config.output.exists());
}

#[test]
fn missing_root_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = config_for(&temp_dir.path().join("does-not-exist"));
    assert!(run(&config).is_err());
}

#[test]
fn custom_extensions_and_exclusions() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "templates/page.twig", r#"<img src="{{ asset('img/used.png') }}">"#);
    write(root, "img/used.png", "png");
    write(root, "img/spare.png", "png");
    write(root, "build/img/copy.png", "png");
    let config = Config {
        source_extensions: vec![".twig".to_string()],
        excluded_dirs: vec!["build".to_string()],
        ..config_for(root)
    };
    let report = run(&config).unwrap();
    assert_eq!(report.used(), ["img/used.png"]);
    assert_eq!(report.unused(), ["img/spare.png"]);
}

#[test]
fn root_links_leave_media_unused() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    write(root, "index.html", r#"<a href="/">Home</a><img src="./">"#);
    write(root, "photos/unused-banner.jpg", "jpg");
    let report = run(&config_for(root)).unwrap();
    assert!(report.used().is_empty());
    assert_eq!(report.unused(), ["photos/unused-banner.jpg"]);
}

#[cfg(unix)]
#[test]
fn symlinked_media_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let assets = tempfile::tempdir().unwrap();
    write(assets.path(), "orphan.png", "png");
    std::os::unix::fs::symlink(assets.path().join("orphan.png"), temp_dir.path().join("orphan.png")).unwrap();
    let report = run(&config_for(temp_dir.path())).unwrap();
    assert_eq!(report.media(), 1);
    assert_eq!(report.unused(), ["orphan.png"]);
}
