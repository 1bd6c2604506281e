//! Integration tests for vidgrab CLI.

use clap::Parser;
use vidgrab::cli::{Cli, run_cli};

const URL: &str = "https://youtu.be/jNQXAC9IVRw";

fn fresh_dir(name: &str) -> std::path::PathBuf {
    let temp_dir = std::env::temp_dir().join(name);

    // Clean up previous test run
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }

    temp_dir
}

#[test]
fn stats_on_missing_folder_succeeds() {
    let temp_dir = fresh_dir("vidgrab-cli-stats");

    let cli = Cli::parse_from(["vidgrab", "stats", "-o", temp_dir.to_str().unwrap()]);

    run_cli(cli).expect("stats failed on missing folder");
}

#[test]
fn qualities_succeeds() {
    run_cli(Cli::parse_from(["vidgrab", "qualities"])).expect("qualities failed");
}

#[test]
#[ignore = "network I/O"]
fn get_downloads_mp4() {
    let temp_dir = fresh_dir("vidgrab-cli-test");

    let cli = Cli::parse_from([
        "vidgrab",
        "get",
        URL,
        "-q",
        "480",
        "-o",
        temp_dir.to_str().unwrap(),
    ]);

    run_cli(cli).expect("failed to download");

    // Expected: temp_dir/Me at the zoo_240p.mp4 (source tops out at 240p)
    let mp4_path = temp_dir.join("Me at the zoo_240p.mp4");

    assert!(
        mp4_path.exists(),
        "MP4 file not found: {:?}",
        mp4_path.display()
    );
}

#[test]
#[ignore = "requires yt-dlp"]
fn get_invalid_url_fails() {
    let temp_dir = fresh_dir("vidgrab-cli-invalid");

    let cli = Cli::parse_from([
        "vidgrab",
        "get",
        "not-a-video-url",
        "-o",
        temp_dir.to_str().unwrap(),
    ]);

    assert!(run_cli(cli).is_err());
    assert_eq!(std::fs::read_dir(&temp_dir).unwrap().count(), 0);
}
