use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::constants::{AUDIO_EXTENSIONS, OUTPUT_SUFFIX, VIDEO_EXTENSIONS};

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

pub fn is_audio_file(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn is_video_file(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn is_media_file(path: &Path) -> bool {
    is_audio_file(path) || is_video_file(path)
}

/// Collect media files under `folder`, optionally descending into
/// subdirectories. Results are sorted for stable job ordering; symlinked
/// directories are not followed.
pub fn scan_folder(folder: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    scan_into(folder, recursive, &mut found)?;
    found.sort();
    Ok(found)
}

fn scan_into(folder: &Path, recursive: bool, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if recursive {
                scan_into(&path, recursive, found)?;
            }
        } else if file_type.is_file() && is_media_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// Output path for a transcription: `<stem>_transcription.txt`, next to the
/// input unless an override directory is given.
pub fn transcription_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{stem}{OUTPUT_SUFFIX}.txt");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("talk.mp3", true)]
    #[case("talk.WAV", true)]
    #[case("talk.flac", true)]
    #[case("clip.mp4", false)]
    #[case("notes.txt", false)]
    #[case("noext", false)]
    fn test_is_audio_file(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_audio_file(Path::new(name)), expected);
    }

    #[rstest]
    #[case("clip.mp4", true)]
    #[case("clip.MKV", true)]
    #[case("clip.webm", true)]
    #[case("talk.mp3", false)]
    #[case("image.png", false)]
    fn test_is_video_file(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_video_file(Path::new(name)), expected);
    }

    #[test]
    fn test_is_media_file_covers_both_tables() {
        assert!(is_media_file(Path::new("a.ogg")));
        assert!(is_media_file(Path::new("b.mov")));
        assert!(!is_media_file(Path::new("c.pdf")));
    }

    #[test]
    fn test_scan_folder_flat() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.mp3"), b"x").unwrap();
        fs::write(tmp.path().join("b.mp4"), b"x").unwrap();
        fs::write(tmp.path().join("skip.txt"), b"x").unwrap();

        let found = scan_folder(tmp.path(), false).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.mp3", "b.mp4"]);
    }

    #[test]
    fn test_scan_folder_not_recursive_skips_subdirs() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("top.wav"), b"x").unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.wav"), b"x").unwrap();

        let found = scan_folder(tmp.path(), false).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("top.wav"));
    }

    #[test]
    fn test_scan_folder_recursive_finds_nested() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("top.wav"), b"x").unwrap();
        let sub = tmp.path().join("nested").join("deeper");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("deep.mkv"), b"x").unwrap();

        let found = scan_folder(tmp.path(), true).unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_scan_folder_results_are_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.mp3", "a.mp3", "b.mp3"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        let found = scan_folder(tmp.path(), false).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.mp3", "b.mp3", "c.mp3"]);
    }

    #[test]
    fn test_scan_folder_missing_dir_errors() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_path_next_to_input() {
        let out = transcription_output_path(Path::new("/media/interview.mp4"), None);
        assert_eq!(out, PathBuf::from("/media/interview_transcription.txt"));
    }

    #[test]
    fn test_output_path_with_override_dir() {
        let out = transcription_output_path(
            Path::new("/media/interview.mp3"),
            Some(Path::new("/out")),
        );
        assert_eq!(out, PathBuf::from("/out/interview_transcription.txt"));
    }

    #[test]
    fn test_output_path_strips_only_last_extension() {
        let out = transcription_output_path(Path::new("/media/rec.2024.wav"), None);
        assert_eq!(out, PathBuf::from("/media/rec.2024_transcription.txt"));
    }
}
