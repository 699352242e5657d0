use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::Duration;

use log::{debug, error, info};
use notify::{Event, EventKind, RecursiveMode, Result as NotifyResult, Watcher};

use crate::utils::error::BoxResult;

const DEBOUNCE_DURATION: Duration = Duration::from_millis(500);
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Watch the persisted document and call `rebuild` whenever it changes on disk.
///
/// The parent directory is watched rather than the file itself, since an
/// atomic save replaces the file through a rename. A burst of events is
/// collapsed into one rebuild once the file has been quiet for the debounce
/// window. Returns once `stop` is set.
pub fn watch_document<F>(data_file: &Path, stop: &AtomicBool, mut rebuild: F) -> BoxResult<()>
where
    F: FnMut() -> BoxResult<()>,
{
    let target = absolute(data_file);
    let directory = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    info!("Watching document: {}", target.display());

    let (tx, rx) = channel();
    let watched = target.clone();
    let mut watcher = notify::recommended_watcher(move |res: NotifyResult<Event>| match res {
        Ok(event) => {
            let relevant = matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) && event.paths.iter().any(|p| p == &watched);

            if relevant {
                tx.send(event).unwrap_or_else(|e| {
                    error!("Error sending file event: {}", e);
                });
            }
        }
        Err(e) => error!("Watch error: {}", e),
    })?;

    watcher.watch(&directory, RecursiveMode::NonRecursive)?;
    info!("Watching for changes. Press Ctrl+C to stop.");

    while !stop.load(Ordering::SeqCst) {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(event) => {
                debug!("Document event: {:?}", event);

                // Wait until the file has been quiet for a whole window
                while let Ok(more) = rx.recv_timeout(DEBOUNCE_DURATION) {
                    debug!("Document event: {:?}", more);
                }

                info!("Document changed, regenerating site...");
                if let Err(e) = rebuild() {
                    error!("Error regenerating site: {}", e);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(e) => {
                error!("Error receiving file events: {}", e);
                break;
            }
        }
    }

    debug!("Stopped watching {}", target.display());
    Ok(())
}

// Event paths from notify are absolute with symlinks resolved
fn absolute(path: &Path) -> PathBuf {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => fs::canonicalize(parent)
            .map(|dir| dir.join(name))
            .unwrap_or(path),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let path = Path::new("/nonexistent-folio-dir/data.json");
        assert_eq!(absolute(path), PathBuf::from("/nonexistent-folio-dir/data.json"));
    }

    #[test]
    fn test_absolute_resolves_relative_paths() {
        let resolved = absolute(Path::new("data.json"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("data.json"));
    }

    #[test]
    fn test_stop_flag_ends_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("site_data.json");
        fs::write(&data_file, "{}").unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let handle = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                watch_document(&data_file, &stop, || Ok(())).map_err(|e| e.to_string())
            })
        };

        thread::sleep(Duration::from_millis(300));
        let stopped_at = Instant::now();
        stop.store(true, Ordering::SeqCst);
        handle.join().unwrap().unwrap();
        assert!(stopped_at.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_burst_of_writes_rebuilds_once() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("site_data.json");
        let other_file = dir.path().join("unrelated.json");
        fs::write(&data_file, "{}").unwrap();

        let stop = Arc::new(AtomicBool::new(false));
        let rebuilds = Arc::new(AtomicUsize::new(0));
        let handle = {
            let stop = Arc::clone(&stop);
            let rebuilds = Arc::clone(&rebuilds);
            let data_file = data_file.clone();
            thread::spawn(move || {
                watch_document(&data_file, &stop, || {
                    rebuilds.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })
                .map_err(|e| e.to_string())
            })
        };

        // Let the watcher register before touching anything
        thread::sleep(Duration::from_millis(500));
        fs::write(&other_file, "ignored").unwrap();
        fs::write(&data_file, "{\"a\":1}").unwrap();
        thread::sleep(Duration::from_millis(100));
        fs::write(&data_file, "{\"a\":2}").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while rebuilds.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(50));
        }
        // Give a second rebuild the chance to show up if the burst was split
        thread::sleep(Duration::from_millis(800));

        stop.store(true, Ordering::SeqCst);
        handle.join().unwrap().unwrap();
        assert_eq!(rebuilds.load(Ordering::SeqCst), 1);
    }
}
