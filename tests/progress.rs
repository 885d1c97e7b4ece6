//! Progress callback and cancellation tests.

mod common;

use std::{
    fs,
    sync::{Arc, Mutex},
};

use framecat::{
    CancellationToken, ExtractOptions, FramecatError, OperationType, ProgressCallback,
    ProgressInfo, process_folder,
};
use tempfile::tempdir;

use common::{RED, write_gif};

struct RecordingProgress {
    operations: Mutex<Vec<OperationType>>,
}

impl ProgressCallback for RecordingProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        self.operations.lock().unwrap().push(info.operation);
    }
}

#[test]
fn progress_fires_for_all_phases() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("gifs");
    let output = dir.path().join("frames");
    fs::create_dir(&input).unwrap();
    write_gif(&input.join("a.gif"), &[RED]);

    let recorder = Arc::new(RecordingProgress {
        operations: Mutex::new(Vec::new()),
    });
    let options = ExtractOptions::new().with_progress(recorder.clone());

    process_folder(&input, &output, &options).unwrap();

    let operations = recorder.operations.lock().unwrap();
    assert!(operations.contains(&OperationType::FrameExtraction));
    assert!(operations.contains(&OperationType::SequenceAssembly));
    assert!(operations.contains(&OperationType::FolderProcessing));
}

#[test]
fn progress_reports_totals() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("gifs");
    let output = dir.path().join("frames");
    fs::create_dir(&input).unwrap();
    write_gif(&input.join("a.gif"), &[RED]);

    struct AssemblyTotal {
        total: Mutex<Option<u64>>,
    }
    impl ProgressCallback for AssemblyTotal {
        fn on_progress(&self, info: &ProgressInfo) {
            if info.operation == OperationType::SequenceAssembly {
                *self.total.lock().unwrap() = info.total;
            }
        }
    }

    let observer = Arc::new(AssemblyTotal {
        total: Mutex::new(None),
    });
    let options = ExtractOptions::new().with_progress(observer.clone());
    process_folder(&input, &output, &options).unwrap();

    // One frame padded to 30: the copy phase reports 30 as its total.
    assert_eq!(*observer.total.lock().unwrap(), Some(30));
}

#[test]
fn cancelled_token_aborts_the_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("gifs");
    let output = dir.path().join("frames");
    fs::create_dir(&input).unwrap();
    write_gif(&input.join("a.gif"), &[RED]);

    let token = CancellationToken::new();
    token.cancel();
    let options = ExtractOptions::new().with_cancellation(token);

    let error = process_folder(&input, &output, &options).unwrap_err();
    assert!(matches!(error, FramecatError::Cancelled));
}

#[test]
fn token_clones_share_state() {
    let token = CancellationToken::new();
    let clone = token.clone();
    assert!(!clone.is_cancelled());
    token.cancel();
    assert!(clone.is_cancelled());
}
