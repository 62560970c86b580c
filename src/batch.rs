use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use threadpool::ThreadPool;

use crate::{analyze_image_file, Arguments, Error, Report, Result};

/// Analyzes every input file of `arguments` on a pool of worker threads.
///
/// Results are returned in the order of the input files. A failing file does
/// not affect the others, and a file whose worker panicked is reported as
/// [`Error::WorkerPanicked`].
pub fn analyze_image_files(arguments: &Arguments) -> Vec<(PathBuf, Result<Report>)> {
    let registry = Arc::new(arguments.format_registry());
    run_on_threadpool(
        &arguments.input_files,
        arguments.number_of_threads,
        move |file_path| analyze_image_file(file_path, &registry),
    )
}

fn run_on_threadpool<F>(
    input_files: &[PathBuf],
    number_of_threads: usize,
    job: F,
) -> Vec<(PathBuf, Result<Report>)>
where
    F: Fn(&Path) -> Result<Report> + Send + Sync + 'static,
{
    let number_of_threads = number_of_threads.max(1);
    let threadpool = ThreadPool::new(number_of_threads);
    let job = Arc::new(job);
    log::info!(
        "Analyzing {} image(s) on {} thread(s)",
        input_files.len(),
        number_of_threads
    );

    let (sender, receiver) = mpsc::channel();
    for (index, file_path) in input_files.iter().cloned().enumerate() {
        let sender = sender.clone();
        let job = Arc::clone(&job);
        threadpool.execute(move || {
            let result = job(file_path.as_path());
            if let Err(e) = &result {
                log::warn!("{} failed for '{}': {}", e.stage(), file_path.display(), e);
            }
            // the receiver outlives every job
            let _ = sender.send((index, result));
        });
    }
    drop(sender);

    // a job that panicked dropped its sender without sending
    let mut results: Vec<Option<Result<Report>>> = input_files.iter().map(|_| None).collect();
    for (index, result) in receiver.iter() {
        results[index] = Some(result);
    }
    input_files
        .iter()
        .cloned()
        .zip(results)
        .map(|(file_path, result)| {
            let result = result.unwrap_or_else(|| {
                log::error!("Worker for '{}' panicked", file_path.display());
                Err(Error::WorkerPanicked)
            });
            (file_path, result)
        })
        .collect()
}
