use crate::model::Task;
use anyhow::Result;
use csv::Writer;
use directories::UserDirs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const EXPORT_FILE: &str = "tasks.csv";
pub const EXPORT_HEADER: [&str; 3] = ["Task Name", "Deadline", "Status"];

/// The tabular contract handed to the export collaborator: a header row,
/// then one row per task in list order.
pub fn snapshot(tasks: &[Task]) -> Vec<[String; 3]> {
    let mut rows = Vec::with_capacity(tasks.len() + 1);
    rows.push(EXPORT_HEADER.map(str::to_string));
    for task in tasks {
        rows.push([
            task.name.clone(),
            task.deadline.clone(),
            task.status.label().to_string(),
        ]);
    }
    rows
}

/// Encode the snapshot as CSV into any writer.
pub fn write_csv<W: Write>(tasks: &[Task], out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);
    for row in snapshot(tasks) {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `tasks.csv` into `dir` and return the full path.
pub fn export_to_dir(tasks: &[Task], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE);
    let file = File::create(&path)?;
    write_csv(tasks, file)?;
    Ok(path)
}

/// Where exports land when nothing is configured: the platform download
/// directory, falling back to the working directory.
pub fn default_export_dir() -> PathBuf {
    if let Some(user) = UserDirs::new()
        && let Some(dl) = user.download_dir()
    {
        return dl.to_path_buf();
    }
    PathBuf::from(".")
}
