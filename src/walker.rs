use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Collect INI files under `paths`, respecting gitignore and skipping
/// hidden entries.
///
/// A path given explicitly is always yielded when it is a file; files found
/// while walking a directory must carry one of `extensions`.
pub fn walk_ini_files(
    paths: &[String],
    extensions: &[String],
) -> impl Iterator<Item = io::Result<PathBuf>> {
    let mut all_files = vec![];

    for path in paths {
        if Path::new(path).is_file() {
            all_files.push(Ok(PathBuf::from(path)));
            continue;
        }

        let walker = WalkBuilder::new(path)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file && has_extension(entry.path(), extensions) {
                        all_files.push(Ok(entry.into_path()));
                    }
                }
                Err(e) => all_files.push(Err(io::Error::other(e.to_string()))),
            }
        }
    }

    all_files.into_iter()
}
