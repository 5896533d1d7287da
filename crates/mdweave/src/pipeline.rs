//! File pipeline: read, convert, write, copy media.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use mdweave_config::Config;
use mdweave_core::Converter;

use crate::error::CliError;
use crate::media;
use crate::output::Output;

/// Convert one source file and copy its referenced media.
///
/// The output file is `<outdir>/<name>.md` with the source extension
/// replaced. Media paths are resolved relative to the source file's
/// directory and copied to the same relative path under the output
/// directory. Any failure aborts with the offending path attached.
pub(crate) fn convert_file(path: &Path, config: &Config, output: &Output) -> Result<(), CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let source_dir = path.parent().unwrap_or(Path::new("."));
    let converted = Converter::new()
        .fence_language(&config.output.fence_language)
        .base_dir(source_dir)
        .convert(&source)
        .map_err(|source| CliError::Convert {
            path: path.to_path_buf(),
            source,
        })?;

    create_out_dir(&config.output.dir)?;

    let filename = match path.file_name() {
        Some(name) => PathBuf::from(name),
        None => path.to_path_buf(),
    };
    let outname = config.output.dir.join(filename.with_extension("md"));
    fs::write(&outname, &converted.markdown).map_err(|source| CliError::Write {
        path: outname.clone(),
        source,
    })?;
    info!(file = %outname.display(), "wrote document");

    if config.output.copy_media && !converted.media.is_empty() {
        output.info("Copying media");
        for media_path in &converted.media {
            media::copy_recursive(
                &source_dir.join(media_path),
                &config.output.dir.join(media_path),
            )
            .map_err(|source| CliError::Copy {
                path: PathBuf::from(media_path),
                source,
            })?;
        }
    }
    Ok(())
}

/// Create the output directory with owner-full, group/other read-execute
/// permissions.
fn create_out_dir(dir: &Path) -> Result<(), CliError> {
    let map_err = |source| CliError::CreateDir {
        path: dir.to_path_buf(),
        source,
    };
    fs::create_dir_all(dir).map_err(map_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).map_err(map_err)?;
    }
    Ok(())
}
