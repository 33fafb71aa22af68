use crate::prelude::*;
use std::fs::{self, File};

pub(crate) fn open_input(path: &Path) -> Result<File> {
    log::info!("Reading {}", path.display());
    File::open(path).map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn save_map<R>(renderer: &R, map: &MapDocument, path: &Path) -> Result<()>
where
    R: MapRenderer + ?Sized,
{
    let html = renderer.render(map)?;
    fs::write(path, html).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Map with {} annotations saved as {}", map.len(), path.display());
    Ok(())
}
