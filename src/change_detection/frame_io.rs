use std::{fs, num::NonZeroU32, path::Path};

use image::{DynamicImage, ImageError, ImageReader, RgbaImage};

use crate::{
    sample, ChangeMaskResult, ColorGrid,
    Error::{FrameDecode, FrameIo, Write},
};

/// Read and decode a frame from disk. The encoding is detected from the file contents,
/// not from the extension.
pub fn load_frame(path: &Path) -> ChangeMaskResult<RgbaImage> {
    let io_err = |e: std::io::Error| FrameIo {
        path: path.to_path_buf(),
        msg: e.to_string(),
    };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;

    let frame = reader.decode().map_err(|e| match e {
        ImageError::IoError(e) => io_err(e),
        e => FrameDecode {
            path: path.to_path_buf(),
            msg: e.to_string(),
        },
    })?;

    Ok(frame.into_rgba8())
}

/// Encode a grid as an RGB image at `path`, creating any missing parent directories.
/// The format is chosen from the file extension.
///
/// If `size` is given the grid is resampled to that size before encoding, otherwise the
/// image is written at the grid resolution.
pub fn write_grid(
    grid: &ColorGrid,
    path: &Path,
    size: Option<(NonZeroU32, NonZeroU32)>,
) -> ChangeMaskResult<()> {
    let write_err = |msg: String| Write {
        path: path.to_path_buf(),
        msg,
    };

    let img = grid.to_image();
    let img = match size {
        Some((width, height)) => sample(&img, width, height),
        None => img,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }

    //jpeg (the usual output) has no alpha channel
    let img = DynamicImage::ImageRgba8(img).into_rgb8();
    img.save(path).map_err(|e| write_err(e.to_string()))?;

    debug!(target: "frame_io", "wrote {}", path.display());
    Ok(())
}
