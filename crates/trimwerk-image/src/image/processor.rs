// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode, content bounding box, crop, encode and persist.
// Operates on a single in-memory image using the `image` crate.

use std::fs::Metadata;
use std::io::{ErrorKind, Write};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use tracing::{debug, info, instrument, warn};
use trimwerk_core::{BoundingBox, Dimensions, TrimError, WriteMode};

use super::bbox::content_bounds;

/// A decoded image together with the format it was read from.
///
/// Transformations consume `self` and return a new `ImageProcessor`, so the
/// image is exclusively owned from decode to encode.
///
/// ```ignore
/// let processor = ImageProcessor::open("icon.png")?;
/// if let Some(bbox) = processor.bounding_box() {
///     processor.crop_to(bbox).save("icon.png", WriteMode::Atomic)?;
/// }
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
    /// Encoding used when writing back; the format the source was decoded from.
    format: ImageFormat,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    ///
    /// The format is sniffed from the file content, falling back to the
    /// extension. Any failure to read or decode is a `TrimError::Decode`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TrimError> {
        let path = path.as_ref();
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| {
                let kind = err.kind();
                TrimError::decode(path, err, Some(kind))
            })?;
        let format = reader
            .format()
            .ok_or_else(|| TrimError::decode(path, "unrecognised image format", None))?;
        let image = reader.decode().map_err(|err| decode_error(path, err))?;

        info!(
            width = image.width(),
            height = image.height(),
            ?format,
            color = ?image.color(),
            "Image loaded"
        );
        Ok(Self { image, format })
    }

    /// Wrap an already-decoded `DynamicImage` that will be written as `format`.
    pub fn from_dynamic(image: DynamicImage, format: ImageFormat) -> Self {
        Self { image, format }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    // -- Analysis / transformation ----------------------------------------------

    /// Bounding box of non-background content, or `None` if there is none.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        content_bounds(&self.image)
    }

    /// Crop exactly to `bbox`. Colour type and bit depth are preserved and
    /// every pixel inside the box is kept unchanged.
    #[instrument(skip(self))]
    pub fn crop_to(self, bbox: BoundingBox) -> Self {
        debug_assert!(
            bbox.right <= self.width() && bbox.bottom <= self.height(),
            "bounding box exceeds image"
        );
        info!(
            from_w = self.width(),
            from_h = self.height(),
            to_w = bbox.width(),
            to_h = bbox.height(),
            "Cropping image"
        );
        let cropped = self
            .image
            .crop_imm(bbox.left, bbox.top, bbox.width(), bbox.height());
        Self {
            image: cropped,
            format: self.format,
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image in its source format.
    pub fn encode(&self) -> Result<Vec<u8>, ImageError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image.write_to(&mut cursor, self.format)?;
        Ok(buffer)
    }

    /// Encode and write the image to `path`.
    ///
    /// Only lossless formats are written, and a read-only destination is
    /// refused in both modes. Encoding happens before the destination is
    /// touched, so an encoder failure never damages an existing file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>, mode: WriteMode) -> Result<(), TrimError> {
        let path = path.as_ref();
        if !is_lossless(self.format) {
            warn!(format = ?self.format, "Refusing lossy re-encode");
            return Err(TrimError::write(
                path,
                format!("re-encoding {:?} would not preserve pixel data", self.format),
                None,
            ));
        }
        ensure_writable(path)?;

        let bytes = self.encode().map_err(|err| {
            let kind = match &err {
                ImageError::IoError(io) => Some(io.kind()),
                _ => None,
            };
            TrimError::write(path, err, kind)
        })?;
        debug!(bytes = bytes.len(), ?mode, "Image encoded");

        let written = match mode {
            WriteMode::Atomic => write_atomic(path, &bytes),
            WriteMode::InPlace => std::fs::write(path, &bytes),
        };
        written.map_err(|err| {
            let kind = err.kind();
            TrimError::write(path, err, Some(kind))
        })?;

        info!(bytes = bytes.len(), "Image saved");
        Ok(())
    }
}

fn decode_error(path: &Path, err: ImageError) -> TrimError {
    let kind = match &err {
        ImageError::IoError(io) => Some(io.kind()),
        _ => None,
    };
    TrimError::decode(path, err, kind)
}

/// Formats whose encoder writes back exactly the pixels it was given.
fn is_lossless(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::Bmp
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Pnm
            | ImageFormat::Tga
            | ImageFormat::Qoi
            | ImageFormat::OpenExr
    )
}

/// Reject an existing destination whose permissions forbid writing.
///
/// A rename only needs write access to the directory, so without this the
/// atomic path would silently replace a read-only file.
fn ensure_writable(path: &Path) -> Result<(), TrimError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.permissions().readonly() => Err(TrimError::write(
            path,
            "destination is read-only",
            Some(ErrorKind::PermissionDenied),
        )),
        Ok(_) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => {
            let kind = err.kind();
            Err(TrimError::write(path, err, Some(kind)))
        }
    }
}

/// Write `bytes` to a temporary file beside the destination, then rename it
/// into place.
///
/// Symlinks are resolved first so the file they point at is replaced and the
/// link survives. A file with other hard links is rewritten in place instead,
/// since a rename would detach it from its other names. The temporary file
/// inherits the destination's permissions and is removed if anything fails
/// before the rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let target = match std::fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == ErrorKind::NotFound => path.to_path_buf(),
        Err(err) => return Err(err),
    };

    let existing = match std::fs::metadata(&target) {
        Ok(meta) => Some(meta),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => return Err(err),
    };
    if existing.as_ref().is_some_and(has_other_links) {
        debug!(target = %target.display(), "Destination is hard-linked, writing in place");
        return std::fs::write(&target, bytes);
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".trimwerk-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    if let Some(meta) = existing {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(meta: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_meta: &Metadata) -> bool {
    false
}
