use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use tracing::{debug, debug_span, error, info};

use crate::{
    buffer::ChannelMode,
    codec::{Decode, Encode, ImageCodec},
    error::Error,
};

const INPUT_EXTENSION: &str = "exr";
const OUTPUT_EXTENSION: &str = "png";

#[derive(Debug, Clone, Default)]
pub struct ConvertSettings {
    pub mode: ChannelMode,
}

/// Counts of what happened during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct Converter<D, E> {
    decoder: D,
    encoder: E,
    settings: ConvertSettings,
}

impl Converter<ImageCodec, ImageCodec> {
    pub fn with_settings(settings: ConvertSettings) -> Self {
        Self::new(ImageCodec, ImageCodec, settings)
    }
}

impl<D: Decode, E: Encode> Converter<D, E> {
    pub fn new(decoder: D, encoder: E, settings: ConvertSettings) -> Self {
        Self {
            decoder,
            encoder,
            settings,
        }
    }

    /// Converts a single file, or every exr file of a directory if `input` is one.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `input` doesn't exist or on any error [`Self::convert_file`]
    /// or [`Self::convert_directory`] would return.
    pub fn convert_path(&self, input: &Path, output: &Path) -> Result<BatchSummary, Error> {
        if input.is_dir() {
            self.convert_directory(input, output)
        } else if input.exists() {
            self.convert_file(input, output)?;

            Ok(BatchSummary {
                converted: 1,
                ..BatchSummary::default()
            })
        } else {
            Err(Error::MissingInput {
                path: input.to_path_buf(),
            })
        }
    }

    /// Decodes `input`, encodes it with the sRGB curve and writes it to `output`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if decoding or encoding fails.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<(), Error> {
        let start = Instant::now();

        let linear = self.decoder.decode(input)?;
        let ldr = linear.to_ldr(self.settings.mode);
        drop(linear);

        debug!(
            "encoded {}x{} pixels as {}",
            ldr.width(),
            ldr.height(),
            ldr.mode()
        );

        self.encoder.encode(output, &ldr)?;

        info!(
            "converted `{}` into `{}` in {:.2} s",
            input.display(),
            output.display(),
            start.elapsed().as_secs_f32()
        );

        Ok(())
    }

    /// Converts every `.exr` file directly inside `input_dir` into a `.png` of
    /// the same name inside `output_dir`, in file name order.
    ///
    /// Other entries are skipped. A failed write is logged and the batch
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `input_dir` can't be read, `output_dir` can't be
    /// created, or any input fails to decode.
    pub fn convert_directory(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchSummary, Error> {
        if !input_dir.is_dir() {
            return Err(Error::MissingInput {
                path: input_dir.to_path_buf(),
            });
        }

        if !output_dir.is_dir() {
            fs::create_dir_all(output_dir).map_err(|source| Error::Io {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }

        let start = Instant::now();
        info!(
            "converting `{}` into `{}` as {}...",
            input_dir.display(),
            output_dir.display(),
            self.settings.mode
        );

        let mut summary = BatchSummary::default();

        for input in sorted_entries(input_dir)? {
            if !is_exr_file(&input) {
                info!("skipping `{}`, not an exr file", input.display());
                summary.skipped += 1;
                continue;
            }

            let _file_span = debug_span!("file", path = %input.display()).entered();

            match self.convert_file(&input, &output_path(&input, output_dir)) {
                Ok(()) => summary.converted += 1,
                Err(err) if err.is_recoverable() => {
                    error!("{}", err);
                    summary.failed += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            "converted {} files ({} skipped, {} failed) in {:.2} s",
            summary.converted,
            summary.skipped,
            summary.failed,
            start.elapsed().as_secs_f32()
        );

        Ok(summary)
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let io_error = |source: io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(io_error)?
        .map(|res| res.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;

    entries.sort_unstable();

    Ok(entries)
}

/// Extension match is case sensitive.
fn is_exr_file(path: &Path) -> bool {
    path.is_file() && path.extension() == Some(OsStr::new(INPUT_EXTENSION))
}

fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);

    output_dir.join(name)
}
