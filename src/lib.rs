#![warn(clippy::all, clippy::pedantic, clippy::multiple_crate_versions)]
// this doesn't matter
#![allow(clippy::cast_precision_loss)]
// this is annoying
#![allow(clippy::module_name_repetitions)]

mod buffer;
mod codec;
mod convert;
mod error;
mod repack;
pub mod transfer;

use std::{fmt, io};

use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{format, FmtContext, FormatEvent, FormatFields},
    prelude::*,
    registry::LookupSpan,
};

pub use crate::{
    buffer::{ChannelMode, LdrImage, LinearImage, ParseChannelModeError},
    codec::{Decode, Encode, ImageCodec},
    convert::{BatchSummary, ConvertSettings, Converter},
    error::Error,
    repack::{quantize, repack, source_index},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

struct Exr2LdrLogFormatter;

impl<S, N> FormatEvent<S, N> for Exr2LdrLogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(&mut writer, "[exr2ldr] [{}] ", metadata.level())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber, logging to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn initialize_logger() {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .event_format(Exr2LdrLogFormatter);

    #[cfg(feature = "trace")]
    {
        let registry = tracing_subscriber::registry()
            .with(tracing_tracy::TracyLayer::new())
            .with(layer);

        let _ = tracing::subscriber::set_global_default(registry);
    }

    #[cfg(all(feature = "normal_logging", not(feature = "trace")))]
    {
        let registry = tracing_subscriber::registry().with(layer);
        let _ = tracing::subscriber::set_global_default(registry);
    }
}
