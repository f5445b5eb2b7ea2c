use std::{fs, path::Path};

use image::{DynamicImage, ImageFormat, Rgba32FImage};
use tempfile::TempDir;

use exr2ldr::{transfer, BatchSummary, ChannelMode, ConvertSettings, Converter, Error};

fn write_exr(path: &Path, width: u32, height: u32, rgba: [f32; 4]) {
    let pixels = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();

    Rgba32FImage::from_raw(width, height, pixels)
        .unwrap()
        .save_with_format(path, ImageFormat::OpenExr)
        .unwrap();
}

fn converter(mode: ChannelMode) -> Converter<exr2ldr::ImageCodec, exr2ldr::ImageCodec> {
    Converter::with_settings(ConvertSettings { mode })
}

#[test]
fn converts_exr_files_and_skips_others() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    write_exr(&input.path().join("a.exr"), 4, 3, [0.5, 0.2, 0.8, 1.0]);
    write_exr(&input.path().join("b.exr"), 2, 2, [1.0, 1.0, 1.0, 1.0]);
    fs::write(input.path().join("readme.txt"), "not an image").unwrap();

    let summary = converter(ChannelMode::Rgba)
        .convert_directory(input.path(), output.path())
        .unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            converted: 2,
            skipped: 1,
            failed: 0
        }
    );

    let mut written: Vec<_> = fs::read_dir(output.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    written.sort();
    assert_eq!(written, ["a.png", "b.png"]);

    let b = image::open(output.path().join("b.png")).unwrap();
    assert!(matches!(b, DynamicImage::ImageRgba8(_)));
    assert!(b.into_bytes().iter().all(|&v| v == 0xFF));
}

#[test]
fn rgb_batch_writes_encoded_colour() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    write_exr(&input.path().join("shot.exr"), 3, 2, [0.5, 0.2, 0.8, 0.0]);

    converter(ChannelMode::Rgb)
        .convert_directory(input.path(), output.path())
        .unwrap();

    let written = image::open(output.path().join("shot.png")).unwrap();
    let DynamicImage::ImageRgb8(rgb) = written else {
        panic!("expected an rgb png");
    };

    assert_eq!(rgb.dimensions(), (3, 2));

    let expected = [0.5, 0.2, 0.8].map(|c| exr2ldr::quantize(transfer::encode(c)));
    for pixel in rgb.pixels() {
        assert_eq!(pixel.0, expected);
    }
}

#[test]
fn corrupt_file_aborts_batch() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    write_exr(&input.path().join("a.exr"), 1, 1, [0.0; 4]);
    fs::write(input.path().join("b.exr"), b"garbage").unwrap();
    write_exr(&input.path().join("c.exr"), 1, 1, [0.0; 4]);

    let err = converter(ChannelMode::Rgba)
        .convert_directory(input.path(), output.path())
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(output.path().join("a.png").exists());
    assert!(!output.path().join("c.png").exists());
}

#[test]
fn single_file_conversion() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("black.exr");
    let output = dir.path().join("black.png");

    write_exr(&input, 2, 2, [0.0; 4]);

    let summary = converter(ChannelMode::Rgba)
        .convert_path(&input, &output)
        .unwrap();
    assert_eq!(summary.converted, 1);

    let written = image::open(&output).unwrap();
    assert!(written.into_bytes().iter().all(|&v| v == 0));
}
