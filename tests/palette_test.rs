//! Palette sources: files on disk, embedded palettes, and config precedence.

mod common;

use common::{fixtures::palettes, TestDir};
use ditherlab::assets::AssetLoader;
use ditherlab::error::AppError;
use ditherlab::models::AppConfig;
use ditherlab::rendering::{OutputTarget, PngPresenter};
use ditherlab::services::{load_image, PaletteSource};
use pretty_assertions::assert_eq;
use rgb_dither::{Algorithm, DitherError, DitherSession, PaletteError, Rgb};

#[test]
fn test_palette_file_with_bad_line() {
    let dir = TestDir::new();
    let path = dir.write_text("rb.hex", palettes::RED_BLUE);

    let palette = PaletteSource::File(path)
        .load(&AssetLoader::new(None))
        .unwrap();
    assert_eq!(
        palette.colors(),
        &[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255), Rgb::BLACK]
    );
}

#[test]
fn test_palette_frames_use_file_colors() {
    let dir = TestDir::new();
    let image = dir.write_gradient("input.png", 20, 8);
    let palette_path = dir.write_text("gray.hex", palettes::GRAY4);
    let out = dir.join("out");

    let palette = PaletteSource::File(palette_path)
        .load(&AssetLoader::new(None))
        .unwrap();
    let mut session = DitherSession::new(load_image(&image).unwrap(), palette.clone())
        .with_algorithm(Algorithm::Palette);
    let mut presenter = PngPresenter::new(OutputTarget::Directory(out));

    while session.current() != Algorithm::Normal {
        session.show(&mut presenter).unwrap();
        session.next();
    }

    assert_eq!(presenter.written().len(), 6);
    for path in presenter.written() {
        let frame = common::assert_png_file(path);
        common::assert_within_palette(&frame, &palette);
    }
}

#[test]
fn test_empty_palette_file_is_rejected() {
    let dir = TestDir::new();
    let path = dir.write_text("empty.hex", "");

    let err = PaletteSource::File(path)
        .load(&AssetLoader::new(None))
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Dither(DitherError::Palette(PaletteError::EmptyPalette))
    ));
}

#[test]
fn test_builtin_palette() {
    let palette = PaletteSource::Builtin("gameboy".to_string())
        .load(&AssetLoader::new(None))
        .unwrap();
    assert_eq!(palette.len(), 4);
    assert_eq!(palette.get(0), Some(Rgb::new(0x0f, 0x38, 0x0f)));
}

#[test]
fn test_palettes_dir_overrides_embedded() {
    let dir = TestDir::new();
    dir.write_text("gameboy.hex", "ffffff\n");
    dir.write_text("mine.hex", palettes::GRAY4);
    let assets = AssetLoader::new(Some(dir.path().to_path_buf()));

    let palette = PaletteSource::Builtin("gameboy".to_string())
        .load(&assets)
        .unwrap();
    assert_eq!(palette.colors(), &[Rgb::WHITE]);

    let names = assets.list_palettes();
    assert!(names.contains(&"mine".to_string()));
    assert!(names.contains(&"vga16".to_string()));
}

#[test]
fn test_non_utf8_line_in_palettes_dir_becomes_black() {
    let dir = TestDir::new();
    std::fs::write(dir.join("latin1.hex"), b"ff0000\ncaf\xe9\n0000ff\n").unwrap();
    let assets = AssetLoader::new(Some(dir.path().to_path_buf()));

    let palette = PaletteSource::Builtin("latin1".to_string())
        .load(&assets)
        .unwrap();
    assert_eq!(
        palette.colors(),
        &[Rgb::new(255, 0, 0), Rgb::BLACK, Rgb::new(0, 0, 255)]
    );
}

#[test]
fn test_unknown_builtin_lists_available() {
    let err = PaletteSource::Builtin("sepia".to_string())
        .load(&AssetLoader::new(None))
        .unwrap_err();
    match err {
        AppError::UnknownPalette { name, available } => {
            assert_eq!(name, "sepia");
            assert!(available.contains("gameboy"));
        }
        other => panic!("Expected UnknownPalette, got {other:?}"),
    }
}

#[test]
fn test_config_file_drives_palette_and_algorithm() {
    let dir = TestDir::new();
    let palette_path = dir.write_text("gray.hex", palettes::GRAY4);
    let config_path = dir.write_text(
        "ditherlab.yaml",
        &format!(
            "palette: {}\nalgorithm: palette-ordered-4x4\noptimize_png: true\n",
            palette_path.display()
        ),
    );

    let config = AppConfig::load_from_path(&config_path);
    assert_eq!(config.start_algorithm(), Ok(Algorithm::PaletteOrdered4x4));
    assert!(config.optimize_png);

    // Command-line flags take precedence over the config file
    assert_eq!(
        PaletteSource::resolve(None, Some("cga".to_string()), &config),
        PaletteSource::Builtin("cga".to_string())
    );

    let source = PaletteSource::resolve(None, None, &config);
    assert_eq!(source, PaletteSource::File(palette_path));
    assert_eq!(source.load(&AssetLoader::new(None)).unwrap().len(), 4);
}
