use image::Rgba;
use pfx_core::{CANVAS_SIZE, EffectConfig, Preset};
use pfx_export::{FlipbookSettings, export_flipbook, save_sheet};

fn settings(loop_mode: bool) -> FlipbookSettings {
    FlipbookSettings {
        fps: 10,
        duration: 1.0,
        loop_mode,
        seed: 42,
    }
}

#[test]
fn ten_frames_fill_two_rows_with_black_padding() {
    let mut config = EffectConfig::default();
    config.apply_preset(Preset::Sparkles);
    let sheet = export_flipbook(&config, settings(false)).unwrap();

    assert_eq!(sheet.frame_count, 10);
    assert_eq!((sheet.columns, sheet.rows), (8, 2));
    assert_eq!(sheet.image.dimensions(), (4096, 1024));
    assert!(sheet.skipped_frames.is_empty());

    // cells 11 through 16 hold no frame
    for slot in 10..16 {
        let cell = sheet.cell(slot).unwrap();
        assert!(
            cell.pixels().all(|p| *p == Rgba([0, 0, 0, 255])),
            "cell {} is not blank",
            slot + 1
        );
    }

    // every captured cell shows something and stays opaque
    for slot in 0..10 {
        let cell = sheet.cell(slot).unwrap();
        assert_eq!(cell.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        assert!(cell.pixels().all(|p| p.0[3] == 255));
        assert!(cell.pixels().any(|p| p.0[0] > 0), "cell {} is empty", slot + 1);
    }
}

#[test]
fn loop_mode_keeps_the_first_half() {
    let config = EffectConfig {
        trail: true,
        ..EffectConfig::default()
    };
    let plain = export_flipbook(&config, settings(false)).unwrap();
    let looped = export_flipbook(&config, settings(true)).unwrap();
    assert_eq!(looped.frame_count, 10);
    assert_eq!(plain.image, looped.image);
}

#[test]
fn saved_sheet_and_manifest_land_in_directory() {
    let dir = std::env::temp_dir().join(format!("pfx-export-test-{}", std::process::id()));
    let short = FlipbookSettings {
        fps: 4,
        duration: 0.5,
        loop_mode: true,
        seed: 1,
    };
    let sheet = export_flipbook(&EffectConfig::default(), short).unwrap();
    let path = save_sheet(&sheet, &short, &dir).unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("particle-flipbook-4fps-0.5s-loop-"), "{name}");
    assert!(name.ends_with(".png"));

    let reloaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reloaded.dimensions(), (4096, 512));
    let manifest = std::fs::read_to_string(path.with_extension("toml")).unwrap();
    assert!(manifest.contains("frames = 2"));

    std::fs::remove_dir_all(&dir).unwrap();
}
