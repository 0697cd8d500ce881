use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use pfx_core::CANVAS_SIZE;
use pfx_raster::{Canvas, render_frame};
use pfx_sim::LiveSimulation;

/// Horizontal offset of the preview sprite, leaving room for the HUD on the left
pub const PREVIEW_OFFSET_X: f32 = 180.0;

/// CPU canvas and the GPU texture it is uploaded to each frame
#[derive(Resource)]
pub struct PreviewTarget {
    pub image: Handle<Image>,
    pub canvas: Canvas,
    pub show_gizmo: bool,
}

/// Marker for the sprite showing the preview texture
#[derive(Component)]
pub struct PreviewSprite;

pub fn setup_preview(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let size = Extent3d {
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
        depth_or_array_layers: 1,
    };
    let image = images.add(Image::new_fill(
        size,
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    ));

    commands.spawn(Camera2d);
    commands.spawn((
        Sprite::from_image(image.clone()),
        Transform::from_xyz(PREVIEW_OFFSET_X, 0.0, 0.0),
        PreviewSprite,
    ));
    commands.insert_resource(PreviewTarget {
        image,
        canvas: Canvas::new(CANVAS_SIZE, CANVAS_SIZE),
        show_gizmo: true,
    });

    info!("Preview canvas ready ({CANVAS_SIZE}x{CANVAS_SIZE})");
}

/// Rasterize the live simulation and upload it to the preview texture
pub fn update_preview(
    live: Res<LiveSimulation>,
    preview: Option<ResMut<PreviewTarget>>,
    mut images: ResMut<Assets<Image>>,
) {
    let Some(mut preview) = preview else {
        return;
    };
    let PreviewTarget {
        image,
        canvas,
        show_gizmo,
    } = &mut *preview;

    render_frame(
        canvas,
        &live.state.decals,
        &live.state.particles,
        &live.config,
        *show_gizmo,
    );
    if let Some(texture) = images.get_mut(&*image) {
        texture.data = canvas.to_rgba8();
    }
}

/// Map a world-space point to canvas pixels, if it lands on the preview.
/// Canvas y grows downward while world y grows upward.
pub fn world_to_canvas(world: Vec2, sprite_center: Vec2) -> Option<(f64, f64)> {
    let half = CANVAS_SIZE as f32 / 2.0;
    let local = world - sprite_center;
    let x = local.x + half;
    let y = half - local.y;
    let size = CANVAS_SIZE as f32;
    ((0.0..size).contains(&x) && (0.0..size).contains(&y)).then_some((x as f64, y as f64))
}
