//! Renders ambient occlusion of a cube floating in front of a wall and saves
//! it as `floating_cube.png`.
//!
//! ```text
//! RUST_LOG=debug cargo run --example floating_cube --features metrics
//! ```

use std::error::Error;

use glam::{uvec2, vec2, vec3, Vec3, Vec4Swizzles};
use hbao::{
    AoParameters, Camera, Frame, Hbao, Projection, Settings, Texture, Tunables,
};
use image::{imageops, DynamicImage, Rgba, Rgba32FImage};

const SIZE: u32 = 512;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let size = uvec2(SIZE, SIZE);

    let camera = Camera {
        projection: Projection::perspective(60.0f32.to_radians(), 0.1, 100.0),
        ..Default::default()
    };

    let depth = render_depth(&camera.projection, size)?;
    let mut color = Rgba32FImage::from_pixel(size.x, size.y, Rgba([1.0; 4]));
    let mut hbao = Hbao::new(Settings::default(), size);

    hbao.render(
        Frame {
            depth: &depth,
            camera: &camera,
            tunables: &Tunables::default(),
        },
        &mut color,
    )?;

    // Row 0 is the bottom one, while images expect it at the top
    let color = imageops::flip_vertical(&color);

    DynamicImage::ImageRgba32F(color)
        .to_rgba8()
        .save("floating_cube.png")?;

    Ok(())
}

/// Ray-casts a wall at z=10 and a cube spanning `[-1, 1]` x `[-1, 1]` x
/// `[8.5, 9.5]`.
fn render_depth(
    projection: &Projection,
    size: glam::UVec2,
) -> hbao::Result<Texture<f32>> {
    let proj_info =
        AoParameters::new(projection, size, &Default::default()).proj_info;

    let (min, max) = (vec3(-1.0, -1.0, 8.5), vec3(1.0, 1.0, 9.5));
    let mut depth = Texture::new("depth", size)?;

    depth.par_fill(|pos| {
        let uv = (pos.as_vec2() + vec2(0.5, 0.5)) / size.as_vec2();
        let dir = (uv * proj_info.xy() + proj_info.zw()).extend(1.0);

        let z = hit(dir, min, max).unwrap_or(10.0);

        projection.hardware_depth(z)
    });

    Ok(depth)
}

fn hit(dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let t0 = min / dir;
    let t1 = max / dir;
    let t_min = t0.min(t1).max_element();
    let t_max = t0.max(t1).min_element();

    (t_min <= t_max).then_some(t_min)
}
