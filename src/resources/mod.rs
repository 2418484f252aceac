//! Asset loading.
//!
//! Files are read from `./assets/` on native targets and fetched from
//! `<origin>/assets/` on the web.

use anyhow::Context as _;

use crate::data_structures::{model::Material, texture::Texture};

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().context("no window available")?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("page origin unavailable"))?;
    let base = reqwest::Url::parse(&format!("{}/assets/", origin))?;
    Ok(base.join(file_name)?)
}

pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        reqwest::get(url).await?.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = std::path::Path::new("./").join("assets").join(file_name);
        std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
    };

    Ok(data)
}

pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let data = load_binary(file_name).await?;
    Texture::from_bytes(device, queue, &data, file_name, None)
}

/// Load `file_name` as a diffuse material.
///
/// A missing or undecodable file is not fatal: it is logged and the material
/// falls back to a flat `fallback` colour.
pub async fn load_material(
    file_name: &str,
    fallback: [u8; 4],
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
) -> Material {
    let texture = match load_texture(file_name, device, queue).await {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("texture {file_name} unavailable, using a solid colour: {e:#}");
            Texture::from_colour(device, queue, fallback, file_name)
        }
    };
    Material::new(device, file_name, texture, layout)
}
