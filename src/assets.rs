use futures_util::future::try_join;
use valentine_core::config::AssetPaths;
use valentine_core::Assets;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("bad request {}: {:?}", url, e))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?
        .dyn_into::<web::Response>()
        .map_err(|_| anyhow::anyhow!("fetch {} returned a non-Response", url))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("array_buffer {}: {:?}", url, e))?;
    let buf = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!("read body {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetches the typeface font and the matcap image concurrently.
pub async fn load_assets(paths: &AssetPaths) -> anyhow::Result<Assets> {
    let (font_json, matcap) = try_join(fetch_bytes(&paths.font), fetch_bytes(&paths.matcap)).await?;
    log::info!(
        "[assets] fetched font ({} bytes) and matcap ({} bytes)",
        font_json.len(),
        matcap.len()
    );
    Ok(Assets::from_bytes(&font_json, &matcap)?)
}
