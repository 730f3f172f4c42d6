//! Browser asset loading through `fetch`.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::loader::{AssetLoader, AssetRequest, LoadProgress};

/// Fetches assets relative to the page, resolving with the full body.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchAssetLoader;

impl FetchAssetLoader {
    async fn fetch(path: &str) -> Result<Vec<u8>, String> {
        let window = web_sys::window().ok_or("no window")?;
        let response: Response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| format!("{e:?}"))?
            .dyn_into()
            .map_err(|_| "fetch did not return a Response".to_owned())?;
        if !response.ok() {
            return Err(format!("HTTP {}", response.status()));
        }
        let buffer = response.array_buffer().map_err(|e| format!("{e:?}"))?;
        let buffer = JsFuture::from(buffer).await.map_err(|e| format!("{e:?}"))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

impl AssetLoader for FetchAssetLoader {
    async fn load(
        &self,
        request: &AssetRequest,
        progress: &dyn Fn(LoadProgress),
    ) -> Result<Vec<u8>, String> {
        let bytes = Self::fetch(&request.path).await?;
        let len = bytes.len() as u64;
        progress(LoadProgress {
            loaded: len,
            total: Some(len),
        });
        Ok(bytes)
    }
}
