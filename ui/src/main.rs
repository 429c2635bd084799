#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(not(target_arch = "wasm32"))]
use signin_ui::native_env::NativeEnv;
use signin_ui::state::State;
use signin_ui::utils::fonts::install_hangul_font;
#[cfg(not(target_arch = "wasm32"))]
use signin_ui::utils::fonts::read_font_file;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    // Submissions are spawned onto this runtime from the UI thread.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to start the Tokio runtime");
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 320.0])
            .with_min_inner_size([300.0, 260.0]),
        ..Default::default()
    };

    // Hangul glyphs are not part of egui's default fonts.
    let font_path = match NativeEnv::from_env() {
        Ok(native) => native.signin_font,
        Err(err) => {
            log::warn!("Ignoring SIGNIN_FONT: {err}");
            None
        }
    };
    let font = font_path.as_deref().and_then(read_font_file);

    eframe::run_native(
        "Sign in",
        native_options,
        Box::new(move |cc| {
            if let Some(data) = font {
                install_hangul_font(&cc.egui_ctx, data);
            }

            let app = signin_ui::SigninApp::new(State::default());
            Ok(Box::new(app))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("egui_canvas")
            .expect("Failed to find egui_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("egui_canvas was not a HtmlCanvasElement");

        let font = match web::fetch_font("./NotoSansKR-Regular.ttf").await {
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("Failed to load Hangul font: {err:?}");
                None
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    if let Some(data) = font {
                        install_hangul_font(&cc.egui_ctx, data);
                    }

                    let app = signin_ui::SigninApp::new(State::default());
                    Ok(Box::new(app))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
mod web {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::js_sys::{ArrayBuffer, Uint8Array};
    use web_sys::{Request, RequestInit, RequestMode, Response};

    pub async fn fetch_font(url: &str) -> Result<Vec<u8>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)?;
        request.headers().set("Accept", "font/ttf")?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(JsValue::from_str(&format!("status {}", response.status())));
        }

        let buffer: ArrayBuffer = JsFuture::from(response.array_buffer()?).await?.dyn_into()?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}
