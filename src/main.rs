//! Geofield entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use geofield::field::{self, FieldOptions, FieldState};
    use geofield::gallery::GalleryController;
    use geofield::renderer::{self, RenderState};
    use glam::Vec2;

    /// Canvas the backdrop renders into.
    const CANVAS_ID: &str = "geometry-canvas";

    /// Page instance holding all state
    struct App {
        field: FieldState,
        render_state: Option<RenderState>,
        running: bool,
    }

    impl App {
        fn new(field: FieldState) -> Self {
            Self {
                field,
                render_state: None,
                running: true,
            }
        }

        /// Advance the field one frame and draw it
        fn frame(&mut self) {
            field::tick(&mut self.field);

            let vertices = renderer::build_frame(&self.field);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                        self.running = false;
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Viewport change: resize the surface and respawn the field
        fn resize(&mut self, width: u32, height: u32) {
            self.field.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }

        fn stop(&mut self) {
            self.running = false;
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Geofield starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // The gallery works with or without the backdrop
        let gallery = Rc::new(RefCell::new(GalleryController::init()));

        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No #{CANVAS_ID} canvas; backdrop disabled");
            setup_teardown(None, gallery);
            return;
        };

        // Surface size follows the CSS viewport, so pointer coordinates and
        // particle positions share one unit.
        let width = viewport_width(&window);
        let height = viewport_height(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let options = match canvas.get_attribute("data-field-options") {
            Some(json) => match FieldOptions::from_json(&json) {
                Ok(options) => options,
                Err(e) => {
                    log::warn!("Bad data-field-options ({e}); using defaults");
                    FieldOptions::default()
                }
            },
            None => FieldOptions::default(),
        };

        let seed = js_sys::Date::now() as u64;
        let state = FieldState::new(width as f32, height as f32, options, seed);
        let app = Rc::new(RefCell::new(App::new(state)));

        log::info!(
            "Field initialized: {} particles, seed {}",
            app.borrow().field.particles.len(),
            seed
        );

        // Initialize WebGPU; any failure leaves the page static
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("Failed to create surface: {e}; backdrop disabled");
                setup_teardown(None, gallery);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::warn!("Failed to get adapter: {e}; backdrop disabled");
                setup_teardown(None, gallery);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width.max(1), height.max(1)).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::warn!("Failed to create device: {e}; backdrop disabled");
                setup_teardown(None, gallery);
                return;
            }
        }

        setup_pointer_handlers(app.clone());
        setup_resize_handler(canvas, app.clone());
        setup_teardown(Some(app.clone()), gallery);

        // Start frame loop
        request_animation_frame(app);

        log::info!("Geofield running!");
    }

    fn viewport_width(window: &web_sys::Window) -> u32 {
        window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32
    }

    fn viewport_height(window: &web_sys::Window) -> u32 {
        window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as u32
    }

    fn setup_pointer_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Pointer position arrives in viewport coordinates, matching the
        // canvas pixel grid
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .field
                    .set_pointer(Vec2::new(event.client_x() as f32, event.client_y() as f32));
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().field.clear_pointer();
            });
            let _ = window
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        let win = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let width = viewport_width(&win);
            let height = viewport_height(&win);
            canvas.set_width(width);
            canvas.set_height(height);
            app.borrow_mut().resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_teardown(app: Option<Rc<RefCell<App>>>, gallery: Rc<RefCell<GalleryController>>) {
        let window = web_sys::window().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(ref app) = app {
                app.borrow_mut().stop();
            }
            gallery.borrow_mut().stop();
            log::info!("Page hidden; animation stopped");
        });
        let _ =
            window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();

        // Re-arm only while running; the chain simply ends after stop()
        if app.borrow().running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Geofield (native) starting...");
    log::info!("Native mode has no windowing - run with `trunk serve` for the web version");

    // Run tests
    println!("\nRunning field smoke test...");
    test_field_bounds();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn test_field_bounds() {
    use geofield::field::{FieldOptions, FieldState, tick};

    let mut state = FieldState::new(800.0, 600.0, FieldOptions::default(), 42);
    for _ in 0..600 {
        tick(&mut state);
    }

    let eps = state.options.velocity_range;
    for p in &state.particles {
        assert!(
            p.pos.x >= -eps && p.pos.x <= state.width + eps,
            "particle drifted out on x"
        );
        assert!(
            p.pos.y >= -eps && p.pos.y <= state.height + eps,
            "particle drifted out on y"
        );
    }
    println!(
        "✓ Field bounds test passed ({} particles, 600 frames)",
        state.particles.len()
    );
}
