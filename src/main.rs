//! Hurdle Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, HtmlElement, KeyboardEvent, TouchEvent};

    use hurdle_run::platform::{LifecycleHost, NotificationSink, Runner};
    use hurdle_run::renderer::CanvasRenderer;
    use hurdle_run::{ProfilePreference, Settings, Viewport};

    type Game = Runner<CanvasRenderer, DomNotifier, PageHost>;

    /// `#message` banner and `#qr` reward image
    struct DomNotifier {
        message: Option<HtmlElement>,
        qr: Option<HtmlElement>,
    }

    impl DomNotifier {
        fn from_document(document: &web_sys::Document) -> Self {
            let element = |id: &str| {
                document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            };
            Self {
                message: element("message"),
                qr: element("qr"),
            }
        }
    }

    impl NotificationSink for DomNotifier {
        fn show_message(&mut self, text: &str, _persistent: bool) {
            if let Some(el) = &self.message {
                el.set_text_content(Some(text));
                let _ = el.style().set_property("opacity", "1");
            }
        }

        fn hide_message(&mut self) {
            if let Some(el) = &self.message {
                let _ = el.style().set_property("opacity", "0");
            }
        }

        fn reveal_supplementary_visual(&mut self) {
            if let Some(el) = &self.qr {
                let _ = el.style().set_property("display", "block");
            }
        }
    }

    struct PageHost;

    impl LifecycleHost for PageHost {
        fn reload(&mut self) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    }

    fn viewport(window: &web_sys::Window) -> Viewport {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
    }

    /// `?profile=mobile` overrides and remembers the profile choice
    fn apply_query_overrides(window: &web_sys::Window, settings: &mut Settings) {
        let search = window.location().search().unwrap_or_default();
        let choice = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.strip_prefix("profile="))
            .find_map(ProfilePreference::from_str);
        if let Some(profile) = choice {
            if profile != settings.profile {
                settings.profile = profile;
                settings.save();
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Hurdle Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or("no #game canvas")?
            .dyn_into()?;
        let renderer = CanvasRenderer::new(canvas).ok_or("canvas has no 2d context")?;

        let mut settings = Settings::load();
        apply_query_overrides(&window, &mut settings);
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let profile = settings.profile.resolve(&user_agent);

        let mut runner = Runner::new(
            profile,
            viewport(&window),
            renderer,
            DomNotifier::from_document(&document),
            PageHost,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        runner.set_idle_mode(settings.idle_mode);
        runner.present();

        let game = Rc::new(RefCell::new(runner));
        setup_input_handlers(&window, &document, game.clone());
        setup_resize_handler(&window, game.clone());

        request_animation_frame(game, None);

        log::info!("Hurdle Run running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => {
                        g.on_jump_intent();
                    }
                    "KeyI" => {
                        let on = !g.idle_mode();
                        g.set_idle_mode(on);
                        log::info!("Idle mode: {}", on);

                        let mut settings = Settings::load();
                        settings.idle_mode = on;
                        settings.save();
                    }
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (jump); not passive so the page does not scroll
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().on_jump_intent();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn setup_resize_handler(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = game.borrow_mut().on_resize(viewport(&window)) {
                log::warn!("Ignoring resize: {}", e);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, last_time: Option<f64>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, last_time, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, last_time: Option<f64>, time: f64) {
        // First frame runs exactly one tick
        let elapsed_ms = last_time
            .map(|last| (time - last) as f32)
            .unwrap_or(hurdle_run::consts::TICK_MS);
        game.borrow_mut().advance(elapsed_ms);

        // Keep scheduling after the round ends: timers run on the tick clock
        request_animation_frame(game, Some(time));
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hurdle_run::Settings;
    use hurdle_run::platform::{LogHost, LogNotifier, LogPresenter, Runner};
    use hurdle_run::sim::GamePhase;
    use hurdle_run::{DeviceProfile, ProfilePreference, Viewport};

    env_logger::init();
    log::info!("Hurdle Run (native) starting...");
    log::info!("Native mode plays one headless round in idle mode - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let profile = std::env::args()
        .nth(1)
        .and_then(|arg| ProfilePreference::from_str(&arg))
        .unwrap_or(settings.profile)
        .resolve("");

    let viewport = match profile {
        DeviceProfile::Desktop => Viewport::new(1280.0, 720.0),
        DeviceProfile::Mobile => Viewport::new(390.0, 844.0),
    };

    let mut runner = match Runner::new(
        profile,
        viewport,
        LogPresenter::default(),
        LogNotifier::default(),
        LogHost::default(),
    ) {
        Ok(runner) => runner,
        Err(e) => {
            log::error!("Bad configuration: {}", e);
            std::process::exit(1);
        }
    };
    runner.set_idle_mode(true);

    // One minute of simulated time
    let max_ticks = 60 * hurdle_run::consts::TICK_HZ;
    for _ in 0..max_ticks {
        runner.step();
        runner.present();
        if runner.session().phase() != GamePhase::Running || runner.host().reloads > 0 {
            break;
        }
    }

    let session = runner.session();
    println!(
        "{} round finished: {:?}, score {} after {} ticks ({} frames)",
        profile.as_str(),
        session.phase(),
        session.score(),
        session.time_ticks,
        runner.presenter().frames
    );
    let notifier = runner.notifier();
    if let Some(message) = &notifier.visible {
        println!("Banner: {}", message);
    }
    if notifier.revealed {
        println!("Reward revealed");
    }
}
