//! Hoop Shot entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use hoop_shot::Game;
    use hoop_shot::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use hoop_shot::render::{Color, Sprite, Surface, TextAlign};
    use hoop_shot::sim::PointerEvent;

    /// Sprite assets served next to the page
    const BALL_SRC: &str = "/assets/basketball.svg";
    const BASKET_SRC: &str = "/assets/basket.svg";
    const BACKGROUND_SRC: &str = "/assets/crowd.jpg";

    /// Canvas 2D backend for the render surface contract
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
        ball: HtmlImageElement,
        basket: HtmlImageElement,
        background: HtmlImageElement,
    }

    impl CanvasSurface {
        fn image(&self, sprite: Sprite) -> &HtmlImageElement {
            match sprite {
                Sprite::Ball => &self.ball,
                Sprite::Basket => &self.basket,
                Sprite::Background => &self.background,
            }
        }
    }

    impl Surface for CanvasSurface {
        fn clear(&mut self) {
            self.ctx
                .clear_rect(0.0, 0.0, SURFACE_WIDTH as f64, SURFACE_HEIGHT as f64);
        }

        fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Vec2, alpha: f32) {
            self.ctx.set_global_alpha(alpha as f64);
            let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                self.image(sprite),
                pos.x as f64,
                pos.y as f64,
                size.x as f64,
                size.y as f64,
            );
            self.ctx.set_global_alpha(1.0);
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }

        fn stroke_circle(
            &mut self,
            center: Vec2,
            radius: f32,
            color: Color,
            width: f32,
            dashed: bool,
        ) {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(width as f64);
            if dashed {
                let dash =
                    js_sys::Array::of2(&JsValue::from_f64(1.0), &JsValue::from_f64(1.0));
                let _ = self.ctx.set_line_dash(&dash);
            }
            self.ctx.stroke();
            let _ = self.ctx.set_line_dash(&js_sys::Array::new());
        }

        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx
                .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        }

        fn fill_text(&mut self, text: &str, pos: Vec2, size_px: f32, color: Color, align: TextAlign) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.set_font(&format!("{size_px}px Arial"));
            self.ctx.set_text_align(match align {
                TextAlign::Center => "center",
                TextAlign::Left => "left",
            });
            let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
            self.ctx.set_text_align("left");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Hoop Shot starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("game initialized with seed: {seed}");

        let ball = new_image();
        let basket = new_image();
        let background = new_image();

        let surface = Rc::new(RefCell::new(CanvasSurface {
            ctx,
            ball: ball.clone(),
            basket: basket.clone(),
            background: background.clone(),
        }));

        // Startup gate: the frame loop may not start until all three
        // sprites have decoded. A failed load keeps the count short and the
        // loop never starts.
        let pending = Rc::new(Cell::new(3u32));
        for img in [&ball, &basket, &background] {
            let pending = pending.clone();
            let game = game.clone();
            let surface = surface.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                pending.set(pending.get() - 1);
                if pending.get() == 0 {
                    log::info!("assets ready, starting frame loop");
                    setup_input_handlers(&canvas, game.clone());
                    setup_reset_button(game.clone());
                    request_animation_frame(game.clone(), surface.clone());
                }
            });
            img.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();

            let error = Closure::<dyn FnMut()>::new(move || {
                log::error!("asset failed to load; game will not start");
            });
            img.set_onerror(Some(error.as_ref().unchecked_ref()));
            error.forget();
        }

        ball.set_src(BALL_SRC);
        basket.set_src(BASKET_SRC);
        background.set_src(BACKGROUND_SRC);
    }

    fn new_image() -> HtmlImageElement {
        HtmlImageElement::new().expect("failed to create image element")
    }

    fn offset(event: &MouseEvent) -> Vec2 {
        Vec2::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down - grab the ball if the press lands on it
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Down(offset(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - the held ball follows the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Move(offset(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - launch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer(PointerEvent::Up(offset(&event)));
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, surface: Rc<RefCell<CanvasSurface>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(game, surface);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(game: Rc<RefCell<Game>>, surface: Rc<RefCell<CanvasSurface>>) {
        game.borrow_mut().frame(&mut *surface.borrow_mut());
        request_animation_frame(game, surface);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use hoop_shot::Game;
    use hoop_shot::render::Recording;
    use hoop_shot::sim::{BallMode, PointerEvent};

    env_logger::init();
    log::info!("Hoop Shot (native) starting...");
    log::info!("Native mode is a headless smoke run - serve the wasm build for the real game");

    let mut game = Game::new(0xb0a5_4e7);
    let mut surface = Recording::new();

    // One throw: grab the ball, pull down-left, release
    game.pointer(PointerEvent::Down(Vec2::new(100.0, 530.0)));
    game.pointer(PointerEvent::Move(Vec2::new(60.0, 580.0)));
    game.pointer(PointerEvent::Up(Vec2::new(60.0, 580.0)));

    let mut frames = 0u32;
    while game.state.ball.mode == BallMode::Flying && frames < 600 {
        game.frame(&mut surface);
        frames += 1;
    }

    println!(
        "ball {:?} after {} frames at ({:.1}, {:.1}); last frame drew {} commands",
        game.state.ball.mode,
        frames,
        game.state.ball.pos.x,
        game.state.ball.pos.y,
        surface.commands.len(),
    );
}
