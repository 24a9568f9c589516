// src/main.rs

use nannou::prelude::*;
use std::time::Instant;

use dotfield::{config::Config, views::FieldInstance};

struct Model {
    // Core component:
    field: FieldInstance,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load_or_default();

    let window_id = app
        .new_window()
        .title("dotfield 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .resized(window_resized)
        .build()
        .unwrap();
    let rect = app.window(window_id).unwrap().rect();

    let field = FieldInstance::new(config.field, rect.w(), rect.h());

    Model {
        field,
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

// nannou windows are centered with y up; the engine lives in the canvas
// frame (top-left origin, y down).
fn to_surface(rect: Rect, position: Point2) -> Point2 {
    pt2(position.x - rect.left(), rect.top() - position.y)
}

fn mouse_moved(app: &App, model: &mut Model, position: Point2) {
    let rect = app.window_rect();
    model
        .field
        .on_pointer_move(to_surface(rect, position), app.time);
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    let rect = app.window_rect();
    model.field.on_click(to_surface(rect, app.mouse.position()));
}

fn window_resized(_app: &App, model: &mut Model, dim: Vec2) {
    model.field.on_resize(dim.x, dim.y);
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();

    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / dt;
    }

    /******************* Main update method for the field ********************/
    model.field.advance(dt);
    /*************************************************************************/
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let rect = app.window_rect();
    let dot_size = model.field.config.dot_size;

    for dot in &model.field.dots {
        let position = dot.drawn_position();
        let color = model.field.dot_color(dot);
        draw.ellipse()
            .x_y(rect.left() + position.x, rect.top() - position.y)
            .w_h(dot_size, dot_size)
            .color(color.to_rgb());
    }

    if model.debug_flag {
        let text = format!(
            "FPS: {:.1}\nactive: {}",
            model.fps,
            model.field.active_animations()
        );
        draw.text(&text)
            .x_y(rect.right() - 80.0, rect.top() - 30.0)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
