use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window, UseRafFnCallbackArgs};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlProgram, WebGlRenderingContext as Gl, WebGlShader,
    WebGlUniformLocation,
};

use crate::motion::{Spring, SpringConfig};

const VERTEX_SHADER: &str = include_str!("shaders/quad.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/fluid.frag");

/// Two triangles covering clip space.
const QUAD: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

#[derive(Error, Debug)]
enum BackgroundError {
    #[error("WebGL is not available")]
    Unavailable,
    #[error("shader failed to compile: {0}")]
    Compile(String),
    #[error("program failed to link: {0}")]
    Link(String),
}

struct FluidRenderer {
    gl: Gl,
    canvas: HtmlCanvasElement,
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
}

impl FluidRenderer {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, BackgroundError> {
        let gl = canvas
            .get_context("webgl")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<Gl>().ok())
            .ok_or(BackgroundError::Unavailable)?;

        let vertex = compile(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link(&gl, &vertex, &fragment)?;
        gl.use_program(Some(&program));

        let buffer = gl.create_buffer().ok_or(BackgroundError::Unavailable)?;
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(QUAD.as_slice());
        gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &vertices, Gl::STATIC_DRAW);

        let position = gl.get_attrib_location(&program, "position");
        if position < 0 {
            return Err(BackgroundError::Link("missing position attribute".to_string()));
        }
        gl.enable_vertex_attrib_array(position as u32);
        gl.vertex_attrib_pointer_with_i32(position as u32, 2, Gl::FLOAT, false, 0, 0);

        Ok(Self {
            time: gl.get_uniform_location(&program, "u_time"),
            resolution: gl.get_uniform_location(&program, "u_resolution"),
            mouse: gl.get_uniform_location(&program, "u_mouse"),
            gl,
            canvas,
        })
    }

    fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }

    fn draw(&self, elapsed: f64, pointer: (f64, f64)) {
        let gl = &self.gl;
        gl.uniform1f(self.time.as_ref(), elapsed as f32);
        gl.uniform2f(
            self.resolution.as_ref(),
            self.canvas.width() as f32,
            self.canvas.height() as f32,
        );
        gl.uniform2f(self.mouse.as_ref(), pointer.0 as f32, pointer.1 as f32);
        gl.draw_arrays(Gl::TRIANGLES, 0, 6);
    }
}

fn compile(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, BackgroundError> {
    let shader = gl.create_shader(kind).ok_or(BackgroundError::Unavailable)?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(BackgroundError::Compile(log))
    }
}

fn link(gl: &Gl, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, BackgroundError> {
    let program = gl.create_program().ok_or(BackgroundError::Unavailable)?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        Err(BackgroundError::Link(
            gl.get_program_info_log(&program).unwrap_or_default(),
        ))
    }
}

fn window_size() -> (u32, u32) {
    let dimension = |v: Result<wasm_bindgen::JsValue, _>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or_default() as u32
    };
    let window = window();
    (dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Full-viewport noise field that drifts toward the pointer. Renders nothing
/// but the bare canvas when WebGL is missing.
#[component]
pub fn FluidBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let renderer = StoredValue::new_local(None::<FluidRenderer>);
    let pointer = StoredValue::new((
        Spring::new(SpringConfig::POINTER, 0.0),
        Spring::new(SpringConfig::POINTER, 0.0),
    ));
    let elapsed = StoredValue::new(0.0_f64);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match FluidRenderer::new(canvas) {
            Ok(r) => {
                let (width, height) = window_size();
                r.resize(width, height);
                pointer.update_value(|(x, y)| {
                    x.snap(width as f64 / 2.0);
                    y.snap(height as f64 / 2.0);
                });
                renderer.set_value(Some(r));
            }
            Err(e) => log::warn!("fluid background disabled: {e}"),
        }
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let (width, height) = window_size();
        renderer.with_value(|r| {
            if let Some(r) = r {
                r.resize(width, height);
            }
        });
    });

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let Some(height) = renderer.with_value(|r| r.as_ref().map(FluidRenderer::height)) else {
            return;
        };
        // GL's origin is the bottom left corner.
        let x = ev.client_x() as f64;
        let y = height - ev.client_y() as f64;
        pointer.update_value(|(px, py)| {
            px.set_target(x);
            py.set_target(y);
        });
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let dt = args.delta / 1000.0;
        let Some(t) = elapsed.try_update_value(|t| {
            *t += dt;
            *t
        }) else {
            return;
        };
        let Some(position) = pointer.try_update_value(|(x, y)| {
            x.step(dt);
            y.step(dt);
            (x.value(), y.value())
        }) else {
            return;
        };
        renderer.with_value(|r| {
            if let Some(r) = r {
                r.draw(t, position);
            }
        });
    });

    view! { <canvas node_ref=canvas_ref class="fixed inset-0 w-full h-full z-0 pointer-events-none" /> }
}
