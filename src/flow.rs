//! Flow control and application event loop.
//!
//! A "flow" is a self contained part of the application that reacts to
//! input, updates its state and says what to draw each frame. The engine
//! owns the window and GPU context, forwards events to every flow and draws
//! their renders batched per pipeline.
//!
//! # Lifecycle
//!
//! Each frame:
//! 1. Forward window/device events to the camera and all flows
//! 2. Tick the [`Clock`], advance the camera, call `on_update`
//! 3. Collect every flow's `on_render` and sort it into pipeline batches
//! 4. Draw lit shapes, then unlit cubes, and present

use std::{fmt::Debug, iter, pin::Pin, sync::Arc};

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use crate::{
    clock::Clock,
    config::SceneConfig,
    context::{Context, InitContext},
    data_structures::model::DrawMesh,
    render::{Instanced, Render},
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Returned from the lifecycle hooks.
///
/// `Configure` runs a closure against the [`Context`], for instance to change
/// the clear colour. `Exit` closes the application. `Empty` does nothing.
pub enum Out {
    Configure(Box<dyn FnOnce(&mut Context)>),
    Exit,
    Empty,
}

impl Default for Out {
    fn default() -> Self {
        Self::Empty
    }
}

/// A renderable scene or game state.
///
/// 1. `on_init()` is called once after the context exists
/// 2. `on_window_events()` and `on_device_events()` are called for each winit input event
/// 3. `on_update()` is called every frame with the frame clock
/// 4. `on_render()` is called every frame and says what to draw
pub trait GraphicsFlow {
    /// The only place that may modify the context directly.
    fn on_init(&mut self, ctx: &mut Context) -> Out;

    fn on_update(&mut self, ctx: &Context, clock: &Clock) -> Out;

    fn on_device_events(&mut self, ctx: &Context, event: &DeviceEvent) -> Out;

    fn on_window_events(&mut self, ctx: &Context, event: &WindowEvent) -> Out;

    fn on_render(&self) -> Render<'_>;
}

impl Debug for dyn GraphicsFlow + 'static {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GraphicsFlow")
    }
}

/// Builds a flow once the GPU device exists.
pub type FlowConstructor = Box<
    dyn FnOnce(InitContext) -> Pin<Box<dyn Future<Output = anyhow::Result<Box<dyn GraphicsFlow>>>>>,
>;

#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    is_surface_configured: bool,
}

impl AppState {
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.resize(width, height);
            self.is_surface_configured = true;
        }
    }

    fn render(&mut self, graphics_flows: &[Box<dyn GraphicsFlow>]) -> Result<(), wgpu::SurfaceError> {
        self.ctx.window.request_redraw();

        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let mut shapes: Vec<Instanced> = Vec::new();
            let mut cubes: Vec<Instanced> = Vec::new();
            graphics_flows
                .iter()
                .for_each(|flow| flow.on_render().set_pipelines(&mut shapes, &mut cubes));

            render_pass.set_pipeline(&self.ctx.pipelines.shape);
            for instanced in shapes {
                if instanced.amount == 0 || instanced.instance.size() == 0 {
                    log::warn!("skipping {} with zero instances", instanced.mesh.name);
                    continue;
                }
                render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
                render_pass.draw_lit_mesh_instanced(
                    instanced.mesh,
                    instanced.material,
                    0..instanced.amount as u32,
                    &self.ctx.camera_resources.bind_group,
                    &self.ctx.light.bind_group,
                );
            }

            render_pass.set_pipeline(&self.ctx.pipelines.cube);
            for instanced in cubes {
                if instanced.amount == 0 || instanced.instance.size() == 0 {
                    log::warn!("skipping {} with zero instances", instanced.mesh.name);
                    continue;
                }
                render_pass.set_vertex_buffer(1, instanced.instance.slice(..));
                render_pass.draw_mesh_instanced(
                    instanced.mesh,
                    instanced.material,
                    0..instanced.amount as u32,
                    &self.ctx.camera_resources.bind_group,
                );
            }
        }

        self.ctx.queue.submit(iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub(crate) enum FlowEvent {
    #[allow(dead_code)]
    Initialized {
        state: AppState,
        flows: Vec<Box<dyn GraphicsFlow>>,
    },
    #[allow(dead_code)]
    Failed(anyhow::Error),
}

impl Debug for FlowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { state: _, flows } => {
                f.debug_struct("Initialized").field("flows", flows).finish()
            }
            Self::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
        }
    }
}

pub struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[allow(dead_code)]
    proxy: winit::event_loop::EventLoopProxy<FlowEvent>,
    scene: SceneConfig,
    state: Option<AppState>,
    graphics_flows: Vec<Box<dyn GraphicsFlow>>,
    // taken on first resume
    constructors: Option<Vec<FlowConstructor>>,
    clock: Clock,
    failure: Option<anyhow::Error>,
}

impl App {
    fn new(
        event_loop: &EventLoop<FlowEvent>,
        scene: SceneConfig,
        constructors: Vec<FlowConstructor>,
    ) -> anyhow::Result<Self> {
        let proxy = event_loop.create_proxy();
        Ok(Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime: tokio::runtime::Runtime::new()?,
            proxy,
            scene,
            state: None,
            graphics_flows: Vec::new(),
            constructors: Some(constructors),
            clock: Clock::new(),
            failure: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: anyhow::Error) {
        log::error!("{e:#}");
        self.failure = Some(e);
        event_loop.exit();
    }

    fn start(&mut self, mut app_state: AppState, flows: Vec<Box<dyn GraphicsFlow>>) {
        let size = app_state.ctx.window.inner_size();
        app_state.resize(size.width, size.height);
        self.graphics_flows = flows;
        let outs: Vec<Out> = self
            .graphics_flows
            .iter_mut()
            .map(|flow| flow.on_init(&mut app_state.ctx))
            .collect();
        app_state.ctx.window.request_redraw();
        self.state = Some(app_state);
        for out in outs {
            self.handle_flow_output(None, out);
        }
        self.clock = Clock::new();
    }

    fn handle_flow_output(&mut self, event_loop: Option<&ActiveEventLoop>, out: Out) {
        match out {
            Out::Configure(f) => {
                if let Some(state) = &mut self.state {
                    f(&mut state.ctx);
                }
            }
            Out::Exit => match event_loop {
                Some(event_loop) => event_loop.exit(),
                None => log::warn!("exit requested before the event loop was running"),
            },
            Out::Empty => (),
        }
    }
}

async fn init(
    window: Arc<Window>,
    scene: SceneConfig,
    constructors: Vec<FlowConstructor>,
) -> anyhow::Result<(AppState, Vec<Box<dyn GraphicsFlow>>)> {
    let ctx = Context::new(window, &scene).await?;
    let flow_futures: Vec<_> = constructors
        .into_iter()
        .map(|constructor| constructor((&ctx).into()))
        .collect();
    let flows = futures::future::join_all(flow_futures)
        .await
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()?;
    let app_state = AppState {
        ctx,
        is_surface_configured: false,
    };
    Ok((app_state, flows))
}

impl ApplicationHandler<FlowEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(constructors) = self.constructors.take() else {
            return;
        };

        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes()
            .with_title(self.scene.title.clone())
            .with_inner_size(LogicalSize::new(self.scene.width, self.scene.height));

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let init_future = init(window, self.scene.clone(), constructors);

        #[cfg(not(target_arch = "wasm32"))]
        {
            match self.async_runtime.block_on(init_future) {
                Ok((app_state, flows)) => self.start(app_state, flows),
                Err(e) => self.fail(event_loop, e),
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let event = match init_future.await {
                    Ok((state, flows)) => FlowEvent::Initialized { state, flows },
                    Err(e) => FlowEvent::Failed(e),
                };
                if proxy.send_event(event).is_err() {
                    log::error!("event loop closed before initialisation finished");
                }
            });
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: FlowEvent) {
        match event {
            FlowEvent::Initialized { state, flows } => self.start(state, flows),
            FlowEvent::Failed(e) => self.fail(event_loop, e),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            state.ctx.camera.controller.handle_mouse(dx, dy);
        }
        let outs: Vec<Out> = self
            .graphics_flows
            .iter_mut()
            .map(|f| f.on_device_events(&state.ctx, &event))
            .collect();
        for out in outs {
            self.handle_flow_output(None, out);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        state.ctx.camera.controller.handle_window_events(&event);

        let outs: Vec<Out> = self
            .graphics_flows
            .iter_mut()
            .map(|f| f.on_window_events(&state.ctx, &event))
            .collect();
        for out in outs {
            self.handle_flow_output(Some(event_loop), out);
        }

        let Some(state) = &mut self.state else {
            return;
        };
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();

                state.ctx.camera.update(dt);
                let ctx = &mut state.ctx;
                ctx.camera_resources.write(&ctx.queue, &ctx.camera);

                let outs: Vec<Out> = self
                    .graphics_flows
                    .iter_mut()
                    .map(|f| f.on_update(&state.ctx, &self.clock))
                    .collect();

                match state.render(&self.graphics_flows) {
                    Ok(_) => (),
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }

                for out in outs {
                    self.handle_flow_output(Some(event_loop), out);
                }
            }
            _ => {}
        }
    }
}

/// Open the window and run `constructors`' flows until the window closes.
pub fn run(scene: SceneConfig, constructors: Vec<FlowConstructor>) -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    let event_loop: EventLoop<FlowEvent> = EventLoop::with_user_event().build()?;

    let mut app = App::new(&event_loop, scene, constructors)?;

    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
