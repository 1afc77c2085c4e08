//! Application shell
//!
//! Owns the window, GPU context, and render loop, and drives a [`Sketch`]
//! through the host callbacks: pointer events as they arrive, one `step`
//! per `RedrawRequested`. Raw mouse motion comes in through device events,
//! the same per-event deltas the original demo read from `movementX`.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use tumble_render::{Camera, RenderContext, SceneGeometry, ScenePipeline, SceneUniforms};
use tumble_math::Vec3;

use crate::config::AppConfig;
use crate::sketch::Sketch;

/// The application shell, generic over the demo it runs
pub struct App<S: Sketch> {
    config: AppConfig,
    sketch: S,
    camera: Camera,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<ScenePipeline>,
    /// Last cursor position in window coordinates, for picking
    cursor_position: (f32, f32),
}

impl<S: Sketch> App<S> {
    /// Create the shell around a sketch
    pub fn new(config: AppConfig, sketch: S) -> Self {
        let camera = Camera {
            position: Vec3::from_array(config.camera.position),
            target: Vec3::from_array(config.camera.target),
            up: Vec3::Y,
            fov_y: config.camera.fov,
            near: config.camera.near,
            far: config.camera.far,
        };

        Self {
            config,
            sketch,
            camera,
            window: None,
            render_context: None,
            pipeline: None,
            cursor_position: (0.0, 0.0),
        }
    }

    /// Run the event loop until the window closes
    pub fn run(&mut self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(self).expect("Event loop error");
    }

    /// Rebuild and upload vertex data if any entity changed
    fn refresh_geometry(&mut self) {
        if !self.sketch.world().has_dirty_entities() {
            return;
        }
        let geometry = SceneGeometry::from_world(self.sketch.world());
        if let (Some(pipeline), Some(ctx)) = (&mut self.pipeline, &self.render_context) {
            pipeline.upload_geometry(&ctx.device, &geometry);
        }
        self.sketch.world_mut().clear_all_dirty();
    }

    /// Current viewport size in pixels
    fn viewport(&self) -> (f32, f32) {
        match &self.render_context {
            Some(ctx) => (ctx.size.width as f32, ctx.size.height as f32),
            None => (
                self.config.window.width as f32,
                self.config.window.height as f32,
            ),
        }
    }
}

impl<S: Sketch> ApplicationHandler for App<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::new(window.clone()));

            let mut pipeline =
                ScenePipeline::new(&render_context.device, render_context.config.format);
            pipeline.ensure_depth_texture(
                &render_context.device,
                render_context.size.width,
                render_context.size.height,
            );

            let geometry = SceneGeometry::from_world(self.sketch.world());
            pipeline.upload_geometry(&render_context.device, &geometry);
            self.sketch.world_mut().clear_all_dirty();

            log::info!(
                "Scene: {} entities, {} triangle vertices, {} line vertices",
                self.sketch.world().entity_count(),
                geometry.triangle_vertex_count(),
                geometry.line_vertex_count()
            );

            self.sketch.on_resize(
                render_context.size.width as f32,
                render_context.size.height as f32,
            );

            window.request_redraw();

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &mut self.pipeline) {
                    pipeline.ensure_depth_texture(
                        &ctx.device,
                        physical_size.width,
                        physical_size.height,
                    );
                }
                self.sketch
                    .on_resize(physical_size.width as f32, physical_size.height as f32);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            let (width, height) = self.viewport();
                            let (x, y) = self.cursor_position;
                            let ray = self.camera.screen_ray(x, y, width, height);
                            self.sketch.on_pointer_down(ray);
                        }
                        ElementState::Released => {
                            self.sketch.on_pointer_up();
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                // One fixed step per frame; the sketches have no dt
                self.sketch.step();
                self.refresh_geometry();

                if let (Some(ctx), Some(pipeline)) = (&self.render_context, &self.pipeline) {
                    let uniforms = SceneUniforms {
                        view_matrix: self.camera.view_matrix(),
                        projection_matrix: self.camera.projection_matrix(ctx.aspect_ratio()),
                        light_dir: self.config.rendering.light_dir,
                        ambient_strength: self.config.rendering.ambient_strength,
                        diffuse_strength: self.config.rendering.diffuse_strength,
                        _padding: [0.0; 3],
                    };
                    pipeline.update_uniforms(&ctx.queue, &uniforms);

                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Frame Encoder"),
                            });

                    let bg = &self.config.rendering.background_color;
                    pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        },
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.sketch
                .on_pointer_move(delta.0 as f32, delta.1 as f32);
        }
    }
}
