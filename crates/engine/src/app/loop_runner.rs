use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pixels::Error as PixelsError;
use thiserror::Error;
use tracing::{info, warn};
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, Event, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowBuilder;

use crate::content::{AssetLoader, AssetPaths};
use crate::world::{ControllerConfig, FrameStepper, InputIntent, Vec2};
use crate::AppPaths;

use super::input::{ActionStates, InputAction, VirtualJoystick};
use super::metrics::MetricsAccumulator;
use super::Renderer;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_tps: u32,
    pub max_frame_delta: Duration,
    pub max_ticks_per_frame: u32,
    pub metrics_log_interval: Duration,
    pub max_render_fps: Option<u32>,
    pub controller: ControllerConfig,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            window_title: "tilewalk".to_string(),
            window_width: 1280,
            window_height: 720,
            target_tps: 60,
            max_frame_delta: Duration::from_millis(250),
            max_ticks_per_frame: 5,
            metrics_log_interval: Duration::from_secs(1),
            max_render_fps: None,
            controller: ControllerConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("failed to create application window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    CreateRenderer(#[source] PixelsError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
}

pub fn run_app(config: LoopConfig, paths: &AppPaths) -> Result<(), AppError> {
    let asset_paths = AssetPaths::under(&paths.asset_dir);
    info!(
        root = %paths.root.display(),
        asset_dir = %paths.asset_dir.display(),
        "startup"
    );

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                config.window_width as f64,
                config.window_height as f64,
            ))
            .build(&event_loop)
            .map_err(AppError::CreateWindow)?,
    );
    let window_for_loop = Arc::clone(&window);
    let mut renderer = Renderer::new(window).map_err(AppError::CreateRenderer)?;
    let mut stepper = FrameStepper::new(&config.controller, renderer.viewport());
    let mut asset_loader = AssetLoader::new(asset_paths);

    event_loop.set_control_flow(ControlFlow::Poll);

    let target_tps = config.target_tps.max(1);
    let max_frame_delta =
        normalize_non_zero_duration(config.max_frame_delta, Duration::from_millis(250));
    let max_ticks_per_frame = config.max_ticks_per_frame.max(1);
    let metrics_log_interval =
        normalize_non_zero_duration(config.metrics_log_interval, Duration::from_secs(1));
    let fixed_dt = fixed_tick_duration(target_tps);
    let effective_render_cap = normalize_render_fps_cap(config.max_render_fps);
    let render_frame_target = target_frame_duration(effective_render_cap);
    let mut input_collector = InputCollector::default();

    info!(
        target_tps,
        max_frame_delta_ms = max_frame_delta.as_millis() as u64,
        max_ticks_per_frame,
        metrics_log_interval_ms = metrics_log_interval.as_millis() as u64,
        render_fps_cap = %format_render_cap(effective_render_cap),
        zoom = stepper.zoom(),
        speed = stepper.actor().speed,
        "loop_config"
    );

    let mut accumulator = Duration::ZERO;
    let mut last_frame_instant = Instant::now();
    let mut last_present_instant = Instant::now();
    let mut metrics_accumulator = MetricsAccumulator::new(metrics_log_interval);

    event_loop
        .run(move |event, window_target| match event {
            Event::WindowEvent { window_id, event } if window_id == window_for_loop.id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        info!(reason = "window_close", "shutdown_requested");
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(error) = renderer.resize(new_size.width, new_size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                            return;
                        }
                        stepper.set_viewport(renderer.viewport());
                    }
                    WindowEvent::ScaleFactorChanged { .. } => {
                        let size = window_for_loop.inner_size();
                        if let Err(error) = renderer.resize(size.width, size.height) {
                            warn!(error = %error, "renderer_resize_failed");
                            window_target.exit();
                            return;
                        }
                        stepper.set_viewport(renderer.viewport());
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input_collector
                            .set_cursor_position_px(position.x as f32, position.y as f32);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        input_collector.clear_cursor_position();
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        input_collector.handle_mouse_input(button, state);
                    }
                    WindowEvent::Touch(touch) => {
                        input_collector.handle_touch(&touch);
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if input_collector.handle_keyboard_input(&event) {
                            stepper.mark_dirty();
                        }
                        if input_collector.quit_requested {
                            info!(reason = "escape_key", "shutdown_requested");
                            window_target.exit();
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(update) = asset_loader.poll() {
                            let readiness = stepper.on_asset_ready(update.kind, &update.asset);
                            info!(
                                asset = update.kind.as_str(),
                                readiness = ?readiness,
                                "asset_signaled"
                            );
                            renderer.set_asset(update.kind, update.asset);
                        }

                        let now = Instant::now();
                        let raw_frame_dt = now.saturating_duration_since(last_frame_instant);
                        last_frame_instant = now;

                        let clamped_frame_dt = clamp_frame_delta(raw_frame_dt, max_frame_delta);
                        accumulator = accumulator.saturating_add(clamped_frame_dt);

                        let step_plan = plan_sim_steps(accumulator, fixed_dt, max_ticks_per_frame);
                        for _ in 0..step_plan.ticks_to_run {
                            let intent = input_collector.snapshot_for_tick();
                            stepper.tick(intent);
                            metrics_accumulator.record_tick();
                        }
                        accumulator = step_plan.remaining_accumulator;

                        if step_plan.dropped_backlog > Duration::ZERO {
                            warn!(
                                dropped_backlog_ms = step_plan.dropped_backlog.as_millis() as u64,
                                max_ticks_per_frame, "sim_clamp_triggered"
                            );
                        }

                        // Single authoritative FPS cap sleep point for render pacing.
                        let elapsed_since_last_present =
                            Instant::now().saturating_duration_since(last_present_instant);
                        let cap_sleep =
                            compute_cap_sleep(elapsed_since_last_present, render_frame_target);
                        if cap_sleep > Duration::ZERO {
                            thread::sleep(cap_sleep);
                        }

                        if stepper.take_dirty() {
                            if let Err(error) = renderer.render_frame(&stepper) {
                                warn!(error = %error, "renderer_draw_failed");
                                window_target.exit();
                            }
                            metrics_accumulator.record_repaint();
                            last_present_instant = Instant::now();
                        }
                        metrics_accumulator.record_frame(raw_frame_dt);

                        if let Some(snapshot) = metrics_accumulator.maybe_snapshot(now) {
                            let actor = stepper.actor().position;
                            let camera = stepper.camera();
                            info!(
                                fps = snapshot.fps,
                                tps = snapshot.tps,
                                repaints_per_second = snapshot.repaints_per_second,
                                frame_time_ms = snapshot.frame_time_ms,
                                actor_x = actor.x,
                                actor_y = actor.y,
                                camera_x = camera.x,
                                camera_y = camera.y,
                                readiness = ?stepper.readiness(),
                                intent = ?stepper.state().intent(),
                                "loop_metrics"
                            );
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window_for_loop.request_redraw();
            }
            Event::LoopExiting => {
                info!(assets_pending = !asset_loader.is_finished(), "shutdown");
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

/// Merges the two intent writers: held keys and the drag joystick.
#[derive(Debug, Default)]
struct InputCollector {
    quit_requested: bool,
    action_states: ActionStates,
    joystick: VirtualJoystick,
    cursor_position_px: Option<Vec2>,
    left_mouse_is_down: bool,
    joystick_touch_id: Option<u64>,
}

impl InputCollector {
    fn mark_quit_requested(&mut self) {
        self.quit_requested = true;
    }

    /// Returns true for a key press, which owes a repaint.
    fn handle_keyboard_input(&mut self, key_event: &winit::event::KeyEvent) -> bool {
        let is_pressed = key_event.state == ElementState::Pressed;
        self.update_action_state_from_physical_key(key_event.physical_key, is_pressed);
        is_pressed
    }

    fn update_action_state_from_physical_key(&mut self, key: PhysicalKey, is_pressed: bool) {
        match key {
            PhysicalKey::Code(KeyCode::KeyW) | PhysicalKey::Code(KeyCode::ArrowUp) => {
                self.action_states.set(InputAction::MoveUp, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyS) | PhysicalKey::Code(KeyCode::ArrowDown) => {
                self.action_states.set(InputAction::MoveDown, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyA) | PhysicalKey::Code(KeyCode::ArrowLeft) => {
                self.action_states.set(InputAction::MoveLeft, is_pressed);
            }
            PhysicalKey::Code(KeyCode::KeyD) | PhysicalKey::Code(KeyCode::ArrowRight) => {
                self.action_states.set(InputAction::MoveRight, is_pressed);
            }
            PhysicalKey::Code(KeyCode::Escape) => {
                self.action_states.set(InputAction::Quit, is_pressed);
                if is_pressed {
                    self.mark_quit_requested();
                }
            }
            _ => {}
        }
    }

    fn snapshot_for_tick(&self) -> InputIntent {
        self.action_states
            .movement_intent()
            .union(self.joystick.intent())
    }

    fn set_cursor_position_px(&mut self, x: f32, y: f32) {
        let position = Vec2 { x, y };
        self.cursor_position_px = Some(position);
        if !self.left_mouse_is_down {
            return;
        }
        // A press that arrived before any cursor position anchors here.
        if self.joystick.is_active() {
            self.joystick.drag_to(position);
        } else {
            self.joystick.begin(position);
        }
    }

    fn clear_cursor_position(&mut self) {
        self.cursor_position_px = None;
        if self.left_mouse_is_down {
            self.left_mouse_is_down = false;
            self.joystick.end();
        }
    }

    fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left || self.joystick_touch_id.is_some() {
            return;
        }
        match state {
            ElementState::Pressed => {
                if !self.joystick.is_active() {
                    if let Some(cursor) = self.cursor_position_px {
                        self.joystick.begin(cursor);
                    }
                }
                self.left_mouse_is_down = true;
            }
            ElementState::Released => {
                self.left_mouse_is_down = false;
                self.joystick.end();
            }
        }
    }

    fn handle_touch(&mut self, touch: &Touch) {
        let position = Vec2 {
            x: touch.location.x as f32,
            y: touch.location.y as f32,
        };
        self.handle_touch_phase(touch.id, touch.phase, position);
    }

    fn handle_touch_phase(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        match phase {
            TouchPhase::Started => {
                if self.joystick_touch_id.is_none() && !self.left_mouse_is_down {
                    self.joystick_touch_id = Some(id);
                    self.joystick.begin(position);
                }
            }
            TouchPhase::Moved => {
                if self.joystick_touch_id == Some(id) {
                    self.joystick.drag_to(position);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.joystick_touch_id == Some(id) {
                    self.joystick_touch_id = None;
                    self.joystick.end();
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StepPlan {
    ticks_to_run: u32,
    remaining_accumulator: Duration,
    dropped_backlog: Duration,
}

fn plan_sim_steps(
    mut accumulator: Duration,
    fixed_dt: Duration,
    max_ticks_per_frame: u32,
) -> StepPlan {
    let mut ticks_to_run = 0u32;

    while accumulator >= fixed_dt && ticks_to_run < max_ticks_per_frame {
        accumulator = accumulator.saturating_sub(fixed_dt);
        ticks_to_run = ticks_to_run.saturating_add(1);
    }

    if accumulator >= fixed_dt {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: Duration::ZERO,
            dropped_backlog: accumulator,
        }
    } else {
        StepPlan {
            ticks_to_run,
            remaining_accumulator: accumulator,
            dropped_backlog: Duration::ZERO,
        }
    }
}

fn fixed_tick_duration(target_tps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / target_tps.max(1) as f64)
}

fn clamp_frame_delta(frame_dt: Duration, max_frame_delta: Duration) -> Duration {
    frame_dt.min(max_frame_delta)
}

fn normalize_non_zero_duration(value: Duration, fallback: Duration) -> Duration {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

fn normalize_render_fps_cap(cap: Option<u32>) -> Option<u32> {
    cap.filter(|value| *value > 0)
}

fn target_frame_duration(max_render_fps: Option<u32>) -> Option<Duration> {
    max_render_fps.map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
}

fn compute_cap_sleep(elapsed: Duration, target: Option<Duration>) -> Duration {
    match target {
        Some(frame_target) if elapsed < frame_target => frame_target - elapsed,
        _ => Duration::ZERO,
    }
}

fn format_render_cap(cap: Option<u32>) -> String {
    match cap {
        Some(value) => value.to_string(),
        None => "off".to_string(),
    }
}
