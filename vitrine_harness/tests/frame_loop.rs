// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end frame-loop tests: notifications, minimum-size updates,
//! compositor passes, and diagnostics, wired the way a host would.

use kurbo::Vec2;

use vitrine_core::config::DisplayConfig;
use vitrine_core::minsize::minimum_window_size;
use vitrine_core::notify::{Callbacks, ModeChangeEvent, RedrawEvent};
use vitrine_core::pixels::PixelSize;
use vitrine_core::screen::{Rotation, ScreenId, ScreenMode, ScreenStore, TextureId};
use vitrine_core::trace::Tracer;
use vitrine_core::window::{WindowId, WindowMetrics};
use vitrine_harness::RecordingBackend;
use vitrine_render::{Compositor, GpuCommand, WaitMode};

const EPS: f64 = 1e-9;

/// Everything the host threads through its callbacks.
struct Host {
    store: ScreenStore,
    compositor: Compositor,
    backend: RecordingBackend,
    config: DisplayConfig,
    metrics: WindowMetrics,
    min_size: Option<PixelSize>,
}

impl Host {
    fn new(window: PixelSize, mode: PixelSize) -> (Self, ScreenId) {
        let mut store = ScreenStore::new();
        let screen = store.create_screen(ScreenMode::new(mode));
        store.set_texture(screen, Some(TextureId(1)));
        let host = Self {
            store,
            compositor: Compositor::new(WindowId(0)),
            backend: RecordingBackend::new(),
            config: DisplayConfig::default(),
            metrics: WindowMetrics::new(window, 1.0),
            min_size: None,
        };
        (host, screen)
    }

    fn present(&mut self, screen: ScreenId, wait: WaitMode) {
        let metrics = self.metrics;
        self.compositor.present(
            &mut self.backend,
            &mut self.store,
            screen,
            &metrics,
            &self.config,
            None,
            wait,
            &mut Tracer::none(),
        );
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn mode_change_callback_updates_the_minimum_size() {
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));

    let mut on_mode_change: Callbacks<Host, ModeChangeEvent> = Callbacks::new();
    on_mode_change.add(|host, event| {
        let state = host.store.screen(event.screen);
        host.min_size = Some(minimum_window_size(
            &state.mode(),
            state.rotation(),
            host.metrics.device_pixel_ratio,
            false,
        ));
    });

    let old_mode = host.store.screen(screen).mode();
    on_mode_change.emit(
        &mut host,
        &ModeChangeEvent {
            screen,
            old_mode,
        },
    );
    assert_eq!(host.min_size, Some(PixelSize::new(176, 208)));

    // Rotation transposes the minimum footprint.
    host.store.set_rotation(screen, Rotation::Deg90);
    on_mode_change.emit(
        &mut host,
        &ModeChangeEvent {
            screen,
            old_mode,
        },
    );
    assert_eq!(host.min_size, Some(PixelSize::new(208, 176)));
}

#[test]
fn redraw_callback_drives_a_presentation_pass() {
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));

    let mut on_redraw: Callbacks<Host, RedrawEvent> = Callbacks::new();
    let token = on_redraw.add(|host, event| {
        host.present(event.screen, WaitMode::Block);
    });

    on_redraw.emit(
        &mut host,
        &RedrawEvent {
            screen,
            direct_access: false,
        },
    );
    assert_eq!(host.backend.submissions().len(), 1);
    let last = host.backend.submissions()[0].commands.last();
    assert_eq!(last, Some(&GpuCommand::Present));

    // Unregistered callbacks stop firing.
    assert!(on_redraw.remove(token));
    on_redraw.emit(
        &mut host,
        &RedrawEvent {
            screen,
            direct_access: true,
        },
    );
    assert_eq!(host.backend.submissions().len(), 1);
}

#[test]
fn letterboxed_pass_matches_the_reference_numbers() {
    // 176x208 mode in an 800x600 window, aspect preserved, auto-fit:
    // width-fit would be 945.9 px tall, so the clamp re-fits to the
    // height: scale 600/208, content 507.69x600 at x 146.15.
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));
    host.present(screen, WaitMode::Block);

    let scale = 600.0 / 208.0;
    let width = 176.0 * scale;
    let state = host.store.screen(screen);
    assert!(close(state.native_scale_factor().x, scale));
    assert!(close(state.native_scale_factor().y, scale));
    assert!(close(state.absolute_position().x, (800.0 - width) / 2.0));
    assert!(close(state.absolute_position().y, 0.0));

    let draw = host.backend.submissions()[0]
        .commands
        .iter()
        .find_map(|c| match c {
            GpuCommand::DrawBitmap { destination, .. } => Some(*destination),
            _ => None,
        })
        .expect("pass must draw the screen texture");
    assert!(close(draw.width(), width));
    assert!(close(draw.height(), 600.0));
    assert!(close(draw.y0, 0.0));
}

#[test]
fn quarter_turn_pass_transposes_the_destination() {
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));
    host.store.set_rotation(screen, Rotation::Deg90);
    host.present(screen, WaitMode::Block);

    let scale = 600.0 / 208.0;
    let width = 176.0 * scale;
    let draw = host.backend.submissions()[0]
        .commands
        .iter()
        .find_map(|c| match c {
            GpuCommand::DrawBitmap {
                destination,
                rotation,
                ..
            } => Some((*destination, *rotation)),
            _ => None,
        })
        .expect("pass must draw the screen texture");

    assert_eq!(draw.1, Rotation::Deg90);
    // The on-screen footprint transposes relative to the upright pass and
    // stays centered.
    assert!(close(draw.0.width(), 600.0));
    assert!(close(draw.0.height(), width));
    assert!(close(draw.0.x0 + draw.0.x1, 800.0));
    assert!(close(draw.0.y0 + draw.0.y1, 600.0));

    // Write-backs stay in the texture's own orientation.
    let state = host.store.screen(screen);
    assert!(close(state.native_scale_factor().x, scale));
    assert!(close(state.absolute_position().y, 0.0));
}

#[test]
fn dirty_channels_drive_the_loop() {
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));
    host.store.drain_changes();

    host.store.set_rotation(screen, Rotation::Deg180);
    host.store.mark_content_dirty(screen);

    let changes = host.store.drain_changes();
    // Mode and rotation changes require a minimum-size update first.
    for &idx in changes.modes.iter().chain(&changes.rotations) {
        let state = host.store.screen_at(idx);
        host.min_size = Some(minimum_window_size(
            &state.mode(),
            state.rotation(),
            host.metrics.device_pixel_ratio,
            false,
        ));
    }
    // Any change re-presents.
    if !changes.is_empty() {
        host.present(screen, WaitMode::Block);
    }

    assert_eq!(host.min_size, Some(PixelSize::new(176, 208)));
    assert_eq!(host.backend.submissions().len(), 1);
    assert!(host.store.drain_changes().is_empty());
}

#[test]
fn deferred_frames_complete_on_the_next_wait() {
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));
    host.backend = RecordingBackend::deferred();
    host.backend.set_completion_code(1);

    host.present(screen, WaitMode::Block);
    assert!(host.compositor.fence().is_pending());

    // The next blocking pass waits the previous frame out, then leaves its
    // own frame in flight.
    host.present(screen, WaitMode::Block);
    assert!(host.compositor.fence().is_pending());
    assert_eq!(host.backend.submissions().len(), 2);
}

#[test]
fn synchronous_redraw_after_resize_skips_the_wait() {
    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));

    host.present(screen, WaitMode::Block);
    // Immediate-mode backend: the frame completed at submission, so the
    // post-resize redraw may skip the fence wait.
    host.metrics = WindowMetrics::new(PixelSize::new(640, 480), 1.0);
    host.present(screen, WaitMode::Skip);

    assert_eq!(host.backend.submissions().len(), 2);
    let state = host.store.screen(screen);
    assert!(close(state.native_scale_factor().y, 480.0 / 208.0));
}

#[test]
fn trace_records_the_pass_in_order() {
    use vitrine_debug::recorder::{RecordedEvent, RecorderSink, decode};

    let (mut host, screen) = Host::new(PixelSize::new(800, 600), PixelSize::new(176, 208));
    let mut sink = RecorderSink::new();
    {
        let mut tracer = Tracer::new(&mut sink);
        let metrics = host.metrics;
        host.compositor.present(
            &mut host.backend,
            &mut host.store,
            screen,
            &metrics,
            &host.config,
            None,
            WaitMode::Block,
            &mut tracer,
        );
    }

    let events: Vec<_> = decode(sink.as_bytes()).collect();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], RecordedEvent::FenceWait(_)));
    match events[1] {
        RecordedEvent::Viewport(e) => {
            assert_eq!(e.window, WindowId(0));
            assert_eq!(e.scale, Vec2::new(600.0 / 208.0, 600.0 / 208.0));
        }
        ref other => panic!("expected Viewport, got {other:?}"),
    }
    match events[2] {
        RecordedEvent::Submit(e) => assert_eq!(e.commands as usize, host.backend.submissions()[0].len()),
        ref other => panic!("expected Submit, got {other:?}"),
    }

    let mut json = Vec::new();
    vitrine_debug::json::export(sink.as_bytes(), &mut json).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}
