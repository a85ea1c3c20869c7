use eframe::egui;

use crate::app::PixelPaintApp;
use crate::input::{self, PointerEvent};
use crate::renderer::Renderer;

const PRIMARY: egui::PointerButton = egui::PointerButton::Primary;

pub fn central_panel(app: &mut PixelPaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let scale = app.cell_scale();
        let picture = app.editor().display_picture().clone();
        let size = Renderer::canvas_size(&picture, scale);

        egui::ScrollArea::both().drag_to_scroll(false).show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            app.renderer_mut().render(&painter, response.rect, &picture);

            if let Some(event) = pointer_event(&response, scale) {
                app.editor_mut().handle_pointer(event);
            }
        });
    });
}

/// Translate primary-button drags on the canvas into grid-space pointer
/// events
fn pointer_event(response: &egui::Response, scale: f32) -> Option<PointerEvent> {
    let to_grid = |pos: egui::Pos2| {
        let local = pos - response.rect.min;
        input::grid_position(local.x, local.y, scale)
    };

    if response.drag_started_by(PRIMARY) {
        response
            .interact_pointer_pos()
            .map(|pos| PointerEvent::Down(to_grid(pos)))
    } else if response.drag_stopped_by(PRIMARY) {
        Some(PointerEvent::Up)
    } else if response.dragged_by(PRIMARY) {
        response
            .interact_pointer_pos()
            .map(|pos| PointerEvent::Move(to_grid(pos)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Press, drag across the canvas and release `button`, collecting the
    /// pointer events the canvas produces
    fn drag_with(button: egui::PointerButton) -> Vec<PointerEvent> {
        let ctx = egui::Context::default();
        let screen = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(300.0, 300.0));
        let press = |pos: egui::Pos2, pressed: bool| egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        let frames = vec![
            vec![egui::Event::PointerMoved(egui::pos2(30.0, 30.0))],
            vec![press(egui::pos2(30.0, 30.0), true)],
            vec![egui::Event::PointerMoved(egui::pos2(70.0, 30.0))],
            vec![egui::Event::PointerMoved(egui::pos2(100.0, 60.0))],
            vec![press(egui::pos2(100.0, 60.0), false)],
            vec![],
        ];

        let mut events = Vec::new();
        for (frame, input) in frames.into_iter().enumerate() {
            let raw = egui::RawInput {
                screen_rect: Some(screen),
                time: Some(frame as f64 * 0.1),
                events: input,
                ..Default::default()
            };
            let _ = ctx.run(raw, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let (response, _painter) =
                        ui.allocate_painter(egui::vec2(200.0, 200.0), egui::Sense::drag());
                    events.extend(pointer_event(&response, 10.0));
                });
            });
        }
        events
    }

    #[test]
    fn test_primary_drag_produces_gesture() {
        let events = drag_with(egui::PointerButton::Primary);
        assert!(matches!(events.first(), Some(PointerEvent::Down(_))));
        assert!(events.iter().any(|e| matches!(e, PointerEvent::Move(_))));
        assert_eq!(events.last(), Some(&PointerEvent::Up));
    }

    #[test]
    fn test_other_buttons_do_not_draw() {
        assert!(drag_with(egui::PointerButton::Secondary).is_empty());
        assert!(drag_with(egui::PointerButton::Middle).is_empty());
    }
}
