use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::{Pixels, wgpu};

use crate::controllers::session::FrameTelemetry;

/// Builds the telemetry window for one egui pass.
pub fn build_overlay(ctx: &EguiContext, telemetry: &FrameTelemetry) {
    egui::Window::new("Telemetry")
        .title_bar(false)
        .resizable(false)
        .fixed_pos([110.0, 10.0])
        .show(ctx, |ui| {
            for line in telemetry.lines() {
                ui.colored_label(egui::Color32::WHITE, line);
            }
        });

    egui::Window::new("Toggle")
        .title_bar(false)
        .resizable(false)
        .frame(egui::Frame::none())
        .fixed_pos([15.0, 312.0])
        .show(ctx, |ui| {
            ui.colored_label(egui::Color32::WHITE, "Toggle Fractal");
        });
}

/// Presents the pixels framebuffer with the egui output painted over it.
pub fn render_with_overlay(
    pixels: &Pixels<'static>,
    egui_renderer: &mut EguiRenderer,
    egui_ctx: &EguiContext,
    egui_output: egui::FullOutput,
    size_in_pixels: [u32; 2],
) -> Result<(), pixels::Error> {
    pixels.render_with(|encoder, render_target, context| {
        context.scaling_renderer.render(encoder, render_target);

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;

        for (id, delta) in &textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
        }

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: render_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        for id in &textures_delta.free {
            egui_renderer.free_texture(id);
        }

        Ok(())
    })
}
