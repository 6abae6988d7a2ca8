// Image viewer: load a file, show it in a window, close on any key.
//
// The image is decoded before any window exists; a file that cannot be
// opened or decoded exits with a failure status without touching the GUI.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use pixlab::{load_rgb8, RgbImageU8};
use std::process::ExitCode;

const DEFAULT_IMAGE_PATH: &str = "./data/sample_0.png.png";

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string());

    let image = match load_rgb8(&path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Could not open or find the image: {} ({})", path, e);
            return ExitCode::FAILURE;
        }
    };

    let title = format!("pixlab-view - {}", path);
    let native_options = eframe::NativeOptions::default();
    let result = eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| {
            Ok::<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>>(Box::new(
                ViewerApp::new(image),
            ))
        }),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Viewer failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

struct ViewerApp {
    image: RgbImageU8,
    texture: Option<TextureHandle>,
}

impl ViewerApp {
    fn new(image: RgbImageU8) -> Self {
        Self {
            image,
            texture: None,
        }
    }

    fn texture(&mut self, ctx: &egui::Context) -> &TextureHandle {
        let image = &self.image;
        self.texture.get_or_insert_with(|| {
            let size = [image.width() as usize, image.height() as usize];
            let color_image = ColorImage::from_rgb(size, image.as_slice());
            ctx.load_texture("image", color_image, TextureOptions::LINEAR)
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any key press dismisses the window
        let key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }))
        });
        if key_pressed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let tex = self.texture(ctx).clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            aspect_fit(ui, &tex);
        });
    }
}

/// Draw a texture scaled to fit the available space preserving aspect ratio
fn aspect_fit(ui: &mut egui::Ui, tex: &TextureHandle) {
    let avail = ui.available_size();
    let tex_size = tex.size_vec2();
    let scale = (avail.x / tex_size.x).min(avail.y / tex_size.y).max(0.0);
    let draw_size = tex_size * scale;
    ui.add(egui::Image::new(tex).fit_to_exact_size(draw_size));
}
